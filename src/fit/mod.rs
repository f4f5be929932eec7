//! Boundary to the FIT decoding collaborator.
//!
//! [`Decoder`] turns a byte stream into a [`DecodedFile`], which exposes its
//! file type and one accessor per typed file body. [`FitDecoder`] is the
//! implementation backed by the `fitparser` crate; tests substitute their own.

mod decode;
mod file;
mod files;
mod header;
mod message;

pub use decode::FitDecoder;
pub use file::{FitFile, UnknownField, UnknownMessage};
pub use files::{
    ActivityFile, ActivitySummaryFile, BloodPressureFile, CourseFile, DeviceFile, FileBody,
    GoalsFile, MonitoringAFile, MonitoringBFile, MonitoringDailyFile, SchedulesFile,
    SegmentFile, SegmentListFile, SettingsFile, SportFile, TotalsFile, WeightFile, WorkoutFile,
};
pub use header::{Crc, Header, ProfileVersion, ProtocolVersion};
pub use message::{Coordinate, Field, FieldValue, Message, RawEnum};

use crate::inspect::Inspect;
use std::fmt;
use std::io::{self, Read};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
    #[error("Input is not a FIT file.")]
    NotFit,
    #[error("Unexpected end of input: attempted to read {needed} bytes from offset {offset}.")]
    Truncated { offset: usize, needed: usize },
    #[error("{0}")]
    Malformed(String),
    #[error("missing file_id message")]
    MissingFileId,
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum AccessError {
    #[error("file type is {actual}, not {expected}")]
    FileTypeMismatch { expected: FileType, actual: FileType },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Keep messages and fields the profile does not know instead of dropping them.
    pub unknown_messages: bool,
}

impl DecodeOptions {
    pub fn with_unknown_messages(mut self) -> Self {
        self.unknown_messages = true;
        self
    }
}

pub trait Decoder {
    type File: DecodedFile;

    fn decode<R: Read>(&self, reader: R, options: &DecodeOptions) -> Result<Self::File, DecodeError>;
}

/// A decoded FIT file whose body can be extracted as one of the typed layouts.
///
/// Each accessor fails when the file's declared type differs from the
/// requested layout.
pub trait DecodedFile: Inspect {
    fn file_type(&self) -> FileType;

    fn activity(&self) -> Result<ActivityFile, AccessError>;
    fn device(&self) -> Result<DeviceFile, AccessError>;
    fn settings(&self) -> Result<SettingsFile, AccessError>;
    fn sport(&self) -> Result<SportFile, AccessError>;
    fn workout(&self) -> Result<WorkoutFile, AccessError>;
    fn course(&self) -> Result<CourseFile, AccessError>;
    fn schedules(&self) -> Result<SchedulesFile, AccessError>;
    fn weight(&self) -> Result<WeightFile, AccessError>;
    fn totals(&self) -> Result<TotalsFile, AccessError>;
    fn goals(&self) -> Result<GoalsFile, AccessError>;
    fn blood_pressure(&self) -> Result<BloodPressureFile, AccessError>;
    fn monitoring_a(&self) -> Result<MonitoringAFile, AccessError>;
    fn activity_summary(&self) -> Result<ActivitySummaryFile, AccessError>;
    fn monitoring_daily(&self) -> Result<MonitoringDailyFile, AccessError>;
    fn monitoring_b(&self) -> Result<MonitoringBFile, AccessError>;
    fn segment(&self) -> Result<SegmentFile, AccessError>;
    fn segment_list(&self) -> Result<SegmentListFile, AccessError>;
}

/// The `file` type carried by the `file_id` message.
#[derive(Debug, Hash, Eq, PartialEq, Copy, Clone)]
pub enum FileType {
    Device,
    Settings,
    Sport,
    Activity,
    Workout,
    Course,
    Schedules,
    Weight,
    Totals,
    Goals,
    BloodPressure,
    MonitoringA,
    ActivitySummary,
    MonitoringDaily,
    MonitoringB,
    Segment,
    SegmentList,
    Unknown(u8),
}

impl FileType {
    pub const INVALID: FileType = FileType::Unknown(0xFF);

    pub const KNOWN: [FileType; 17] = [
        FileType::Device,
        FileType::Settings,
        FileType::Sport,
        FileType::Activity,
        FileType::Workout,
        FileType::Course,
        FileType::Schedules,
        FileType::Weight,
        FileType::Totals,
        FileType::Goals,
        FileType::BloodPressure,
        FileType::MonitoringA,
        FileType::ActivitySummary,
        FileType::MonitoringDaily,
        FileType::MonitoringB,
        FileType::Segment,
        FileType::SegmentList,
    ];

    pub fn as_u8(&self) -> u8 {
        match self {
            FileType::Device => 1,
            FileType::Settings => 2,
            FileType::Sport => 3,
            FileType::Activity => 4,
            FileType::Workout => 5,
            FileType::Course => 6,
            FileType::Schedules => 7,
            FileType::Weight => 9,
            FileType::Totals => 10,
            FileType::Goals => 11,
            FileType::BloodPressure => 14,
            FileType::MonitoringA => 15,
            FileType::ActivitySummary => 20,
            FileType::MonitoringDaily => 28,
            FileType::MonitoringB => 32,
            FileType::Segment => 34,
            FileType::SegmentList => 35,
            FileType::Unknown(value) => *value,
        }
    }

    /// Resolves the profile name of a `file` enum value, e.g. `blood_pressure`.
    pub fn from_name(name: &str) -> Option<FileType> {
        let value = match name {
            "device" => 1,
            "settings" => 2,
            "sport" => 3,
            "activity" => 4,
            "workout" => 5,
            "course" => 6,
            "schedules" => 7,
            "weight" => 9,
            "totals" => 10,
            "goals" => 11,
            "blood_pressure" => 14,
            "monitoring_a" => 15,
            "activity_summary" => 20,
            "monitoring_daily" => 28,
            "monitoring_b" => 32,
            "segment" => 34,
            "segment_list" => 35,
            "exd_configuration" => 40,
            "mfg_range_min" => 0xF7,
            "mfg_range_max" => 0xFE,
            _ => return None,
        };
        Some(FileType::from(value))
    }
}

impl From<u8> for FileType {
    fn from(value: u8) -> Self {
        FileType::KNOWN
            .into_iter()
            .find(|it| it.as_u8() == value)
            .unwrap_or(FileType::Unknown(value))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Device => f.write_str("Device"),
            FileType::Settings => f.write_str("Settings"),
            FileType::Sport => f.write_str("Sport"),
            FileType::Activity => f.write_str("Activity"),
            FileType::Workout => f.write_str("Workout"),
            FileType::Course => f.write_str("Course"),
            FileType::Schedules => f.write_str("Schedules"),
            FileType::Weight => f.write_str("Weight"),
            FileType::Totals => f.write_str("Totals"),
            FileType::Goals => f.write_str("Goals"),
            FileType::BloodPressure => f.write_str("BloodPressure"),
            FileType::MonitoringA => f.write_str("MonitoringA"),
            FileType::ActivitySummary => f.write_str("ActivitySummary"),
            FileType::MonitoringDaily => f.write_str("MonitoringDaily"),
            FileType::MonitoringB => f.write_str("MonitoringB"),
            FileType::Segment => f.write_str("Segment"),
            FileType::SegmentList => f.write_str("SegmentList"),
            FileType::Unknown(0xFF) => f.write_str("FileTypeInvalid"),
            FileType::Unknown(value) => write!(f, "FileType({})", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_round_trip() {
        for file_type in FileType::KNOWN {
            assert_eq!(FileType::from(file_type.as_u8()), file_type);
        }
        assert_eq!(FileType::from(8), FileType::Unknown(8));
    }

    #[test]
    fn from_profile_name() {
        assert_eq!(FileType::from_name("activity"), Some(FileType::Activity));
        assert_eq!(
            FileType::from_name("blood_pressure"),
            Some(FileType::BloodPressure)
        );
        assert_eq!(
            FileType::from_name("exd_configuration"),
            Some(FileType::Unknown(40))
        );
        assert_eq!(FileType::from_name("swimming"), None);
    }

    #[test]
    fn invalid_renders_with_suffix() {
        assert_eq!(FileType::INVALID.to_string(), "FileTypeInvalid");
        assert_eq!(FileType::Unknown(40).to_string(), "FileType(40)");
    }
}
