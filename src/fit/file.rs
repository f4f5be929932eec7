use super::files::*;
use super::header::{Crc, Header};
use super::message::{FieldValue, Message};
use super::{AccessError, DecodedFile, FileType};
use crate::inspect::{Inspect, Member, Node};

/// A decoded FIT file.
///
/// Top-level metadata is public and dumped directly, the body messages are
/// only reachable through the typed accessors of [`DecodedFile`].
#[derive(Debug, Clone, PartialEq)]
pub struct FitFile {
    pub header: Header,
    pub crc: Crc,
    pub file_id: Message,
    pub file_creator: Option<Message>,
    pub timestamp_correlation: Option<Message>,
    pub unknown_messages: Vec<UnknownMessage>,
    pub unknown_fields: Vec<UnknownField>,
    messages: Vec<Message>,
}

/// Number of messages with a global message number the profile does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMessage {
    pub mesg_num: u16,
    pub count: u32,
}

/// Number of occurrences of a field the profile does not define for its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField {
    pub mesg: String,
    pub field_num: u8,
    pub count: u32,
}

impl FitFile {
    pub fn new(header: Header, crc: Crc, file_id: Message) -> Self {
        FitFile {
            header,
            crc,
            file_id,
            file_creator: None,
            timestamp_correlation: None,
            unknown_messages: Vec::new(),
            unknown_fields: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub(crate) fn push_message(&mut self, message: Message) {
        self.messages.push(message)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub(crate) fn count_unknown_message(&mut self, mesg_num: u16) {
        match self
            .unknown_messages
            .iter_mut()
            .find(|it| it.mesg_num == mesg_num)
        {
            Some(unknown) => unknown.count += 1,
            None => self.unknown_messages.push(UnknownMessage { mesg_num, count: 1 }),
        }
    }

    pub(crate) fn count_unknown_field(&mut self, mesg: &str, field_num: u8) {
        match self
            .unknown_fields
            .iter_mut()
            .find(|it| it.mesg == mesg && it.field_num == field_num)
        {
            Some(unknown) => unknown.count += 1,
            None => self.unknown_fields.push(UnknownField {
                mesg: mesg.to_owned(),
                field_num,
                count: 1,
            }),
        }
    }

    fn extract<B: FileBody>(&self) -> Result<B, AccessError> {
        let actual = self.file_type();
        if actual != B::FILE_TYPE {
            return Err(AccessError::FileTypeMismatch {
                expected: B::FILE_TYPE,
                actual,
            });
        }
        Ok(B::from_messages(&self.messages))
    }
}

impl Inspect for FitFile {
    fn to_node(&self) -> Node<'_> {
        Node::Struct(vec![
            Member::new("Header", self.header.to_node()),
            Member::new("File CRC", self.crc.to_node()),
            Member::new("FileId", self.file_id.to_node()),
            Member::new("FileCreator", self.file_creator.to_node()),
            Member::new("TimestampCorrelation", self.timestamp_correlation.to_node()),
            Member::new("UnknownMessages", self.unknown_messages.to_node()),
            Member::new("UnknownFields", self.unknown_fields.to_node()),
            Member::new("messages", self.messages.to_node()),
        ])
    }
}

impl Inspect for UnknownMessage {
    fn to_node(&self) -> Node<'_> {
        Node::Struct(vec![
            Member::new("MesgNum", self.mesg_num.to_node()),
            Member::new("Count", self.count.to_node()),
        ])
    }
}

impl Inspect for UnknownField {
    fn to_node(&self) -> Node<'_> {
        Node::Struct(vec![
            Member::new("Mesg", self.mesg.to_node()),
            Member::new("FieldNum", self.field_num.to_node()),
            Member::new("Count", self.count.to_node()),
        ])
    }
}

impl DecodedFile for FitFile {
    /// Taken from the `type` field of the `file_id` message.
    fn file_type(&self) -> FileType {
        match self.file_id.field("Type") {
            Some(FieldValue::String(name)) => {
                FileType::from_name(name).unwrap_or(FileType::INVALID)
            }
            Some(FieldValue::Enum(raw)) => FileType::from(raw.0),
            // values the profile has no name for come through as plain integers
            Some(value) => value
                .as_integer()
                .and_then(|it| u8::try_from(it).ok())
                .map_or(FileType::INVALID, FileType::from),
            None => FileType::INVALID,
        }
    }

    fn activity(&self) -> Result<ActivityFile, AccessError> {
        self.extract()
    }
    fn device(&self) -> Result<DeviceFile, AccessError> {
        self.extract()
    }
    fn settings(&self) -> Result<SettingsFile, AccessError> {
        self.extract()
    }
    fn sport(&self) -> Result<SportFile, AccessError> {
        self.extract()
    }
    fn workout(&self) -> Result<WorkoutFile, AccessError> {
        self.extract()
    }
    fn course(&self) -> Result<CourseFile, AccessError> {
        self.extract()
    }
    fn schedules(&self) -> Result<SchedulesFile, AccessError> {
        self.extract()
    }
    fn weight(&self) -> Result<WeightFile, AccessError> {
        self.extract()
    }
    fn totals(&self) -> Result<TotalsFile, AccessError> {
        self.extract()
    }
    fn goals(&self) -> Result<GoalsFile, AccessError> {
        self.extract()
    }
    fn blood_pressure(&self) -> Result<BloodPressureFile, AccessError> {
        self.extract()
    }
    fn monitoring_a(&self) -> Result<MonitoringAFile, AccessError> {
        self.extract()
    }
    fn activity_summary(&self) -> Result<ActivitySummaryFile, AccessError> {
        self.extract()
    }
    fn monitoring_daily(&self) -> Result<MonitoringDailyFile, AccessError> {
        self.extract()
    }
    fn monitoring_b(&self) -> Result<MonitoringBFile, AccessError> {
        self.extract()
    }
    fn segment(&self) -> Result<SegmentFile, AccessError> {
        self.extract()
    }
    fn segment_list(&self) -> Result<SegmentListFile, AccessError> {
        self.extract()
    }
}
