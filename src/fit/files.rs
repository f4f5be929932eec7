//! Typed bodies of the known FIT file types.
//!
//! Every layout lists the messages the FIT SDK defines for that file type.
//! Messages of other kinds present in the file are not part of the body.

use super::message::Message;
use super::FileType;
use crate::inspect::{Inspect, Member, Node};

/// A typed layout gathered from the body messages of a decoded file.
pub trait FileBody: Inspect + Sized {
    const FILE_TYPE: FileType;
    /// Type name used as the root of the dumped tree.
    const NAME: &'static str;

    fn from_messages(messages: &[Message]) -> Self;
}

trait Slot {
    fn gather(kind: &str, messages: &[Message]) -> Self;
}

impl Slot for Option<Message> {
    fn gather(kind: &str, messages: &[Message]) -> Self {
        messages.iter().find(|it| it.kind == kind).cloned()
    }
}

impl Slot for Vec<Message> {
    fn gather(kind: &str, messages: &[Message]) -> Self {
        messages
            .iter()
            .filter(|it| it.kind == kind)
            .cloned()
            .collect()
    }
}

macro_rules! file_body {
    (
        $(#[$meta:meta])*
        $name:ident($file_type:ident) {
            $($field:ident: $slot:ty = $kind:literal as $label:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $field: $slot,)*
        }

        impl FileBody for $name {
            const FILE_TYPE: FileType = FileType::$file_type;
            const NAME: &'static str = stringify!($name);

            fn from_messages(messages: &[Message]) -> Self {
                $name {
                    $($field: <$slot as Slot>::gather($kind, messages),)*
                }
            }
        }

        impl Inspect for $name {
            fn to_node(&self) -> Node<'_> {
                Node::Struct(vec![
                    $(Member::new($label, self.$field.to_node()),)*
                ])
            }
        }
    };
}

file_body! {
    /// Recorded activity with its sessions, laps and samples.
    ActivityFile(Activity) {
        activity: Option<Message> = "activity" as "Activity",
        sessions: Vec<Message> = "session" as "Sessions",
        laps: Vec<Message> = "lap" as "Laps",
        lengths: Vec<Message> = "length" as "Lengths",
        records: Vec<Message> = "record" as "Records",
        events: Vec<Message> = "event" as "Events",
        hrvs: Vec<Message> = "hrv" as "Hrvs",
        hrs: Vec<Message> = "hr" as "Hrs",
        device_infos: Vec<Message> = "device_info" as "DeviceInfos",
        developer_data_ids: Vec<Message> = "developer_data_id" as "DeveloperDataIds",
        field_descriptions: Vec<Message> = "field_description" as "FieldDescriptions",
    }
}

file_body! {
    DeviceFile(Device) {
        softwares: Vec<Message> = "software" as "Softwares",
        capabilities: Vec<Message> = "capabilities" as "Capabilities",
        file_capabilities: Vec<Message> = "file_capabilities" as "FileCapabilities",
        mesg_capabilities: Vec<Message> = "mesg_capabilities" as "MesgCapabilities",
        field_capabilities: Vec<Message> = "field_capabilities" as "FieldCapabilities",
    }
}

file_body! {
    SettingsFile(Settings) {
        user_profiles: Vec<Message> = "user_profile" as "UserProfiles",
        hrm_profiles: Vec<Message> = "hrm_profile" as "HrmProfiles",
        sdm_profiles: Vec<Message> = "sdm_profile" as "SdmProfiles",
        bike_profiles: Vec<Message> = "bike_profile" as "BikeProfiles",
        device_settings: Vec<Message> = "device_settings" as "DeviceSettings",
    }
}

file_body! {
    SportFile(Sport) {
        zones_target: Option<Message> = "zones_target" as "ZonesTarget",
        sport: Option<Message> = "sport" as "Sport",
        hr_zones: Vec<Message> = "hr_zone" as "HrZones",
        power_zones: Vec<Message> = "power_zone" as "PowerZones",
        met_zones: Vec<Message> = "met_zone" as "MetZones",
        speed_zones: Vec<Message> = "speed_zone" as "SpeedZones",
        cadence_zones: Vec<Message> = "cadence_zone" as "CadenceZones",
    }
}

file_body! {
    WorkoutFile(Workout) {
        workout: Option<Message> = "workout" as "Workout",
        workout_steps: Vec<Message> = "workout_step" as "WorkoutSteps",
    }
}

file_body! {
    CourseFile(Course) {
        course: Option<Message> = "course" as "Course",
        laps: Vec<Message> = "lap" as "Laps",
        course_points: Vec<Message> = "course_point" as "CoursePoints",
        records: Vec<Message> = "record" as "Records",
    }
}

file_body! {
    SchedulesFile(Schedules) {
        schedules: Vec<Message> = "schedule" as "Schedules",
    }
}

file_body! {
    WeightFile(Weight) {
        user_profile: Option<Message> = "user_profile" as "UserProfile",
        weight_scales: Vec<Message> = "weight_scale" as "WeightScales",
        device_infos: Vec<Message> = "device_info" as "DeviceInfos",
    }
}

file_body! {
    TotalsFile(Totals) {
        totals: Vec<Message> = "totals" as "Totals",
    }
}

file_body! {
    GoalsFile(Goals) {
        goals: Vec<Message> = "goal" as "Goals",
    }
}

file_body! {
    BloodPressureFile(BloodPressure) {
        user_profile: Option<Message> = "user_profile" as "UserProfile",
        blood_pressures: Vec<Message> = "blood_pressure" as "BloodPressures",
        device_infos: Vec<Message> = "device_info" as "DeviceInfos",
    }
}

file_body! {
    MonitoringAFile(MonitoringA) {
        monitoring_info: Option<Message> = "monitoring_info" as "MonitoringInfo",
        monitorings: Vec<Message> = "monitoring" as "Monitorings",
        device_infos: Vec<Message> = "device_info" as "DeviceInfos",
    }
}

file_body! {
    /// Summary of an activity without its records.
    ActivitySummaryFile(ActivitySummary) {
        activity: Option<Message> = "activity" as "Activity",
        sessions: Vec<Message> = "session" as "Sessions",
        laps: Vec<Message> = "lap" as "Laps",
    }
}

file_body! {
    MonitoringDailyFile(MonitoringDaily) {
        monitoring_info: Option<Message> = "monitoring_info" as "MonitoringInfo",
        monitorings: Vec<Message> = "monitoring" as "Monitorings",
    }
}

file_body! {
    MonitoringBFile(MonitoringB) {
        monitoring_info: Option<Message> = "monitoring_info" as "MonitoringInfo",
        monitorings: Vec<Message> = "monitoring" as "Monitorings",
        device_infos: Vec<Message> = "device_info" as "DeviceInfos",
    }
}

file_body! {
    SegmentFile(Segment) {
        segment_id: Option<Message> = "segment_id" as "SegmentId",
        segment_leaderboard_entries: Vec<Message> =
            "segment_leaderboard_entry" as "SegmentLeaderboardEntries",
        segment_lap: Option<Message> = "segment_lap" as "SegmentLap",
        segment_points: Vec<Message> = "segment_point" as "SegmentPoints",
    }
}

file_body! {
    SegmentListFile(SegmentList) {
        segment_files: Vec<Message> = "segment_file" as "SegmentFiles",
    }
}
