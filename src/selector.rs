use crate::error::{DumpError, DumpResult};
use crate::fit::*;
use crate::inspect::{Inspect, Node};
use tracing::debug;

macro_rules! bodies {
    ($($variant:ident($body:ident) => $accessor:ident,)*) => {
        /// The typed body of a decoded file.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Body {
            $($variant($body),)*
        }

        impl Body {
            /// Type name of the body, e.g. `ActivityFile`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Body::$variant(_) => <$body as FileBody>::NAME,)*
                }
            }
        }

        impl Inspect for Body {
            fn to_node(&self) -> Node<'_> {
                match self {
                    $(Body::$variant(body) => body.to_node(),)*
                }
            }
        }

        /// Extracts the body matching the file's type.
        pub fn select<F: DecodedFile + ?Sized>(file: &F) -> DumpResult<Body> {
            let file_type = file.file_type();
            debug!(%file_type, "selecting file body");
            let body = match file_type {
                $(FileType::$variant => file.$accessor().map(Body::$variant),)*
                FileType::Unknown(_) => return Err(DumpError::UnknownFileType(file_type)),
            };
            body.map_err(|source| DumpError::Extraction { file_type, source })
        }
    };
}

bodies! {
    Activity(ActivityFile) => activity,
    Device(DeviceFile) => device,
    Settings(SettingsFile) => settings,
    Sport(SportFile) => sport,
    Workout(WorkoutFile) => workout,
    Course(CourseFile) => course,
    Schedules(SchedulesFile) => schedules,
    Weight(WeightFile) => weight,
    Totals(TotalsFile) => totals,
    Goals(GoalsFile) => goals,
    BloodPressure(BloodPressureFile) => blood_pressure,
    MonitoringA(MonitoringAFile) => monitoring_a,
    ActivitySummary(ActivitySummaryFile) => activity_summary,
    MonitoringDaily(MonitoringDailyFile) => monitoring_daily,
    MonitoringB(MonitoringBFile) => monitoring_b,
    Segment(SegmentFile) => segment,
    SegmentList(SegmentListFile) => segment_list,
}
