//! campus-core: pure computation library behind the campus companion.
//!
//! Schedule temporal reasoning (week numbers, daily projection, live
//! status), dorm electricity trend analysis, and the widget refresh
//! timeline. Everything is a synchronous function over immutable value
//! snapshots; fetch, cache, and rendering live in the surrounding crates.

pub mod electricity;
pub mod live;
pub mod model;
pub mod projector;
pub mod timeline;
pub mod timetable;
pub mod week;

pub use electricity::{charge_cycles, consumption_rate, predicted_exhaustion, severity, Severity};
pub use live::{relevant_session, LivePhase, LiveSession, JUST_ENDED_WINDOW_SECS, UPCOMING_WINDOW_SECS};
pub use model::{
    AssessmentMethod, Course, ElectricityReading, GradeRecord, ScheduleEntry, SemesterContext,
    Session, Weekday, GRADE_POINT_SCALE,
};
pub use projector::{today_sessions, TodaySession};
pub use timeline::{refresh_plan, timeline_snapshot, TimelineSnapshot};
pub use timetable::{period_times, session_times, PERIOD_COUNT, PERIOD_MINUTES, SEMESTER_WEEKS};
pub use week::{current_week, semester_status, SemesterStatus};
