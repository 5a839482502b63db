//! campus-review: annual-review aggregation over `campus-core` data:
//! GPA, grade buckets, schedule habit statistics, teacher/building
//! leaderboards, dorm electricity summaries, and MOOC usage parsing.

pub mod building;
pub mod mooc;
pub mod review;

pub use building::building_name;
pub use mooc::parse_online_minutes;
pub use review::{
    AnnualReview, DormHistory, DormStats, HighestGrade, MoocProfile, StudentProfile,
};
