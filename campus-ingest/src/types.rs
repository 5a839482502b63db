//! Raw export row shapes, as the university systems emit them.
//!
//! These mirror the JSON the academic-system export produces; the parsers
//! normalize them into `campus-core` types.

use serde::Deserialize;

/// One course entry in the course-table JSON export.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCourse {
    pub name: String,
    #[serde(default, rename = "courseId")]
    pub course_id: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub slots: Vec<RawSlot>,
}

/// One time slot inside a raw course entry.
///
/// `day` uses the system's Sunday=0..Saturday=6 numbering; `weeks` is the
/// free-text week spec ("1-16周", "1-8,10-16周(单)", ...).
#[derive(Debug, Clone, Deserialize)]
pub struct RawSlot {
    pub day: u8,
    #[serde(rename = "startPeriod")]
    pub start_period: u8,
    #[serde(rename = "endPeriod")]
    pub end_period: u8,
    pub weeks: String,
    #[serde(default)]
    pub classroom: Option<String>,
}
