//! Data model for the campus schedule core.
//!
//! Everything here is a plain serializable value: the fetch layer hands these
//! in as immutable snapshots and the computation modules return new derived
//! values. No interior mutability, no shared state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timetable::SEMESTER_WEEKS;

/// Day of week as the academic system numbers it: Sunday = 0 .. Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

/// A recurring weekly time slot for a course.
///
/// Periods are 1-based and inclusive on both ends; `weeks` lists the week
/// numbers (1..=20) this slot is active on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub day: Weekday,
    pub start_period: u8,
    pub end_period: u8,
    pub classroom: Option<String>,
    pub weeks: Vec<u8>,
}

impl Session {
    pub fn new(day: Weekday, start_period: u8, end_period: u8) -> Self {
        Self {
            day,
            start_period,
            end_period,
            classroom: None,
            weeks: Vec::new(),
        }
    }

    pub fn with_classroom(mut self, classroom: impl Into<String>) -> Self {
        self.classroom = Some(classroom.into());
        self
    }

    pub fn with_weeks(mut self, weeks: Vec<u8>) -> Self {
        self.weeks = weeks;
        self
    }

    /// True if this slot is active on the given week and weekday.
    pub fn occurs_on(&self, week: u8, day: Weekday) -> bool {
        self.day == day && self.weeks.contains(&week)
    }

    /// How many times this slot occurs across the term.
    pub fn occurrences(&self) -> usize {
        self.weeks.len()
    }

    /// Number of class periods this slot spans.
    pub fn period_count(&self) -> u8 {
        self.end_period.saturating_sub(self.start_period) + 1
    }
}

/// A course as fetched from the academic system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub course_id: Option<String>,
    pub teacher: Option<String>,
    pub group: Option<String>,
    pub sessions: Vec<Session>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            course_id: None,
            teacher: None,
            group: None,
            sessions: Vec::new(),
        }
    }

    pub fn with_id(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    pub fn with_teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = Some(teacher.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions.push(session);
        self
    }
}

/// A course paired with one of its sessions: the flattened "this course,
/// at this slot" view. Transient, recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub course_name: String,
    pub teacher: Option<String>,
    pub session: Session,
}

impl ScheduleEntry {
    pub fn new(course: &Course, session: &Session) -> Self {
        Self {
            course_name: course.name.clone(),
            teacher: course.teacher.clone(),
            session: session.clone(),
        }
    }
}

/// Semester anchor: the calendar date of Sunday of week 1, plus the week
/// count. All week and status computations are relative to this pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterContext {
    pub start: NaiveDate,
    pub week_count: u8,
}

impl SemesterContext {
    pub fn new(start: NaiveDate) -> Self {
        Self {
            start,
            week_count: SEMESTER_WEEKS,
        }
    }

    pub fn with_week_count(mut self, week_count: u8) -> Self {
        self.week_count = week_count;
        self
    }
}

/// How a course's final mark is awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentMethod {
    /// "考试" in the grade sheet.
    Exam,
    /// "考查" in the grade sheet.
    Assessment,
    #[serde(other)]
    Other,
}

impl AssessmentMethod {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "考试" => AssessmentMethod::Exam,
            "考查" => AssessmentMethod::Assessment,
            _ => AssessmentMethod::Other,
        }
    }
}

/// The discrete grade-point scale the university publishes. Grade points
/// only ever take one of these values, which is why exact equality against
/// 0.0 and 1.0 in the review math is safe.
pub const GRADE_POINT_SCALE: [f64; 11] = [
    0.0, 1.0, 1.3, 1.7, 2.0, 2.3, 2.7, 3.0, 3.3, 3.7, 4.0,
];

/// One row of the per-semester grade sheet. Immutable once fetched; a
/// re-fetch replaces the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub course_id: String,
    pub course_name: String,
    /// 0-100.
    pub grade: i32,
    pub credit: f64,
    /// One of [`GRADE_POINT_SCALE`].
    pub grade_point: f64,
    /// Semester label, e.g. "2025-2026-1".
    pub semester: String,
    pub assessment: AssessmentMethod,
    pub course_nature: Option<String>,
}

/// One dorm electricity meter reading. The stored log carries no ordering
/// guarantee; consumers sort by timestamp before deriving trends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricityReading {
    pub at: chrono::DateTime<chrono::Utc>,
    /// kWh remaining on the meter.
    pub level: f64,
}

impl ElectricityReading {
    pub fn new(at: chrono::DateTime<chrono::Utc>, level: f64) -> Self {
        Self { at, level }
    }
}
