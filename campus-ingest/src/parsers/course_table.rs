//! Course-table JSON export parser.

use anyhow::{Context, Result};

use campus_core::{Course, Session, Weekday};

use crate::parsers::week_spec::parse_week_spec;
use crate::types::RawCourse;

/// Parse a course-table JSON export into normalized courses.
///
/// Slots with a day index outside 0..=6 are dropped; week specs that fail
/// to parse leave the slot with no active weeks (it then never projects).
pub fn parse_course_table(json: &str) -> Result<Vec<Course>> {
    let raw: Vec<RawCourse> =
        serde_json::from_str(json).context("parsing course-table JSON export")?;
    Ok(raw.into_iter().map(normalize).collect())
}

fn normalize(raw: RawCourse) -> Course {
    let mut course = Course::new(raw.name);
    course.course_id = raw.course_id;
    course.teacher = raw.teacher;
    course.group = raw.group;
    course.sessions = raw
        .slots
        .into_iter()
        .filter_map(|slot| {
            let day = Weekday::from_index(slot.day)?;
            let mut session = Session::new(day, slot.start_period, slot.end_period)
                .with_weeks(parse_week_spec(&slot.weeks));
            session.classroom = slot.classroom;
            Some(session)
        })
        .collect();
    course
}
