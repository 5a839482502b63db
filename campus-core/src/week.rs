//! Week-number resolution and semester status.
//!
//! All arithmetic is on calendar days relative to the semester start (the
//! Sunday of week 1), never on raw 24h intervals, so time-of-day and DST
//! cannot skew the week index.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::SemesterContext;

/// Where a date falls relative to a semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemesterStatus {
    Before,
    In,
    After,
}

/// Week number (1..=week_count) of `date`, or `None` outside the semester.
///
/// Day 0 is week 1; day 140 of a 20-week semester is already past the end.
pub fn current_week(ctx: &SemesterContext, date: NaiveDate) -> Option<u8> {
    let days = (date - ctx.start).num_days();
    if days < 0 {
        return None;
    }
    let week = days / 7 + 1;
    if week > ctx.week_count as i64 {
        return None;
    }
    Some(week as u8)
}

/// Classify `date` against the semester window. The end bound
/// (`start + week_count` weeks) is exclusive: that date is already `After`.
pub fn semester_status(ctx: &SemesterContext, date: NaiveDate) -> SemesterStatus {
    let end = ctx.start + Duration::weeks(ctx.week_count as i64);
    if date < ctx.start {
        SemesterStatus::Before
    } else if date < end {
        SemesterStatus::In
    } else {
        SemesterStatus::After
    }
}
