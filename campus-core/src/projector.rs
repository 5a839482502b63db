//! Daily schedule projection: which sessions run today, and where the
//! wall clock sits relative to each.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::model::{Course, ScheduleEntry, SemesterContext, Weekday};
use crate::timetable::session_times;
use crate::week::current_week;

/// A session scheduled on the target date, with resolved clock times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodaySession {
    pub entry: ScheduleEntry,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    /// True if the session is in progress at the target instant.
    pub is_current: bool,
}

/// All of today's sessions with resolved times, sorted by start period,
/// finished ones included. Sessions with a period index outside the
/// timetable are skipped.
pub(crate) fn resolved_today(
    ctx: &SemesterContext,
    now: NaiveDateTime,
    courses: &[Course],
) -> Vec<(ScheduleEntry, NaiveTime, NaiveTime)> {
    let Some(week) = current_week(ctx, now.date()) else {
        return Vec::new();
    };
    let today = Weekday::from_chrono(chrono::Datelike::weekday(&now.date()));

    let mut candidates: Vec<(&Course, &crate::model::Session)> = courses
        .iter()
        .flat_map(|c| c.sessions.iter().map(move |s| (c, s)))
        .filter(|(_, s)| s.occurs_on(week, today))
        .collect();
    candidates.sort_by_key(|(_, s)| s.start_period);

    candidates
        .into_iter()
        .filter_map(|(course, session)| {
            let (starts_at, ends_at) = session_times(session)?;
            Some((ScheduleEntry::new(course, session), starts_at, ends_at))
        })
        .collect()
}

/// Today's not-yet-finished sessions at `now`, in start order.
///
/// Outside the semester the result is empty. A session whose end time has
/// already passed is dropped; one that has started but not ended is marked
/// current.
pub fn today_sessions(
    ctx: &SemesterContext,
    now: NaiveDateTime,
    courses: &[Course],
) -> Vec<TodaySession> {
    let t = now.time();
    resolved_today(ctx, now, courses)
        .into_iter()
        .filter(|(_, _, ends_at)| *ends_at > t)
        .map(|(entry, starts_at, ends_at)| TodaySession {
            is_current: t >= starts_at,
            entry,
            starts_at,
            ends_at,
        })
        .collect()
}
