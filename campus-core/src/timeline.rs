//! Widget timeline: today's projected sessions plus the wall-clock
//! instants at which the widget should redraw.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::model::{Course, SemesterContext};
use crate::projector::{today_sessions, TodaySession};
use crate::week::{current_week, semester_status, SemesterStatus};

/// Fixed daily refresh points, each placed just after a period-block
/// boundary so the widget flips to the next class promptly.
const REFRESH_POINTS: [(u32, u32); 5] = [(9, 41), (11, 51), (15, 41), (17, 51), (21, 11)];

/// Remaining refresh instants after `now`: the fixed daily points still
/// ahead today, then the day-boundary refresh at next midnight.
pub fn refresh_plan(now: NaiveDateTime) -> Vec<NaiveDateTime> {
    let mut plan: Vec<NaiveDateTime> = REFRESH_POINTS
        .iter()
        .filter_map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0))
        .filter(|t| *t > now.time())
        .map(|t| now.date().and_time(t))
        .collect();
    plan.push((now.date() + Duration::days(1)).and_hms_opt(0, 0, 0).unwrap_or(now));
    plan
}

/// Everything a widget provider needs for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub generated_at: NaiveDateTime,
    pub week: Option<u8>,
    pub status: SemesterStatus,
    pub sessions: Vec<TodaySession>,
    pub refresh_at: Vec<NaiveDateTime>,
}

/// Project the schedule for `now` and attach the refresh plan.
pub fn timeline_snapshot(
    ctx: &SemesterContext,
    now: NaiveDateTime,
    courses: &[Course],
) -> TimelineSnapshot {
    TimelineSnapshot {
        generated_at: now,
        week: current_week(ctx, now.date()),
        status: semester_status(ctx, now.date()),
        sessions: today_sessions(ctx, now, courses),
        refresh_at: refresh_plan(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Session, Weekday};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 17)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn morning_plan_has_all_points_and_midnight() {
        let plan = refresh_plan(at(7, 0));
        assert_eq!(plan.len(), 6);
        assert_eq!(plan[0].time(), NaiveTime::from_hms_opt(9, 41, 0).unwrap());
        assert_eq!(
            *plan.last().unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 18)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn past_points_are_dropped() {
        let plan = refresh_plan(at(16, 0));
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].time(), NaiveTime::from_hms_opt(17, 51, 0).unwrap());
    }

    #[test]
    fn late_night_plan_is_just_midnight() {
        let plan = refresh_plan(at(22, 0));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn snapshot_carries_week_status_and_sessions() {
        let ctx = SemesterContext::new(NaiveDate::from_ymd_opt(2025, 9, 7).unwrap());
        let courses = vec![Course::new("数据结构").with_session(
            Session::new(Weekday::Wednesday, 5, 6).with_weeks((1..=16).collect()),
        )];
        let snap = timeline_snapshot(&ctx, at(12, 0), &courses);
        assert_eq!(snap.week, Some(2));
        assert_eq!(snap.status, SemesterStatus::In);
        assert_eq!(snap.sessions.len(), 1);
        assert!(!snap.refresh_at.is_empty());

        // Snapshots are handed across the process boundary as JSON.
        let json = serde_json::to_string(&snap).unwrap();
        let back: TimelineSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
