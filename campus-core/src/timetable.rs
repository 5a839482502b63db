//! Fixed class-period timetable.
//!
//! The university publishes ten 45-minute periods per day with fixed clock
//! times; every schedule computation resolves period indices against this
//! table.

use chrono::NaiveTime;

use crate::model::Session;

/// Weeks in a standard semester.
pub const SEMESTER_WEEKS: u8 = 20;

/// Class periods per day.
pub const PERIOD_COUNT: u8 = 10;

/// Length of one class period in minutes.
pub const PERIOD_MINUTES: u32 = 45;

/// (start, end) clock times for periods 1..=10, as (hour, minute) pairs.
const PERIOD_TABLE: [((u32, u32), (u32, u32)); 10] = [
    ((8, 0), (8, 45)),
    ((8, 55), (9, 40)),
    ((10, 10), (10, 55)),
    ((11, 5), (11, 50)),
    ((14, 0), (14, 45)),
    ((14, 55), (15, 40)),
    ((16, 10), (16, 55)),
    ((17, 5), (17, 50)),
    ((19, 30), (20, 15)),
    ((20, 25), (21, 10)),
];

fn hm(pair: (u32, u32)) -> NaiveTime {
    // The table above only holds valid clock times.
    NaiveTime::from_hms_opt(pair.0, pair.1, 0).unwrap()
}

/// Clock times for a 1-based period index. `None` for anything outside the
/// ten-entry table; callers skip such sessions rather than erroring.
pub fn period_times(period: u8) -> Option<(NaiveTime, NaiveTime)> {
    if period == 0 || period > PERIOD_COUNT {
        return None;
    }
    let (start, end) = PERIOD_TABLE[(period - 1) as usize];
    Some((hm(start), hm(end)))
}

/// Wall-clock span of a session: start of its first period through end of
/// its last. `None` if either period index falls outside the table.
pub fn session_times(session: &Session) -> Option<(NaiveTime, NaiveTime)> {
    let (start, _) = period_times(session.start_period)?;
    let (_, end) = period_times(session.end_period)?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Weekday;

    #[test]
    fn first_and_last_periods() {
        let (s, e) = period_times(1).unwrap();
        assert_eq!(s, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(e, NaiveTime::from_hms_opt(8, 45, 0).unwrap());

        let (s, e) = period_times(10).unwrap();
        assert_eq!(s, NaiveTime::from_hms_opt(20, 25, 0).unwrap());
        assert_eq!(e, NaiveTime::from_hms_opt(21, 10, 0).unwrap());
    }

    #[test]
    fn out_of_range_periods_are_none() {
        assert_eq!(period_times(0), None);
        assert_eq!(period_times(11), None);
    }

    #[test]
    fn session_span_covers_both_periods() {
        let s = Session::new(Weekday::Monday, 3, 4);
        let (start, end) = session_times(&s).unwrap();
        assert_eq!(start, NaiveTime::from_hms_opt(10, 10, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(11, 50, 0).unwrap());
    }

    #[test]
    fn corrupt_period_index_yields_none() {
        let s = Session::new(Weekday::Monday, 9, 12);
        assert_eq!(session_times(&s), None);
    }
}
