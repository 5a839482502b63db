//! Relevant-session selection for the live status surface.
//!
//! One session at a time is worth a live card: an in-progress class beats
//! everything, a class starting within 20 minutes beats one that just
//! ended, and a class that ended more than 5 minutes ago is stale.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::model::{Course, ScheduleEntry, SemesterContext};
use crate::projector::resolved_today;

/// Seconds before its start during which an upcoming session is shown.
pub const UPCOMING_WINDOW_SECS: i64 = 1200;

/// Seconds after its end during which a finished session is still shown.
pub const JUST_ENDED_WINDOW_SECS: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LivePhase {
    InProgress,
    StartingSoon,
    JustEnded,
}

/// The single session currently worth displaying, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSession {
    pub entry: ScheduleEntry,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub phase: LivePhase,
}

/// Pick the most relevant of today's sessions at `now`.
///
/// Priority: in progress (`start <= now < end`, first in start order), then
/// nearest upcoming within [`UPCOMING_WINDOW_SECS`], then most recently
/// ended within [`JUST_ENDED_WINDOW_SECS`]. Both window bounds are
/// inclusive.
pub fn relevant_session(
    ctx: &SemesterContext,
    now: NaiveDateTime,
    courses: &[Course],
) -> Option<LiveSession> {
    let today = resolved_today(ctx, now, courses);
    let t = now.time();

    if let Some((entry, starts_at, ends_at)) = today
        .iter()
        .find(|(_, starts_at, ends_at)| *starts_at <= t && t < *ends_at)
    {
        return Some(LiveSession {
            entry: entry.clone(),
            starts_at: *starts_at,
            ends_at: *ends_at,
            phase: LivePhase::InProgress,
        });
    }

    if let Some((entry, starts_at, ends_at)) = today
        .iter()
        .filter(|(_, starts_at, _)| *starts_at > t)
        .min_by_key(|(_, starts_at, _)| (*starts_at - t).num_seconds())
    {
        if (*starts_at - t).num_seconds() <= UPCOMING_WINDOW_SECS {
            return Some(LiveSession {
                entry: entry.clone(),
                starts_at: *starts_at,
                ends_at: *ends_at,
                phase: LivePhase::StartingSoon,
            });
        }
    }

    if let Some((entry, starts_at, ends_at)) = today
        .iter()
        .filter(|(_, _, ends_at)| *ends_at <= t)
        .min_by_key(|(_, _, ends_at)| (t - *ends_at).num_seconds())
    {
        if (t - *ends_at).num_seconds() <= JUST_ENDED_WINDOW_SECS {
            return Some(LiveSession {
                entry: entry.clone(),
                starts_at: *starts_at,
                ends_at: *ends_at,
                phase: LivePhase::JustEnded,
            });
        }
    }

    None
}
