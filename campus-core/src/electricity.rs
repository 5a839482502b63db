//! Dorm electricity trend analysis: depletion rate, predicted exhaustion,
//! severity bands, and recharge detection.
//!
//! The stored meter log carries no ordering guarantee, so every function
//! here sorts by timestamp before looking at the series.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ElectricityReading;

/// Severity band for a remaining-kWh level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Below 10 kWh.
    Critical,
    /// 10 to just under 30 kWh.
    Low,
    /// 30 kWh and up.
    Normal,
}

impl Severity {
    /// Display color for this band.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Critical => "red",
            Severity::Low => "orange",
            Severity::Normal => "green",
        }
    }
}

/// Classify a remaining level into a severity band.
pub fn severity(level: f64) -> Severity {
    if level < 10.0 {
        Severity::Critical
    } else if level < 30.0 {
        Severity::Low
    } else {
        Severity::Normal
    }
}

fn sorted(readings: &[ElectricityReading]) -> Vec<ElectricityReading> {
    let mut rs = readings.to_vec();
    rs.sort_by_key(|r| r.at);
    rs
}

/// Average depletion rate in kWh per day, positive while draining.
///
/// Two-point secant between the earliest and latest reading. `None` with
/// fewer than two readings or a zero time span. A negative value means the
/// balance rose over the window (a recharge).
pub fn consumption_rate(readings: &[ElectricityReading]) -> Option<f64> {
    let rs = sorted(readings);
    let (first, last) = match (rs.first(), rs.last()) {
        (Some(f), Some(l)) if rs.len() >= 2 => (*f, *l),
        _ => return None,
    };
    let span_days = (last.at - first.at).num_seconds() as f64 / 86_400.0;
    if span_days <= 0.0 {
        return None;
    }
    Some((first.level - last.level) / span_days)
}

/// Timestamp at which the balance is expected to hit zero, extrapolated
/// from the latest reading at the historical depletion rate.
///
/// `None` when there is no usable trend: fewer than two readings, or a
/// flat/rising balance (rate <= 0, typically right after a recharge).
pub fn predicted_exhaustion(readings: &[ElectricityReading]) -> Option<DateTime<Utc>> {
    let rate = consumption_rate(readings)?;
    if rate <= 0.0 {
        return None;
    }
    let rs = sorted(readings);
    let last = rs.last()?;
    if last.level <= 0.0 {
        return Some(last.at);
    }
    let days_left = last.level / rate;
    let secs = (days_left * 86_400.0) as i64;
    Some(last.at + Duration::seconds(secs))
}

/// Number of inferred recharge events: adjacent time-sorted pairs where
/// the later level is strictly higher.
pub fn charge_cycles(readings: &[ElectricityReading]) -> usize {
    let rs = sorted(readings);
    rs.windows(2).filter(|w| w[1].level > w[0].level).count()
}
