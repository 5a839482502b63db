//! Electricity meter-log CSV parser.
//!
//! Header row: 查询时间,剩余电量, a "%Y-%m-%d %H:%M:%S" timestamp plus the
//! remaining kWh at that instant. The meter gives no timezone, so rows are
//! read as UTC instants; only differences between readings feed the trend
//! math.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use campus_core::ElectricityReading;

#[derive(Debug, Deserialize)]
struct RawMeterRow {
    #[serde(rename = "查询时间")]
    at: String,
    #[serde(rename = "剩余电量")]
    level: f64,
}

/// Result of a meter-log import. Malformed rows are skipped, not fatal,
/// but the count is surfaced so the caller can warn.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterImport {
    pub readings: Vec<ElectricityReading>,
    pub skipped: usize,
}

/// Parse a meter-log CSV export. Row order is not significant; consumers
/// sort by timestamp.
pub fn parse_meter_log(csv_text: &str) -> Result<Vec<ElectricityReading>> {
    Ok(parse_meter_log_counting(csv_text)?.readings)
}

/// [`parse_meter_log`], also reporting how many rows were unusable.
pub fn parse_meter_log_counting(csv_text: &str) -> Result<MeterImport> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut readings = Vec::new();
    let mut skipped = 0usize;
    for row in rdr.deserialize::<RawMeterRow>() {
        let row = match row {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        match NaiveDateTime::parse_from_str(row.at.trim(), "%Y-%m-%d %H:%M:%S") {
            Ok(ndt) => readings.push(ElectricityReading::new(ndt.and_utc(), row.level)),
            Err(_) => skipped += 1,
        }
    }
    Ok(MeterImport { readings, skipped })
}

/// Read and parse a meter log from disk.
pub fn parse_meter_log_file(path: impl AsRef<std::path::Path>) -> Result<Vec<ElectricityReading>> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("reading {}", path.as_ref().display()))?;
    parse_meter_log(&text)
}
