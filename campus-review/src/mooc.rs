//! Online-time parsing for the MOOC platform profile.
//!
//! The platform reports accumulated study time as localized free text,
//! e.g. "3小时25分" or just "45分". Either unit may be absent.

use regex::Regex;

/// Total minutes encoded in a "N小时M分" style string. Missing patterns
/// contribute 0, so unrecognized text parses to 0 rather than an error.
pub fn parse_online_minutes(text: &str) -> u32 {
    let hours = capture_number(text, r"(\d+)\s*小时");
    let minutes = capture_number(text, r"(\d+)\s*分");
    hours * 60 + minutes
}

fn capture_number(text: &str, pattern: &str) -> u32 {
    Regex::new(pattern)
        .ok()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
