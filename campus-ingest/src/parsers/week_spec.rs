//! Week-spec strings from the academic system.
//!
//! The course table encodes recurrence as free text: "1-16周", "3周",
//! "1-8,10-16周", with an optional odd/even marker "(单)" / "(双)".

use regex::Regex;

use campus_core::SEMESTER_WEEKS;

/// Expand a week-spec string into sorted, deduplicated week numbers within
/// `1..=max_week`. Unparsable input or chunks yield nothing rather than an
/// error; the upstream data is messy and a bad slot should not sink the
/// whole table.
pub fn parse_week_spec_with_max(text: &str, max_week: u8) -> Vec<u8> {
    let re = Regex::new(
        r"^(?P<list>\d+(?:-\d+)?(?:[,，、]\d+(?:-\d+)?)*)(?:周)?(?:\((?P<parity>[单双])\))?(?:周)?$",
    )
    .expect("week-spec pattern is valid");

    let Some(caps) = re.captures(text.trim()) else {
        return Vec::new();
    };
    let parity = caps.name("parity").map(|m| m.as_str());

    let mut weeks: Vec<u8> = Vec::new();
    for chunk in caps["list"].split([',', '，', '、']) {
        let (lo, hi) = match chunk.split_once('-') {
            Some((a, b)) => match (a.parse::<u8>(), b.parse::<u8>()) {
                (Ok(a), Ok(b)) if a <= b => (a, b),
                _ => continue,
            },
            None => match chunk.parse::<u8>() {
                Ok(n) => (n, n),
                Err(_) => continue,
            },
        };
        for week in lo..=hi {
            if week == 0 || week > max_week {
                continue;
            }
            let keep = match parity {
                Some("单") => week % 2 == 1,
                Some("双") => week % 2 == 0,
                _ => true,
            };
            if keep {
                weeks.push(week);
            }
        }
    }
    weeks.sort_unstable();
    weeks.dedup();
    weeks
}

/// [`parse_week_spec_with_max`] against the standard 20-week semester.
pub fn parse_week_spec(text: &str) -> Vec<u8> {
    parse_week_spec_with_max(text, SEMESTER_WEEKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_range() {
        assert_eq!(parse_week_spec("1-16周"), (1..=16).collect::<Vec<u8>>());
        assert_eq!(parse_week_spec("1-16"), (1..=16).collect::<Vec<u8>>());
    }

    #[test]
    fn single_week() {
        assert_eq!(parse_week_spec("3周"), vec![3]);
    }

    #[test]
    fn comma_list_of_ranges() {
        assert_eq!(
            parse_week_spec("1-3,5,8-10周"),
            vec![1, 2, 3, 5, 8, 9, 10]
        );
        // Full-width comma shows up in some exports.
        assert_eq!(parse_week_spec("1，3周"), vec![1, 3]);
    }

    #[test]
    fn odd_and_even_markers() {
        assert_eq!(parse_week_spec("1-8周(单)"), vec![1, 3, 5, 7]);
        assert_eq!(parse_week_spec("1-8周(双)"), vec![2, 4, 6, 8]);
        assert_eq!(parse_week_spec("1-8(单)周"), vec![1, 3, 5, 7]);
    }

    #[test]
    fn out_of_range_weeks_are_dropped() {
        assert_eq!(parse_week_spec("18-25周"), vec![18, 19, 20]);
        assert_eq!(parse_week_spec("0-2周"), vec![1, 2]);
    }

    #[test]
    fn garbage_yields_nothing() {
        assert!(parse_week_spec("").is_empty());
        assert!(parse_week_spec("全周").is_empty());
        assert!(parse_week_spec("16-1周").is_empty());
    }
}
