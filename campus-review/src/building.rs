//! Building-name extraction from classroom labels.
//!
//! Classroom strings look like "金12-101A" (building 金12, room 101, seat
//! block A) or occasionally just "金12". The rule, pinned by tests because
//! it is non-obvious:
//!
//! 1. truncate at the first `-`;
//! 2. strip one trailing uppercase ASCII letter;
//! 3. only when there was no `-`, also strip trailing digits.

/// Extract the building name from a classroom label.
pub fn building_name(classroom: &str) -> String {
    let (head, had_hyphen) = match classroom.split_once('-') {
        Some((head, _)) => (head, true),
        None => (classroom, false),
    };

    let mut name: String = head.trim().to_string();
    if name.chars().last().is_some_and(|c| c.is_ascii_uppercase()) {
        name.pop();
    }
    if !had_hyphen {
        while name.chars().last().is_some_and(|c| c.is_ascii_digit()) {
            name.pop();
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_with_seat_block() {
        assert_eq!(building_name("金12-101A"), "金12");
    }

    #[test]
    fn plain_building_and_room() {
        assert_eq!(building_name("金12-203"), "金12");
    }

    #[test]
    fn no_hyphen_strips_digits() {
        assert_eq!(building_name("金12"), "金");
    }

    #[test]
    fn no_hyphen_strips_block_then_digits() {
        assert_eq!(building_name("理科楼201B"), "理科楼");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(building_name(""), "");
    }
}
