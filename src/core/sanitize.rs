// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

// Anchored at the start only: "9:00 - 11:00 (Hall 2)" still counts.
static TIME_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}[:.]\d{2} ?[-–] ?\d{1,2}[:.]\d{2}").unwrap());
static DAY_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^day\s*-?\s*\d+$").unwrap());

/// Collapse runs of whitespace (line breaks and NBSP included) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Non-empty and ASCII digits only ("1", "12"; not "1st", not "").
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// "Day 3", "day-3", "DAY3".
pub fn is_day_label(s: &str) -> bool {
    DAY_LABEL_RE.is_match(s)
}

/// True when `s` starts with a time interval ("9:00 - 11:00", "9.00–11.00"),
/// with or without AM/PM markers.
pub fn is_time_range(s: &str) -> bool {
    TIME_RANGE_RE.is_match(s) || TIME_RANGE_RE.is_match(&strip_meridiem(s))
}

fn strip_meridiem(s: &str) -> String {
    let mut out = normalize_ws(s);
    for pat in ["AM", "PM", "am", "pm", "Am", "Pm", "A.M.", "P.M.", "a.m.", "p.m."] {
        out = out.replace(pat, "");
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_line_breaks() {
        assert_eq!(normalize_ws("  ENG 101\n  English\r\n I \u{a0}"), "ENG 101 English I");
        assert_eq!(normalize_ws("\n\t "), "");
    }

    #[test]
    fn numeric_is_strict() {
        assert!(is_numeric("7"));
        assert!(is_numeric("12"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("Sunday"));
        assert!(!is_numeric("1st"));
    }

    #[test]
    fn day_labels() {
        assert!(is_day_label("Day 1"));
        assert!(is_day_label("day-7"));
        assert!(is_day_label("DAY3"));
        assert!(!is_day_label("Sunday"));
        assert!(!is_day_label("Day"));
    }

    #[test]
    fn time_ranges() {
        assert!(is_time_range("9:00 - 11:00"));
        assert!(is_time_range("09.00–11.00"));
        assert!(is_time_range("9:00 AM - 11:00 AM"));
        assert!(is_time_range("02:00 pm - 04:00 pm"));
        assert!(!is_time_range("CSE 1111"));
        assert!(!is_time_range("Data Structures 2:00"));
    }
}
