// src/normalize.rs
//
// Tolerant coercion of raw extracted text into typed values. Source
// documents are hand-edited spreadsheets and mail bodies, so every
// function here degrades to a safe default instead of failing.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Parse a piece count out of arbitrary text ("35 PCS" -> 35).
/// Non-digits are stripped first; anything unparsable counts as 0.
pub fn to_int(raw: &str) -> i64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parse a weight out of arbitrary text ("1,234.5" -> 1234.5).
/// Thousands separators are stripped; anything unparsable counts as 0.0.
pub fn to_float(raw: &str) -> f64 {
    raw.replace(',', "")
        .trim()
        .parse::<f64>()
        .unwrap_or(0.0)
        .max(0.0)
}

/// Extract the first time-of-day token from a string as "HH:MM".
///
/// Tries `H:MM` / `HH:MM` first, then bare 3-4 digit tokens ("915",
/// "0915"). Returns an empty string when nothing looks like a time.
pub fn to_time_of_day(raw: &str) -> String {
    if let Ok(re) = Regex::new(r"\b(\d{1,2}):(\d{2})\b") {
        if let Some(c) = re.captures(raw) {
            return format!("{:0>2}:{}", &c[1], &c[2]);
        }
    }
    if let Ok(re) = Regex::new(r"\b(\d{3,4})\b") {
        if let Some(c) = re.captures(raw) {
            let t = format!("{:0>4}", &c[1]);
            return format!("{}:{}", &t[..2], &t[2..]);
        }
    }
    String::new()
}

const MONTHS: [(&str, u32); 12] = [
    ("JAN", 1),
    ("FEB", 2),
    ("MAR", 3),
    ("APR", 4),
    ("MAY", 5),
    ("JUN", 6),
    ("JUL", 7),
    ("AUG", 8),
    ("SEP", 9),
    ("OCT", 10),
    ("NOV", 11),
    ("DEC", 12),
];

/// Normalize a manifest date token ("27FEB", "18 JUL 2026", "18.JUL",
/// "18NOV23") to a calendar date.
///
/// When the token carries no year (or a 2-digit one), the reference date
/// supplies it. A result landing more than ~180 days after the reference
/// is rolled back a year: these documents never talk about the far
/// future, so such a date is a year-boundary artifact ("28DEC" inside a
/// mail processed in early January, and the like).
///
/// Returns `None` for unmappable months or invalid days.
pub fn normalize_date_token(raw: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let re = Regex::new(r"(?i)\b(\d{1,2})[\s./-]*([A-Za-z]{3})[A-Za-z]*[\s./-]*(\d{2,4})?\b").ok()?;
    let caps = re.captures(raw)?;

    let day: u32 = caps[1].parse().ok()?;
    let mon_token = caps[2].to_uppercase();
    let month = MONTHS.iter().find(|(m, _)| *m == mon_token)?.1;

    let year = match caps.get(3) {
        Some(y) => {
            let y: i32 = y.as_str().parse().ok()?;
            if y < 100 {
                2000 + y
            } else {
                y
            }
        }
        None => reference.year(),
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    if date.signed_duration_since(reference).num_days() > 180 {
        return NaiveDate::from_ymd_opt(year - 1, month, day);
    }
    Some(date)
}
