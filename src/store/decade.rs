//! Decade bucketing from publication date strings
//!
//! PubMed publication dates arrive in several shapes: ISO dates written by
//! fetch ("2003-05-01"), month-level dates ("1998 Nov", "2001 Jul-Aug"),
//! season dates ("1994 Winter") and bare years ("2020"). Only the year
//! matters for bucketing, so parsing extracts the leading year.

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})\b").expect("valid year regex"));

/// Extract the publication year from a date string.
///
/// Tries a full ISO date first, then falls back to the first four-digit
/// number in the string.
pub fn parse_year(date: &str) -> Option<i32> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    if let Ok(d) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(d.year());
    }

    YEAR_RE
        .captures(date)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

/// Truncate a year to the nearest multiple of ten, rounding toward
/// negative infinity.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Decade bucket for a publication date string.
pub fn decade_for(date: &str) -> Option<i32> {
    parse_year(date).map(decade_of)
}
