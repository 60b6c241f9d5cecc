//! Timestamp parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use series_spi::{Observation, RawObservation};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];

/// Parse a timestamp-like string.
///
/// Accepts RFC 3339 (converted to UTC), common date-time and date layouts,
/// year-month (`2024-03`, first of month) and a bare four digit year.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // Year-month, e.g. "2024-03" or "2024/03"
    if s.len() == 7 {
        let padded = format!("{}-01", s.replace('/', "-"));
        if let Ok(d) = NaiveDate::parse_from_str(&padded, "%Y-%m-%d") {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = s.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0);
    }

    None
}

/// Parse raw rows, dropping those whose timestamp does not parse.
///
/// Returns the parsed observations in input order and the number of dropped rows.
pub fn parse_observations(raw: &[RawObservation]) -> (Vec<Observation>, usize) {
    let mut dropped = 0;
    let observations = raw
        .iter()
        .filter_map(|row| match parse_timestamp(&row.timestamp) {
            Some(ts) => Some(Observation::new(ts, row.value)),
            None => {
                dropped += 1;
                None
            }
        })
        .collect();
    (observations, dropped)
}
