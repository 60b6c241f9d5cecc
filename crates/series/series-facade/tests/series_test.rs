//! Unit tests for the series facade
//!
//! Frequency aliases, timestamp parsing and model behaviour.

use chrono::NaiveDate;
use series_facade::parse::parse_timestamp;
use series_facade::{Frequency, Observation, RawObservation, SeriesError, TimeSeries};

// ============================================================================
// Frequency Tests
// ============================================================================

#[test]
fn test_frequency_aliases() {
    assert_eq!("D".parse::<Frequency>().unwrap(), Frequency::Days(1));
    assert_eq!("2W".parse::<Frequency>().unwrap(), Frequency::Weeks(2));
    assert_eq!("QS".parse::<Frequency>().unwrap(), Frequency::Quarters(1));
    assert_eq!("YS".parse::<Frequency>().unwrap(), Frequency::Years(1));
    assert_eq!("h".parse::<Frequency>().unwrap(), Frequency::Hours(1));
}

#[test]
fn test_frequency_rejects_unknown() {
    assert!(matches!(
        "X".parse::<Frequency>(),
        Err(SeriesError::InvalidFrequency(_))
    ));
    assert!("0D".parse::<Frequency>().is_err());
}

#[test]
fn test_frequency_display_round_trips() {
    let freq = Frequency::Minutes(15);
    assert_eq!(freq.to_string().parse::<Frequency>().unwrap(), freq);
}

#[test]
fn test_frequency_calendar_advance() {
    let start = NaiveDate::from_ymd_opt(2023, 11, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let next = Frequency::Months(1).advance(start, 3).unwrap();
    assert_eq!(next.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
}

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn test_parse_common_layouts() {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    for text in ["2024-03-15", "2024/03/15", "15.03.2024", "03/15/2024"] {
        assert_eq!(parse_timestamp(text), Some(expected), "layout {}", text);
    }
}

#[test]
fn test_parse_year_month_and_year() {
    let march = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0);
    assert_eq!(parse_timestamp("2024-03"), march);
    let year = NaiveDate::from_ymd_opt(1999, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0);
    assert_eq!(parse_timestamp("1999"), year);
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("yesterday"), None);
    assert_eq!(parse_timestamp("2024-13-01"), None);
}

// ============================================================================
// Model Tests
// ============================================================================

#[test]
fn test_observation_non_finite_is_missing() {
    let t = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert!(Observation::new(t, Some(f64::INFINITY)).is_missing());
    assert!(!Observation::new(t, Some(1.0)).is_missing());
}

#[test]
fn test_raw_observation_constructors() {
    let present = RawObservation::present("2024-01-01", 3.5);
    assert_eq!(present.value, Some(3.5));
    let missing = RawObservation::missing("2024-01-02");
    assert_eq!(missing.value, None);
}

#[test]
fn test_time_series_complete_values() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let series = TimeSeries::from_values(start, Frequency::Hours(1), &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(series.complete_values(), Some(vec![1.0, 2.0, 3.0]));
    assert_eq!(series.missing_count(), 0);
}
