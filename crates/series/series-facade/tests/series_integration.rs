//! Integration tests for series conditioning

use series_facade::{
    ConditionerConfig, ConditionerConfigBuilder, Frequency, FrequencyInferrer,
    MedianSpacingInferrer, MonthAnchor, RawObservation, SeriesConditioner, SeriesError,
    StandardConditioner,
};

fn daily_rows(days: &[u32], value: impl Fn(u32) -> f64) -> Vec<RawObservation> {
    days.iter()
        .map(|&d| RawObservation::present(format!("2024-01-{:02}", d), value(d)))
        .collect()
}

#[test]
fn test_inferred_daily_with_gap() {
    let raw = daily_rows(&[1, 2, 3, 4, 7, 8, 9, 10], |d| d as f64 * 2.0);
    let conditioned = StandardConditioner::new().condition(&raw).unwrap();

    assert_eq!(conditioned.summary.frequency, Frequency::Days(1));
    assert_eq!(conditioned.summary.inserted_gaps, 2);
    assert_eq!(conditioned.summary.interpolated, 2);

    // Linear data interpolates exactly
    let values = conditioned.series.complete_values().unwrap();
    assert_eq!(values.len(), 10);
    for (i, v) in values.iter().enumerate() {
        assert!((v - (i as f64 + 1.0) * 2.0).abs() < 1e-9);
    }
}

#[test]
fn test_unsorted_input_is_ordered() {
    let raw = daily_rows(&[5, 3, 1, 4, 2], |d| d as f64);
    let conditioned = StandardConditioner::new().condition(&raw).unwrap();
    let values: Vec<f64> = conditioned.series.complete_values().unwrap();
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_edge_missing_values_remain() {
    let mut raw = vec![RawObservation::missing("2024-01-01")];
    raw.extend(daily_rows(&[2, 3, 4], |d| d as f64));
    raw.push(RawObservation::missing("2024-01-05"));

    let conditioned = StandardConditioner::new().condition(&raw).unwrap();
    assert_eq!(conditioned.series.len(), 5);
    assert_eq!(conditioned.series.missing_count(), 2);
    assert_eq!(conditioned.series.complete_span(), Some(1..4));
}

#[test]
fn test_config_driven_conditioner() {
    let config = ConditionerConfigBuilder::new()
        .frequency(Frequency::Days(2))
        .build()
        .unwrap();
    let raw = daily_rows(&[1, 2, 3, 5, 7], |d| d as f64);
    let conditioned = config.conditioner().condition(&raw).unwrap();

    // Days 2 is off the two-day grid anchored at day 1
    assert_eq!(conditioned.summary.off_grid_rows, 1);
    assert_eq!(conditioned.series.values().len(), 4);
}

#[test]
fn test_strict_mode_share() {
    let raw = daily_rows(&[1, 2, 3, 5, 6, 9, 10, 11], |d| d as f64);
    let lenient = ConditionerConfig::default().conditioner().condition(&raw);
    assert!(lenient.is_ok());

    let strict = ConditionerConfig {
        min_mode_share: 1.0,
        ..ConditionerConfig::default()
    };
    // Every spacing is a whole number of days, so even strict inference holds
    assert!(strict.conditioner().condition(&raw).is_ok());
}

#[test]
fn test_inferrer_rejects_jittered_timestamps() {
    let raw: Vec<RawObservation> = ["00:00", "01:13", "01:50", "04:07", "04:30", "06:58"]
        .iter()
        .enumerate()
        .map(|(i, t)| RawObservation::present(format!("2024-01-01 {}", t), i as f64))
        .collect();
    let result = StandardConditioner::new().condition(&raw);
    assert!(matches!(result, Err(SeriesError::AmbiguousFrequency { .. })));
}

#[test]
fn test_inferrer_trait_object() {
    let inferrer: Box<dyn FrequencyInferrer> = Box::new(MedianSpacingInferrer::default());
    let result = inferrer.infer(&[]);
    assert!(result.is_err());
}

fn monthly_rows_on_day(year: i32, month: u32, day: u32, n: usize) -> Vec<RawObservation> {
    (0..n)
        .map(|i| {
            let months = month as usize - 1 + i;
            let y = year + (months / 12) as i32;
            let m = months % 12 + 1;
            // Clamp the fixed day in short months
            let last = match m {
                2 if y % 4 == 0 => 29,
                2 => 28,
                4 | 6 | 9 | 11 => 30,
                _ => 31,
            };
            let date = format!("{}-{:02}-{:02}", y, m, day.min(last));
            RawObservation::present(date, 100.0 + i as f64)
        })
        .collect()
}

#[test]
fn test_fixed_day_starting_on_month_end_keeps_every_row() {
    let cases = [
        (monthly_rows_on_day(2021, 2, 28, 36), 36),
        (monthly_rows_on_day(2021, 4, 30, 12), 12),
    ];
    for (raw, expected_len) in cases {
        for conditioner in [
            StandardConditioner::new(),
            StandardConditioner::new().with_frequency(Frequency::Months(1)),
        ] {
            let conditioned = conditioner.condition(&raw).unwrap();
            let summary = &conditioned.summary;
            assert_eq!(summary.frequency, Frequency::Months(1));
            assert_eq!(summary.anchor, MonthAnchor::DayOfMonth);
            assert_eq!(summary.off_grid_rows, 0);
            assert_eq!(summary.inserted_gaps, 0);
            assert_eq!(summary.interpolated, 0);

            let values = conditioned.series.complete_values().unwrap();
            assert_eq!(values.len(), expected_len);
            assert_eq!(values[expected_len - 1], 100.0 + (expected_len - 1) as f64);
        }
    }
}

#[test]
fn test_month_end_series_follows_month_ends() {
    let raw: Vec<RawObservation> = [
        "2021-02-28", "2021-03-31", "2021-04-30", "2021-05-31", "2021-06-30", "2021-07-31",
        "2021-08-31", "2021-09-30", "2021-10-31", "2021-11-30", "2021-12-31", "2022-01-31",
    ]
    .iter()
    .enumerate()
    .map(|(i, d)| RawObservation::present(*d, i as f64))
    .collect();

    let conditioned = StandardConditioner::new().condition(&raw).unwrap();
    assert_eq!(conditioned.summary.anchor, MonthAnchor::MonthEnd);
    assert_eq!(conditioned.summary.off_grid_rows, 0);
    assert_eq!(conditioned.summary.interpolated, 0);
    assert_eq!(conditioned.series.len(), 12);
}
