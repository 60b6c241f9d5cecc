//! End-to-end tests for the diagnostic stack
//!
//! Raw rows in, full report out, using only the facade API.

use diagnostic_facade::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn monthly_rows(values: &[f64]) -> Vec<RawObservation> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let year = 2019 + i / 12;
            let month = i % 12 + 1;
            RawObservation::present(format!("{}-{:02}-01", year, month), *v)
        })
        .collect()
}

fn trend_seasonal_example() -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(2024);
    let noise = Normal::new(0.0, 0.5).unwrap();
    (0..36)
        .map(|i| {
            let t = i as f64;
            let phase = 2.0 * std::f64::consts::PI * t / 12.0;
            100.0 + 2.0 * t + 10.0 * phase.sin() + noise.sample(&mut rng)
        })
        .collect()
}

#[test]
fn e2e_rows_on_the_28th_from_a_february_month_end() {
    let raw: Vec<RawObservation> = trend_seasonal_example()
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let year = 2021 + (i + 1) / 12;
            let month = (i + 1) % 12 + 1;
            RawObservation::present(format!("{}-{:02}-28", year, month), *v)
        })
        .collect();

    let report = diagnose(&raw, &DiagnosticConfig::default()).unwrap();
    assert_eq!(report.conditioning.frequency, Frequency::Months(1));
    assert_eq!(report.conditioning.off_grid_rows, 0);
    assert_eq!(report.conditioning.interpolated, 0);
    assert_eq!(report.series.len(), 36);
    assert_eq!(report.series.missing_count(), 0);
}

#[test]
fn e2e_monthly_trend_and_seasonality() {
    let config = DiagnosticConfigBuilder::new().period(12).build().unwrap();
    let report = diagnose(&monthly_rows(&trend_seasonal_example()), &config).unwrap();

    assert_eq!(report.conditioning.frequency, Frequency::Months(1));
    assert_eq!(report.period, 12);
    assert!(report.presence.has_trend);
    assert!(report.presence.has_seasonality);
    assert_eq!(
        report.recommendation.methods,
        vec![ForecastMethod::HoltWinters, ForecastMethod::Sarima]
    );
    assert!((0.0..=1.0).contains(&report.stationarity.p_value));

    for (r, v) in report
        .decomposition
        .reconstructed()
        .iter()
        .zip(report.series.values())
    {
        if let (Some(r), Some(v)) = (r, v) {
            assert!(((r - v) / v).abs() < 1e-9);
        }
    }
}

#[test]
fn e2e_period_from_frequency() {
    let report = diagnose(
        &monthly_rows(&trend_seasonal_example()),
        &DiagnosticConfig::default(),
    )
    .unwrap();
    assert_eq!(report.period, 12);
    assert_eq!(report.period_source, PeriodSource::Frequency);
    assert!(report.conditioning.frequency_inferred);
}

#[test]
fn e2e_flat_series_is_degenerate() {
    let result = diagnose(&monthly_rows(&[50.0; 50]), &DiagnosticConfig::default());
    assert!(matches!(result, Err(DiagnosticError::DegenerateSeries(_))));
}

#[test]
fn e2e_too_short_for_period() {
    let values = [3.1, 5.4, 2.2, 6.8, 4.0, 7.5, 3.3, 8.1, 5.0, 6.2];
    let config = DiagnosticConfigBuilder::new().period(12).build().unwrap();
    let result = diagnose(&monthly_rows(&values), &config);
    assert_eq!(
        result.unwrap_err(),
        DiagnosticError::InsufficientData {
            required: 24,
            actual: 10
        }
    );
}

#[test]
fn e2e_gappy_daily_input() {
    let mut rng = StdRng::seed_from_u64(77);
    let noise = Normal::new(0.0, 1.0).unwrap();
    let mut rows: Vec<RawObservation> = (0..120)
        .map(|i| {
            let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                + chrono::Duration::days(i);
            let weekly = [0.0, 1.0, 2.0, 3.0, 2.0, 1.0, -4.0][(i % 7) as usize];
            RawObservation::present(day.to_string(), 10.0 + weekly + noise.sample(&mut rng))
        })
        .collect();
    rows.remove(40);
    rows.remove(80);
    rows.push(RawObservation::present("bad timestamp", 1.0));

    let report = diagnose(&rows, &DiagnosticConfig::default()).unwrap();
    assert_eq!(report.conditioning.frequency, Frequency::Days(1));
    assert_eq!(report.conditioning.unparsed_rows, 1);
    assert_eq!(report.conditioning.inserted_gaps, 2);
    assert_eq!(report.conditioning.interpolated, 2);
    assert_eq!(report.period, 7);
    assert!(report.stationarity.is_stationary);
    assert!(report.presence.has_seasonality);
    assert!(report.recommendation.notes.last().unwrap().contains("LSTM"));
}

#[test]
fn e2e_report_serializes_to_json() {
    let config = DiagnosticConfigBuilder::new().period(12).build().unwrap();
    let report = diagnose(&monthly_rows(&trend_seasonal_example()), &config).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["period"], 12);
    assert_eq!(json["period_source"], "explicit");
    assert_eq!(json["conditioning"]["frequency"], "M");
    assert_eq!(
        json["recommendation"]["methods"][0],
        "Holt-Winters Exponential Smoothing"
    );
    assert!(json["decomposition"]["trend"][0].is_null());
    assert!(json["stationarity"]["critical_values"]["5%"].is_number());
}

#[test]
fn e2e_batch_runs_in_order() {
    let pipeline = DiagnosticConfig::default().pipeline().unwrap();
    let batch = vec![
        monthly_rows(&trend_seasonal_example()),
        Vec::new(),
        monthly_rows(&[50.0; 30]),
    ];
    let results = pipeline.run_batch(&batch);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(DiagnosticError::Series(SeriesError::EmptyInput))
    ));
    assert!(matches!(
        results[2],
        Err(DiagnosticError::DegenerateSeries(_))
    ));
}
