//! Seasonal period detection
//!
//! Picks the strongest local peak of the autocorrelation function.

use diagnostic_spi::SeasonalityDetector;

/// Default minimum autocorrelation for a peak to count
pub const DEFAULT_ACF_THRESHOLD: f64 = 0.3;

/// Finds the seasonal period from the autocorrelation function of the
/// complete span.
#[derive(Debug, Clone)]
pub struct AutocorrelationDetector {
    threshold: f64,
}

impl AutocorrelationDetector {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_ACF_THRESHOLD)
    }

    /// Detector whose peaks must exceed `threshold`.
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for AutocorrelationDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SeasonalityDetector for AutocorrelationDetector {
    fn detect(&self, values: &[f64], max_period: usize) -> Option<usize> {
        detect_period(values, max_period, self.threshold)
    }
}

/// Detect a seasonal period as the highest ACF local peak above `threshold`.
///
/// Candidate lags run from 2 to `max_period`; the data must cover at least two
/// full cycles of `max_period`. A monotonically decaying ACF (pure trend) has no
/// interior peak and yields `None`. Equal peaks resolve to the shorter lag.
pub fn detect_period(values: &[f64], max_period: usize, threshold: f64) -> Option<usize> {
    if max_period < 2 || values.len() < max_period * 2 {
        return None;
    }

    let acf = autocorrelation(values, max_period + 1);
    find_seasonal_peaks(&acf, threshold)
        .into_iter()
        .max_by(|&a, &b| acf[a].total_cmp(&acf[b]).then(b.cmp(&a)))
}

/// Sample autocorrelation at lags `0..=max_lag` (capped at `len - 1`).
///
/// Normalised by the lag-0 sum of squares, so `acf[0] == 1`. A constant
/// series has no defined autocorrelation and is reported as all ones.
pub fn autocorrelation(values: &[f64], max_lag: usize) -> Vec<f64> {
    let Some(last_lag) = values.len().checked_sub(1).map(|n| max_lag.min(n)) else {
        return Vec::new();
    };
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let centered: Vec<f64> = values.iter().map(|v| v - mean).collect();
    let denom: f64 = centered.iter().map(|c| c * c).sum();

    if denom == 0.0 {
        return vec![1.0; last_lag + 1];
    }

    (0..=last_lag)
        .map(|lag| {
            let cov: f64 = centered[lag..]
                .iter()
                .zip(&centered)
                .map(|(later, earlier)| later * earlier)
                .sum();
            cov / denom
        })
        .collect()
}

/// Lags (from 2) where the ACF is a strict local maximum above `threshold`
pub fn find_seasonal_peaks(acf: &[f64], threshold: f64) -> Vec<usize> {
    acf.windows(3)
        .enumerate()
        .skip(1)
        .filter(|(_, w)| w[1] > threshold && w[1] > w[0] && w[1] > w[2])
        .map(|(i, _)| i + 1)
        .collect()
}
