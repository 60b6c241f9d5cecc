//! Trend and seasonality presence tests.

use diagnostic_spi::{ComponentPresence, DecompositionResult};

/// Default tolerance: any variation at all counts as presence.
pub const DEFAULT_PRESENCE_TOLERANCE: f64 = 0.0;

/// Decide whether the trend and seasonal components carry any variation.
///
/// A component is present when the population standard deviation of its
/// defined values is strictly greater than `tolerance`.
pub fn assess_presence(decomposition: &DecompositionResult, tolerance: f64) -> ComponentPresence {
    let trend_std = population_std(&decomposition.trend_values());
    let seasonal_std = population_std(&decomposition.seasonal_values());
    ComponentPresence {
        has_trend: trend_std > tolerance,
        has_seasonality: seasonal_std > tolerance,
        trend_std,
        seasonal_std,
    }
}

/// Population standard deviation, 0 for an empty slice.
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
}
