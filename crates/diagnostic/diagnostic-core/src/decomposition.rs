//! Classical seasonal decomposition.
//!
//! Provides additive and multiplicative decomposition over the span of
//! present values, using a centered moving average for the trend.

use diagnostic_spi::{
    DecompositionModel, DecompositionResult, Decomposer, DiagnosticError, Result,
};
use tracing::debug;

/// Moving-average decomposition in either model.
#[derive(Debug, Clone, Default)]
pub struct SeasonalDecomposer {
    model: DecompositionModel,
}

impl SeasonalDecomposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn additive() -> Self {
        Self {
            model: DecompositionModel::Additive,
        }
    }

    pub fn multiplicative() -> Self {
        Self {
            model: DecompositionModel::Multiplicative,
        }
    }

    pub fn with_model(model: DecompositionModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> DecompositionModel {
        self.model
    }
}

impl Decomposer for SeasonalDecomposer {
    fn decompose(&self, values: &[Option<f64>], period: usize) -> Result<DecompositionResult> {
        decompose(values, period, self.model)
    }
}

/// Perform additive decomposition
pub fn decompose_additive(values: &[Option<f64>], period: usize) -> Result<DecompositionResult> {
    decompose(values, period, DecompositionModel::Additive)
}

/// Perform multiplicative decomposition
pub fn decompose_multiplicative(
    values: &[Option<f64>],
    period: usize,
) -> Result<DecompositionResult> {
    decompose(values, period, DecompositionModel::Multiplicative)
}

/// Decompose `values` with the given model.
///
/// Runs on the span from the first to the last present value; components
/// are `None` outside it.
pub fn decompose(
    values: &[Option<f64>],
    period: usize,
    model: DecompositionModel,
) -> Result<DecompositionResult> {
    if period < 2 {
        return Err(DiagnosticError::InvalidPeriod(period));
    }
    let required = period.saturating_mul(2);

    let first = values.iter().position(Option::is_some);
    let last = values.iter().rposition(Option::is_some);
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(DiagnosticError::InsufficientData {
                required,
                actual: 0,
            })
        }
    };

    let span: Vec<f64> = values[first..=last]
        .iter()
        .enumerate()
        .map(|(i, v)| v.ok_or(DiagnosticError::MissingValues { index: first + i }))
        .collect::<Result<_>>()?;
    if span.len() < required {
        return Err(DiagnosticError::InsufficientData {
            required,
            actual: span.len(),
        });
    }
    if model == DecompositionModel::Multiplicative && span.iter().any(|&v| v <= 0.0) {
        return Err(DiagnosticError::NonPositiveValues);
    }

    let span_trend = centered_moving_average(&span, period);

    // Seasonal means by position in cycle, counted from the start of the input
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, (v, t)) in span.iter().zip(&span_trend).enumerate() {
        if let Some(t) = t {
            let detrended = match model {
                DecompositionModel::Additive => v - t,
                DecompositionModel::Multiplicative => v / t,
            };
            let pos = (first + i) % period;
            sums[pos] += detrended;
            counts[pos] += 1;
        }
    }
    let raw_pattern: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(s, &c)| if c > 0 { s / c as f64 } else { model.neutral() })
        .collect();
    let pattern_mean = raw_pattern.iter().sum::<f64>() / period as f64;
    let seasonal_pattern: Vec<f64> = match model {
        DecompositionModel::Additive => raw_pattern.iter().map(|s| s - pattern_mean).collect(),
        DecompositionModel::Multiplicative => {
            raw_pattern.iter().map(|s| s / pattern_mean).collect()
        }
    };

    let n = values.len();
    let mut trend = vec![None; n];
    let mut seasonal = vec![None; n];
    let mut residual = vec![None; n];
    for (i, v) in span.iter().enumerate() {
        let index = first + i;
        let s = seasonal_pattern[index % period];
        seasonal[index] = Some(s);
        if let Some(t) = span_trend[i] {
            trend[index] = Some(t);
            residual[index] = Some(match model {
                DecompositionModel::Additive => v - t - s,
                DecompositionModel::Multiplicative => v / (t * s),
            });
        }
    }

    debug!(%model, period, span = span.len(), "decomposition complete");

    Ok(DecompositionResult {
        model,
        period,
        trend,
        seasonal,
        residual,
        seasonal_pattern,
    })
}

/// Centered moving average of window `period`.
///
/// Odd periods use a simple window of `period` points. Even periods use the
/// 2x`period` average: `period + 1` points with half weight at both ends.
/// The first and last `period / 2` positions are `None`.
pub fn centered_moving_average(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = data.len();
    let half = period / 2;
    let mut trend = vec![None; n];
    if period == 0 || n < 2 * half + 1 {
        return trend;
    }

    for i in half..(n - half) {
        let window = &data[i - half..=i + half];
        let sum: f64 = if period % 2 == 1 {
            window.iter().sum()
        } else {
            let inner: f64 = window[1..period].iter().sum();
            inner + 0.5 * (window[0] + window[period])
        };
        trend[i] = Some(sum / period as f64);
    }
    trend
}
