//! Augmented Dickey-Fuller stationarity test.
//!
//! Regresses the first difference on the lagged level, a constant and `k`
//! lagged differences:
//!
//! ```text
//! Δy_t = α + γ·y_{t-1} + Σ δ_i·Δy_{t-i} + ε_t
//! ```
//!
//! The null hypothesis is a unit root (γ = 0); the statistic is the t-ratio
//! of γ̂, compared against the Dickey-Fuller distribution.

use diagnostic_spi::{
    DiagnosticError, LagSelection, Result, StationarityReport, StationarityTester,
};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::mackinnon;
use crate::regression::{ols, OlsFit};

/// Shortest series the test accepts.
pub const MIN_SERIES_LENGTH: usize = 10;
/// Fewest regression rows the test accepts.
pub const MIN_EFFECTIVE_OBS: usize = 8;
/// Default significance level for the stationarity verdict.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Augmented Dickey-Fuller test with a constant and no trend term.
#[derive(Debug, Clone)]
pub struct AdfTester {
    lag_selection: LagSelection,
    significance: f64,
}

impl AdfTester {
    pub fn new() -> Self {
        Self {
            lag_selection: LagSelection::Aic,
            significance: DEFAULT_SIGNIFICANCE,
        }
    }

    pub fn with_lag_selection(mut self, lag_selection: LagSelection) -> Self {
        self.lag_selection = lag_selection;
        self
    }

    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    pub fn lag_selection(&self) -> LagSelection {
        self.lag_selection
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    fn select_and_fit(&self, values: &[f64], diffs: &[f64]) -> Result<(usize, OlsFit)> {
        let n = values.len();
        match self.lag_selection {
            LagSelection::Fixed(lag) => {
                let rows = diffs.len().saturating_sub(lag);
                if rows < MIN_EFFECTIVE_OBS {
                    return Err(DiagnosticError::InsufficientData {
                        required: lag + 1 + MIN_EFFECTIVE_OBS,
                        actual: n,
                    });
                }
                Ok((lag, fit_adf(values, diffs, lag, lag)?))
            }
            LagSelection::Aic | LagSelection::Bic => {
                let maxlag = max_lag(n);
                let mut best: Option<(usize, f64)> = None;
                let mut first_error = None;
                for lag in 0..=maxlag {
                    // A lag whose regression cannot be fitted scores +inf
                    let fit = match fit_adf(values, diffs, lag, maxlag) {
                        Ok(fit) => fit,
                        Err(e) => {
                            debug!(lag, error = %e, "ADF candidate lag skipped");
                            first_error.get_or_insert(e);
                            continue;
                        }
                    };
                    let criterion = match self.lag_selection {
                        LagSelection::Bic => fit.bic(),
                        _ => fit.aic(),
                    };
                    if best.map_or(true, |(_, c)| criterion < c) {
                        best = Some((lag, criterion));
                    }
                }
                let Some((lag, _)) = best else {
                    return Err(first_error.unwrap_or_else(|| {
                        DiagnosticError::DegenerateSeries("no candidate lag".to_string())
                    }));
                };
                debug!(maxlag, lag, "ADF lag selected");
                Ok((lag, fit_adf(values, diffs, lag, lag)?))
            }
        }
    }
}

impl Default for AdfTester {
    fn default() -> Self {
        Self::new()
    }
}

impl StationarityTester for AdfTester {
    fn test(&self, values: &[f64]) -> Result<StationarityReport> {
        adf_test(values, self)
    }

    fn name(&self) -> &str {
        "Augmented Dickey-Fuller"
    }
}

/// Run the test with the tester's settings.
pub fn adf_test(values: &[f64], tester: &AdfTester) -> Result<StationarityReport> {
    let significance = tester.significance;
    if !(significance > 0.0 && significance < 1.0) {
        return Err(DiagnosticError::invalid_parameter(
            "significance",
            format!("{} is not within (0, 1)", significance),
        ));
    }

    let n = values.len();
    if n < MIN_SERIES_LENGTH {
        return Err(DiagnosticError::InsufficientData {
            required: MIN_SERIES_LENGTH,
            actual: n,
        });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(DiagnosticError::DegenerateSeries(
            "series contains non-finite values".to_string(),
        ));
    }
    if is_constant(values) {
        return Err(DiagnosticError::DegenerateSeries(
            "series has zero variance".to_string(),
        ));
    }

    let diffs: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let (used_lag, fit) = tester.select_and_fit(values, &diffs)?;

    let statistic = fit.t_stat(0);
    if !statistic.is_finite() {
        return Err(DiagnosticError::DegenerateSeries(
            "test statistic is not finite".to_string(),
        ));
    }

    let p_value = mackinnon::p_value(statistic);
    let report = StationarityReport {
        statistic,
        p_value,
        is_stationary: p_value < significance,
        used_lag,
        n_obs: fit.nobs,
        critical_values: mackinnon::critical_values(fit.nobs),
        significance,
    };
    debug!(
        statistic,
        p_value,
        used_lag,
        n_obs = fit.nobs,
        stationary = report.is_stationary,
        "ADF test complete"
    );
    Ok(report)
}

/// Schwert's rule `ceil(12 (n/100)^(1/4))`, bounded so that every candidate
/// lag keeps enough regression rows.
pub fn max_lag(n: usize) -> usize {
    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize;
    let half = (n / 2).saturating_sub(2);
    let rows = n.saturating_sub(1 + MIN_EFFECTIVE_OBS);
    schwert.min(half).min(rows)
}

/// Fit the ADF regression with `lag` lagged differences on rows `start..`.
///
/// Row `t` indexes `diffs`: the response is `diffs[t]`, the lagged level is
/// `values[t]` and the lagged differences are `diffs[t-1] .. diffs[t-lag]`.
/// Column 0 holds the lagged level so its t-ratio is the test statistic. The
/// level is centred on its sample mean; with the constant in the regression
/// this leaves the statistic unchanged by a shift of the series.
fn fit_adf(values: &[f64], diffs: &[f64], lag: usize, start: usize) -> Result<OlsFit> {
    let rows = diffs.len().saturating_sub(start);
    let cols = 2 + lag;
    let level = &values[start..start + rows];
    let level_mean = level.iter().sum::<f64>() / rows.max(1) as f64;

    let design = DMatrix::from_fn(rows, cols, |r, c| {
        let t = start + r;
        match c {
            0 => level[r] - level_mean,
            1 => 1.0,
            _ => diffs[t - (c - 1)],
        }
    });
    let response = DVector::from_fn(rows, |r, _| diffs[start + r]);
    ols(&design, &response)
}

/// True when every value is identical.
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}
