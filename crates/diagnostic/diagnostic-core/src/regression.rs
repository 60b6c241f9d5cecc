//! Ordinary least squares via a singular value decomposition.

use diagnostic_spi::{DiagnosticError, Result};
use nalgebra::{DMatrix, DVector};

/// Fitted linear regression.
#[derive(Debug, Clone)]
pub struct OlsFit {
    pub coefficients: Vec<f64>,
    pub std_errors: Vec<f64>,
    /// Sum of squared residuals
    pub ssr: f64,
    pub nobs: usize,
}

impl OlsFit {
    /// Number of estimated parameters.
    pub fn n_params(&self) -> usize {
        self.coefficients.len()
    }

    /// t-statistic of coefficient `i`.
    pub fn t_stat(&self, i: usize) -> f64 {
        self.coefficients[i] / self.std_errors[i]
    }

    /// Gaussian log-likelihood at the fitted coefficients.
    pub fn log_likelihood(&self) -> f64 {
        let n = self.nobs as f64;
        -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + (self.ssr / n).ln() + 1.0)
    }

    pub fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood() + 2.0 * self.n_params() as f64
    }

    pub fn bic(&self) -> f64 {
        -2.0 * self.log_likelihood() + (self.nobs as f64).ln() * self.n_params() as f64
    }
}

/// Smallest singular value of the column-normalised design, relative to the
/// largest, for the regression to count as full rank.
pub const RANK_TOLERANCE: f64 = 1e-10;

/// Residual sum of squares, relative to the centred response sum of squares,
/// at or below which the regression fits exactly.
pub const EXACT_FIT_TOLERANCE: f64 = 1e-12;

/// Fit `response = design * beta + e`.
///
/// Columns are scaled to unit norm before the decomposition so the rank test
/// does not depend on the magnitude of the data. Fails with
/// `InsufficientData` when there are no residual degrees of freedom and
/// `DegenerateSeries` when the design is rank deficient or the fit is exact.
pub fn ols(design: &DMatrix<f64>, response: &DVector<f64>) -> Result<OlsFit> {
    let (nobs, k) = design.shape();
    if nobs <= k {
        return Err(DiagnosticError::InsufficientData {
            required: k + 1,
            actual: nobs,
        });
    }

    let norms: Vec<f64> = design.column_iter().map(|c| c.norm()).collect();
    if norms.iter().any(|n| !(n.is_finite() && *n > 0.0)) {
        return Err(degenerate("regression column is zero or not finite"));
    }
    let mut scaled = design.clone();
    for (mut column, norm) in scaled.column_iter_mut().zip(&norms) {
        column /= *norm;
    }

    let svd = scaled.svd(true, true);
    let largest = svd.singular_values.max();
    let smallest = svd.singular_values.min();
    if !(smallest > largest * RANK_TOLERANCE) {
        return Err(degenerate("singular regression matrix"));
    }
    let scaled_beta = svd.solve(response, 0.0).map_err(degenerate)?;
    let beta = DVector::from_fn(k, |i, _| scaled_beta[i] / norms[i]);
    let v_t = svd
        .v_t
        .as_ref()
        .ok_or_else(|| degenerate("decomposition has no right singular vectors"))?;
    let inv_sq: Vec<f64> = svd.singular_values.iter().map(|s| 1.0 / (s * s)).collect();

    let residuals = response - design * &beta;
    let ssr = residuals.dot(&residuals);
    let mean = response.mean();
    let tss: f64 = response.iter().map(|r| (r - mean).powi(2)).sum();
    if ssr <= EXACT_FIT_TOLERANCE * tss {
        return Err(degenerate("regression fits the response exactly"));
    }
    let sigma2 = ssr / (nobs - k) as f64;

    // diag((XᵀX)⁻¹) = diag(V Σ⁻² Vᵀ) / norm², column by column
    let std_errors: Vec<f64> = (0..k)
        .map(|i| {
            let var: f64 = (0..k).map(|j| v_t[(j, i)].powi(2) * inv_sq[j]).sum();
            (sigma2 * var).sqrt() / norms[i]
        })
        .collect();
    if std_errors.iter().any(|se| !(se.is_finite() && *se > 0.0)) {
        return Err(degenerate("ill-conditioned regression matrix"));
    }

    Ok(OlsFit {
        coefficients: beta.iter().copied().collect(),
        std_errors,
        ssr,
        nobs,
    })
}

fn degenerate(reason: &str) -> DiagnosticError {
    DiagnosticError::DegenerateSeries(reason.to_string())
}
