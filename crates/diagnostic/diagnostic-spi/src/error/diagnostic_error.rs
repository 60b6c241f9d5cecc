//! Diagnostic error types

use series_spi::SeriesError;
use thiserror::Error;

/// Errors that can occur while diagnosing a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticError {
    /// Conditioning the raw rows failed
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Too few points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Constant input, singular regression or a non-finite statistic
    #[error("Degenerate series: {0}")]
    DegenerateSeries(String),

    /// Seasonal period below 2
    #[error("Invalid period: {0} (must be at least 2)")]
    InvalidPeriod(usize),

    /// No explicit, frequency-derived or detected period
    #[error("Could not determine a seasonal period; set one explicitly")]
    UndeterminedPeriod,

    /// Missing value inside the span being decomposed
    #[error("Missing value at index {index} inside the series")]
    MissingValues { index: usize },

    /// Multiplicative decomposition needs strictly positive values
    #[error("Multiplicative decomposition requires strictly positive values")]
    NonPositiveValues,

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Input exceeds the configured size limit
    #[error("Input too large: {actual} observations exceeds limit of {limit}")]
    InputTooLarge { limit: usize, actual: usize },
}

impl DiagnosticError {
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        DiagnosticError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
