//! Trait for time series decomposition

use crate::error::Result;
use crate::model::DecompositionResult;

/// Trait for time series decomposition
pub trait Decomposer: Send + Sync {
    /// Decompose a series into trend, seasonal, and residual components
    ///
    /// Leading and trailing missing values are allowed; interior ones are not.
    fn decompose(&self, values: &[Option<f64>], period: usize) -> Result<DecompositionResult>;
}
