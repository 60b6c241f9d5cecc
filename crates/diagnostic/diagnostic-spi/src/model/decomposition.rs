//! Decomposition result model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiagnosticError;

/// How trend, seasonal and residual combine into the observed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecompositionModel {
    /// value = trend + seasonal + residual
    #[default]
    Additive,
    /// value = trend * seasonal * residual
    Multiplicative,
}

impl DecompositionModel {
    /// Combine components back into a value.
    pub fn combine(&self, trend: f64, seasonal: f64, residual: f64) -> f64 {
        match self {
            DecompositionModel::Additive => trend + seasonal + residual,
            DecompositionModel::Multiplicative => trend * seasonal * residual,
        }
    }

    /// Neutral value of the seasonal component (0 or 1).
    pub fn neutral(&self) -> f64 {
        match self {
            DecompositionModel::Additive => 0.0,
            DecompositionModel::Multiplicative => 1.0,
        }
    }
}

impl FromStr for DecompositionModel {
    type Err = DiagnosticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" | "add" => Ok(DecompositionModel::Additive),
            "multiplicative" | "mul" => Ok(DecompositionModel::Multiplicative),
            other => Err(DiagnosticError::invalid_parameter(
                "model",
                format!("unknown decomposition model '{}'", other),
            )),
        }
    }
}

impl fmt::Display for DecompositionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompositionModel::Additive => write!(f, "additive"),
            DecompositionModel::Multiplicative => write!(f, "multiplicative"),
        }
    }
}

/// Result of time series decomposition
///
/// Components are index-aligned with the input. Trend and residual are `None`
/// where the centered moving average is undefined and outside the span of
/// present values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    pub model: DecompositionModel,
    pub period: usize,
    /// Trend component
    pub trend: Vec<Option<f64>>,
    /// Seasonal component
    pub seasonal: Vec<Option<f64>>,
    /// Residual component
    pub residual: Vec<Option<f64>>,
    /// One cycle of the seasonal component, indexed by position mod period
    pub seasonal_pattern: Vec<f64>,
}

impl DecompositionResult {
    /// Number of aligned points.
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// Recombined value at each index where all components are defined.
    pub fn reconstructed(&self) -> Vec<Option<f64>> {
        self.trend
            .iter()
            .zip(&self.seasonal)
            .zip(&self.residual)
            .map(|((t, s), r)| Some(self.model.combine((*t)?, (*s)?, (*r)?)))
            .collect()
    }

    /// Defined trend values.
    pub fn trend_values(&self) -> Vec<f64> {
        self.trend.iter().flatten().copied().collect()
    }

    /// Defined seasonal values.
    pub fn seasonal_values(&self) -> Vec<f64> {
        self.seasonal.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_parse() {
        assert_eq!(
            "Additive".parse::<DecompositionModel>().unwrap(),
            DecompositionModel::Additive
        );
        assert_eq!(
            "mul".parse::<DecompositionModel>().unwrap(),
            DecompositionModel::Multiplicative
        );
        assert!("linear".parse::<DecompositionModel>().is_err());
    }

    #[test]
    fn test_reconstructed_skips_undefined() {
        let result = DecompositionResult {
            model: DecompositionModel::Additive,
            period: 2,
            trend: vec![None, Some(2.0), None],
            seasonal: vec![Some(1.0), Some(-1.0), Some(1.0)],
            residual: vec![None, Some(0.5), None],
            seasonal_pattern: vec![1.0, -1.0],
        };
        assert_eq!(result.reconstructed(), vec![None, Some(1.5), None]);
        assert_eq!(result.trend_values(), vec![2.0]);
        assert_eq!(result.seasonal_values().len(), 3);
    }
}
