//! Recommendation model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Forecasting method families the engine can suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ForecastMethod {
    SimpleExponentialSmoothing,
    DoubleExponentialSmoothing,
    HoltWinters,
    Arima,
    ArimaWithTrend,
    Sarima,
    SeasonalDecomposition,
}

impl ForecastMethod {
    pub const ALL: [ForecastMethod; 7] = [
        ForecastMethod::SimpleExponentialSmoothing,
        ForecastMethod::DoubleExponentialSmoothing,
        ForecastMethod::HoltWinters,
        ForecastMethod::Arima,
        ForecastMethod::ArimaWithTrend,
        ForecastMethod::Sarima,
        ForecastMethod::SeasonalDecomposition,
    ];

    /// Human-readable method name.
    pub fn name(&self) -> &'static str {
        match self {
            ForecastMethod::SimpleExponentialSmoothing => "Simple Exponential Smoothing",
            ForecastMethod::DoubleExponentialSmoothing => "Double Exponential Smoothing",
            ForecastMethod::HoltWinters => "Holt-Winters Exponential Smoothing",
            ForecastMethod::Arima => "ARIMA",
            ForecastMethod::ArimaWithTrend => "ARIMA with trend",
            ForecastMethod::Sarima => "SARIMA",
            ForecastMethod::SeasonalDecomposition => "Seasonal Decomposition-based forecasting",
        }
    }
}

impl fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ForecastMethod> for String {
    fn from(method: ForecastMethod) -> Self {
        method.name().to_string()
    }
}

impl TryFrom<String> for ForecastMethod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ForecastMethod::ALL
            .into_iter()
            .find(|m| m.name() == value)
            .ok_or_else(|| format!("unknown forecast method '{}'", value))
    }
}

/// Ordered method suggestions with the reasoning behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub stationary: bool,
    pub has_trend: bool,
    pub has_seasonality: bool,
    /// Suggested method families, most suitable first
    pub methods: Vec<ForecastMethod>,
    /// Free-text rationale, in reading order
    pub notes: Vec<String>,
}

impl Recommendation {
    /// Method names in order.
    pub fn method_names(&self) -> Vec<&'static str> {
        self.methods.iter().map(|m| m.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serializes_as_name() {
        let json = serde_json::to_string(&ForecastMethod::HoltWinters).unwrap();
        assert_eq!(json, "\"Holt-Winters Exponential Smoothing\"");
        let back: ForecastMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ForecastMethod::HoltWinters);
    }

    #[test]
    fn test_method_names_are_unique() {
        let mut names: Vec<_> = ForecastMethod::ALL.iter().map(|m| m.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ForecastMethod::ALL.len());
    }
}
