//! Method recommendation rules.
//!
//! A fixed decision table over the trend and seasonality verdicts, with the
//! stationarity verdict adding a preprocessing note.

use diagnostic_spi::{ForecastMethod, Recommendation, Recommender};

const DIFFERENCING_NOTE: &str = "The series is not stationary: apply differencing or a \
    variance-stabilising transform (e.g. log) before fitting models that assume stationarity.";

const NONLINEAR_NOTE: &str = "If residual structure remains complex or nonlinear, consider \
    sequence models such as LSTM/RNN networks or gradient-boosted models on lagged features.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trend {
    Present,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seasonality {
    Present,
    Absent,
}

impl From<bool> for Trend {
    fn from(present: bool) -> Self {
        if present {
            Trend::Present
        } else {
            Trend::Absent
        }
    }
}

impl From<bool> for Seasonality {
    fn from(present: bool) -> Self {
        if present {
            Seasonality::Present
        } else {
            Seasonality::Absent
        }
    }
}

/// The default decision-table recommender.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedRecommender;

impl RuleBasedRecommender {
    pub fn new() -> Self {
        Self
    }
}

impl Recommender for RuleBasedRecommender {
    fn recommend(&self, stationary: bool, has_trend: bool, has_seasonality: bool) -> Recommendation {
        recommend(stationary, has_trend, has_seasonality)
    }
}

/// Map the diagnostic verdicts to method families and notes.
pub fn recommend(stationary: bool, has_trend: bool, has_seasonality: bool) -> Recommendation {
    let (methods, rationale) = match (Trend::from(has_trend), Seasonality::from(has_seasonality)) {
        (Trend::Present, Seasonality::Absent) => (
            vec![
                ForecastMethod::DoubleExponentialSmoothing,
                ForecastMethod::ArimaWithTrend,
            ],
            "A trend without seasonality: methods that model level and slope fit best.",
        ),
        (Trend::Present, Seasonality::Present) => (
            vec![ForecastMethod::HoltWinters, ForecastMethod::Sarima],
            "Both trend and seasonality: use methods with explicit trend and seasonal terms.",
        ),
        (Trend::Absent, Seasonality::Present) => (
            vec![
                ForecastMethod::SeasonalDecomposition,
                ForecastMethod::Sarima,
            ],
            "Seasonality without trend: model the seasonal pattern around a stable level.",
        ),
        (Trend::Absent, Seasonality::Absent) => (
            vec![
                ForecastMethod::SimpleExponentialSmoothing,
                ForecastMethod::Arima,
            ],
            "No trend or seasonality: a level-only model is usually sufficient.",
        ),
    };

    let mut notes = Vec::with_capacity(3);
    if !stationary {
        notes.push(DIFFERENCING_NOTE.to_string());
    }
    notes.push(rationale.to_string());
    notes.push(NONLINEAR_NOTE.to_string());

    Recommendation {
        stationary,
        has_trend,
        has_seasonality,
        methods,
        notes,
    }
}
