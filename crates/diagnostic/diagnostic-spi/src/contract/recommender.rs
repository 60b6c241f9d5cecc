//! Trait for method recommendation

use crate::model::Recommendation;

/// Maps diagnostic verdicts to forecasting method suggestions.
///
/// Implementations are total: every combination of flags yields a
/// recommendation.
pub trait Recommender: Send + Sync {
    fn recommend(&self, stationary: bool, has_trend: bool, has_seasonality: bool)
        -> Recommendation;
}
