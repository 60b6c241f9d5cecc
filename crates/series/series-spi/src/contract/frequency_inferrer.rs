//! Trait for sampling frequency inference

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::model::Frequency;

/// Infers a sampling frequency from sorted, unique timestamps.
pub trait FrequencyInferrer: Send + Sync {
    /// Infer the frequency, or fail with `SeriesError::AmbiguousFrequency`.
    fn infer(&self, timestamps: &[NaiveDateTime]) -> Result<Frequency>;
}
