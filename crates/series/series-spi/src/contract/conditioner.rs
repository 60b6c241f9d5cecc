//! Trait for series conditioning

use crate::error::Result;
use crate::model::{ConditionedSeries, RawObservation};

/// Turns raw (timestamp, value) rows into a uniformly spaced series.
pub trait SeriesConditioner: Send + Sync {
    /// Condition raw rows into a regular series.
    fn condition(&self, raw: &[RawObservation]) -> Result<ConditionedSeries>;

    /// Name of this conditioner
    fn name(&self) -> &str;
}
