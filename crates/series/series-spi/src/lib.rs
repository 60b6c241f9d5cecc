//! Series Conditioning Service Provider Interface
//!
//! Defines the observation, frequency and time series types shared by the
//! conditioning stage, plus the traits conditioners implement.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FrequencyInferrer, SeriesConditioner};
pub use error::{Result, SeriesError};
pub use model::{
    ConditionedSeries, ConditioningSummary, Frequency, MonthAnchor, Observation, RawObservation,
    TimeSeries,
};
