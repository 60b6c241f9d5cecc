//! Series Core
//!
//! Implementations for turning raw (timestamp, value) rows into a regular
//! series: timestamp parsing, frequency inference, resampling onto a grid and
//! time-weighted interpolation.

pub mod conditioner;
pub mod inference;
pub mod interpolate;
pub mod parse;
pub mod resample;

// Re-export SPI types for implementations
pub use series_spi::{
    ConditionedSeries, ConditioningSummary, Frequency, FrequencyInferrer, MonthAnchor,
    Observation, RawObservation, Result, SeriesConditioner, SeriesError, TimeSeries,
};

// Re-export main types
pub use conditioner::StandardConditioner;
pub use inference::MedianSpacingInferrer;
