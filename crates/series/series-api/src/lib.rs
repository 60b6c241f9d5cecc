//! Series Consumer API
//!
//! Configuration and builder APIs for series conditioning.
//!
//! This crate provides:
//! - `ConditionerConfig` and its builder
//! - Re-exports from SPI and core for convenience

pub mod config;

pub use config::{ConditionerConfig, ConditionerConfigBuilder};

// Re-export from core
pub use series_core::{
    inference, interpolate, parse, resample, MedianSpacingInferrer, StandardConditioner,
};

// Re-export from SPI
pub use series_spi::{
    ConditionedSeries, ConditioningSummary, Frequency, FrequencyInferrer, MonthAnchor,
    Observation, RawObservation, Result, SeriesConditioner, SeriesError, TimeSeries,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ConditionerConfig, ConditionerConfigBuilder};
    pub use series_core::{MedianSpacingInferrer, StandardConditioner};
    pub use series_spi::{
        ConditionedSeries, ConditioningSummary, Frequency, FrequencyInferrer, MonthAnchor,
        Observation, RawObservation, Result, SeriesConditioner, SeriesError, TimeSeries,
    };
}
