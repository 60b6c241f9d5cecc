//! Diagnostic Facade
//!
//! High-level API for time series diagnostics. Re-exports all public types
//! from the diagnostic and series stacks for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use diagnostic_api::*;

// Explicit re-exports for documentation
pub use diagnostic_api::prelude;

// Re-export core modules for direct access
pub use diagnostic_core::{
    decomposition, mackinnon, pipeline, presence, recommendation, regression, seasonality,
    stationarity,
};

// Series types needed to feed the pipeline
pub use series_facade::{
    ConditionedSeries, ConditionerConfig, ConditionerConfigBuilder, ConditioningSummary,
    Frequency, MonthAnchor, Observation, RawObservation, SeriesConditioner, SeriesError,
    StandardConditioner, TimeSeries,
};
