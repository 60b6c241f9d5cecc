//! Diagnostic Service Provider Interface
//!
//! Defines the reports produced by the stationarity test, the seasonal
//! decomposition and the recommendation engine, plus the traits each
//! component implements.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Decomposer, Recommender, SeasonalityDetector, StationarityTester};
pub use error::{DiagnosticError, Result};
pub use model::{
    ComponentPresence, CriticalValues, DecompositionModel, DecompositionResult,
    DiagnosticReport, ForecastMethod, LagSelection, PeriodSource, Recommendation,
    StationarityReport,
};
