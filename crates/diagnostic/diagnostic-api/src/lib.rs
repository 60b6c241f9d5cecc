//! Diagnostic Consumer API
//!
//! Consumer configurations and builder APIs for diagnostic runs.
//!
//! This crate provides:
//! - Configuration types for the stationarity test and decomposition
//! - `DiagnosticConfig` tying them to the series conditioner
//! - Re-exports from SPI and core for convenience

pub mod config;

pub use config::{
    diagnose, DecompositionConfig, DiagnosticConfig, DiagnosticConfigBuilder, StationarityConfig,
};

// Re-export from core
pub use diagnostic_core::{
    decomposition, mackinnon, pipeline, presence, recommendation, regression, seasonality,
    stationarity, AdfTester, AutocorrelationDetector, DiagnosticPipeline, RuleBasedRecommender,
    SeasonalDecomposer,
};

// Re-export traits and models from SPI
pub use diagnostic_spi::{
    ComponentPresence, CriticalValues, DecompositionModel, DecompositionResult, Decomposer,
    DiagnosticError, DiagnosticReport, ForecastMethod, LagSelection, PeriodSource,
    Recommendation, Recommender, Result, SeasonalityDetector, StationarityReport,
    StationarityTester,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        diagnose, DecompositionConfig, DiagnosticConfig, DiagnosticConfigBuilder,
        StationarityConfig,
    };
    pub use diagnostic_core::{
        AdfTester, AutocorrelationDetector, DiagnosticPipeline, RuleBasedRecommender,
        SeasonalDecomposer,
    };
    pub use diagnostic_spi::{
        ComponentPresence, DecompositionModel, DecompositionResult, Decomposer,
        DiagnosticError, DiagnosticReport, ForecastMethod, LagSelection, PeriodSource,
        Recommendation, Recommender, Result, SeasonalityDetector, StationarityReport,
        StationarityTester,
    };
    pub use series_api::prelude::*;
}
