//! Diagnostic Core
//!
//! Implementations of the diagnostic components: the Augmented Dickey-Fuller
//! stationarity test, classical seasonal decomposition, autocorrelation
//! period detection, component presence tests and the method recommendation
//! rules, plus the pipeline that runs them over a conditioned series.

pub mod decomposition;
pub mod mackinnon;
pub mod pipeline;
pub mod presence;
pub mod recommendation;
pub mod regression;
pub mod seasonality;
pub mod stationarity;

// Re-export SPI types for implementations
pub use diagnostic_spi::{
    ComponentPresence, CriticalValues, DecompositionModel, DecompositionResult, Decomposer,
    DiagnosticError, DiagnosticReport, ForecastMethod, LagSelection, PeriodSource,
    Recommendation, Recommender, Result, SeasonalityDetector, StationarityReport,
    StationarityTester,
};

// Re-export main types
pub use decomposition::SeasonalDecomposer;
pub use pipeline::DiagnosticPipeline;
pub use recommendation::RuleBasedRecommender;
pub use seasonality::AutocorrelationDetector;
pub use stationarity::AdfTester;
