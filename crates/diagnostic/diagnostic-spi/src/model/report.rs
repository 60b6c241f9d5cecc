//! Full diagnostic report

use serde::Serialize;
use series_spi::{ConditioningSummary, TimeSeries};

use super::{ComponentPresence, DecompositionResult, Recommendation, StationarityReport};

/// Where the seasonal period came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodSource {
    /// Set in the configuration
    Explicit,
    /// Conventional cycle of the sampling frequency
    Frequency,
    /// Autocorrelation peak
    Autocorrelation,
}

/// Everything one diagnostic run produced.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub series: TimeSeries,
    pub conditioning: ConditioningSummary,
    pub period: usize,
    pub period_source: PeriodSource,
    pub stationarity: StationarityReport,
    pub decomposition: DecompositionResult,
    pub presence: ComponentPresence,
    pub recommendation: Recommendation,
}
