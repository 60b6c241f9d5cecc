//! Diagnostic configuration types.

use diagnostic_core::pipeline::DEFAULT_MAX_OBSERVATIONS;
use diagnostic_core::presence::DEFAULT_PRESENCE_TOLERANCE;
use diagnostic_core::seasonality::DEFAULT_ACF_THRESHOLD;
use diagnostic_core::stationarity::DEFAULT_SIGNIFICANCE;
use diagnostic_core::{
    AdfTester, AutocorrelationDetector, DiagnosticPipeline, SeasonalDecomposer,
};
use diagnostic_spi::{
    DecompositionModel, DiagnosticError, DiagnosticReport, LagSelection, Result,
};
use serde::{Deserialize, Serialize};
use series_api::ConditionerConfig;
use series_spi::{Frequency, RawObservation};

/// Configuration for the stationarity test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationarityConfig {
    /// p-value below which the series counts as stationary
    pub significance: f64,
    /// How the number of lagged differences is chosen
    pub lag_selection: LagSelection,
}

impl Default for StationarityConfig {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            lag_selection: LagSelection::Aic,
        }
    }
}

/// Configuration for decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecompositionConfig {
    /// Seasonality period; derived from the frequency or the data when absent
    pub period: Option<usize>,
    /// Additive or multiplicative
    pub model: DecompositionModel,
    /// Minimum autocorrelation for a detected period
    pub acf_threshold: f64,
    /// Standard deviation a component must exceed to count as present
    pub presence_tolerance: f64,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            period: None,
            model: DecompositionModel::Additive,
            acf_threshold: DEFAULT_ACF_THRESHOLD,
            presence_tolerance: DEFAULT_PRESENCE_TOLERANCE,
        }
    }
}

/// Configuration for a complete diagnostic run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticConfig {
    pub conditioner: ConditionerConfig,
    pub stationarity: StationarityConfig,
    pub decomposition: DecompositionConfig,
    /// Upper bound on observations per run
    pub max_observations: usize,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            conditioner: ConditionerConfig::default(),
            stationarity: StationarityConfig::default(),
            decomposition: DecompositionConfig::default(),
            max_observations: DEFAULT_MAX_OBSERVATIONS,
        }
    }
}

impl DiagnosticConfig {
    /// Check every parameter range.
    pub fn validate(&self) -> Result<()> {
        let significance = self.stationarity.significance;
        if !(significance > 0.0 && significance < 1.0) {
            return Err(DiagnosticError::invalid_parameter(
                "significance",
                format!("{} is not within (0, 1)", significance),
            ));
        }
        if let Some(period) = self.decomposition.period {
            if period < 2 {
                return Err(DiagnosticError::InvalidPeriod(period));
            }
        }
        let share = self.conditioner.min_mode_share;
        if !(0.0..=1.0).contains(&share) {
            return Err(DiagnosticError::invalid_parameter(
                "min_mode_share",
                format!("{} is not within [0, 1]", share),
            ));
        }
        let tolerance = self.decomposition.presence_tolerance;
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(DiagnosticError::invalid_parameter(
                "presence_tolerance",
                "must be non-negative",
            ));
        }
        if self.max_observations == 0 {
            return Err(DiagnosticError::invalid_parameter(
                "max_observations",
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Build the pipeline described by this configuration.
    pub fn pipeline(&self) -> Result<DiagnosticPipeline> {
        self.validate()?;

        let tester = AdfTester::new()
            .with_lag_selection(self.stationarity.lag_selection)
            .with_significance(self.stationarity.significance);
        let pipeline = DiagnosticPipeline::new()
            .with_conditioner(Box::new(self.conditioner.conditioner()))
            .with_tester(Box::new(tester))
            .with_decomposer(Box::new(SeasonalDecomposer::with_model(
                self.decomposition.model,
            )))
            .with_detector(Box::new(AutocorrelationDetector::with_threshold(
                self.decomposition.acf_threshold,
            )))
            .with_presence_tolerance(self.decomposition.presence_tolerance)
            .with_max_observations(self.max_observations);

        Ok(match self.decomposition.period {
            Some(period) => pipeline.with_period(period),
            None => pipeline,
        })
    }
}

/// Builder for DiagnosticConfig.
#[derive(Debug, Default)]
pub struct DiagnosticConfigBuilder {
    config: DiagnosticConfig,
}

impl DiagnosticConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared frequency.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.config.conditioner.frequency = Some(frequency);
        self
    }

    /// Set the conditioner configuration.
    pub fn conditioner(mut self, conditioner: ConditionerConfig) -> Self {
        self.config.conditioner = conditioner;
        self
    }

    /// Set the seasonal period.
    pub fn period(mut self, period: usize) -> Self {
        self.config.decomposition.period = Some(period);
        self
    }

    /// Set the decomposition model.
    pub fn model(mut self, model: DecompositionModel) -> Self {
        self.config.decomposition.model = model;
        self
    }

    /// Set the stationarity significance level.
    pub fn significance(mut self, significance: f64) -> Self {
        self.config.stationarity.significance = significance;
        self
    }

    /// Set the lag selection rule.
    pub fn lag_selection(mut self, lag_selection: LagSelection) -> Self {
        self.config.stationarity.lag_selection = lag_selection;
        self
    }

    /// Set the presence tolerance.
    pub fn presence_tolerance(mut self, tolerance: f64) -> Self {
        self.config.decomposition.presence_tolerance = tolerance;
        self
    }

    /// Set the input size limit.
    pub fn max_observations(mut self, limit: usize) -> Self {
        self.config.max_observations = limit;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<DiagnosticConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Diagnose one raw series with the given configuration.
pub fn diagnose(raw: &[RawObservation], config: &DiagnosticConfig) -> Result<DiagnosticReport> {
    config.pipeline()?.run(raw)
}
