//! Diagnostic pipeline - conditions a raw series, runs the stationarity test
//! and the decomposition concurrently, then derives a recommendation.

use diagnostic_spi::{
    Decomposer, DiagnosticError, DiagnosticReport, PeriodSource, Recommender, Result,
    SeasonalityDetector, StationarityTester,
};
use rayon::prelude::*;
use series_core::StandardConditioner;
use series_spi::{RawObservation, SeriesConditioner, TimeSeries};
use tracing::{debug, info};

use crate::decomposition::SeasonalDecomposer;
use crate::presence::{assess_presence, DEFAULT_PRESENCE_TOLERANCE};
use crate::recommendation::RuleBasedRecommender;
use crate::seasonality::AutocorrelationDetector;
use crate::stationarity::AdfTester;

/// Default upper bound on observations per run.
pub const DEFAULT_MAX_OBSERVATIONS: usize = 1_000_000;

/// Runs the full diagnosis of one series.
///
/// # Example
///
/// ```rust,ignore
/// use diagnostic_core::DiagnosticPipeline;
///
/// let report = DiagnosticPipeline::new().with_period(12).run(&rows)?;
/// println!("{:?}", report.recommendation.methods);
/// ```
pub struct DiagnosticPipeline {
    conditioner: Box<dyn SeriesConditioner>,
    tester: Box<dyn StationarityTester>,
    decomposer: Box<dyn Decomposer>,
    detector: Box<dyn SeasonalityDetector>,
    recommender: Box<dyn Recommender>,
    period: Option<usize>,
    presence_tolerance: f64,
    max_observations: usize,
}

impl DiagnosticPipeline {
    /// Pipeline with the standard components and defaults.
    pub fn new() -> Self {
        Self {
            conditioner: Box::new(StandardConditioner::new()),
            tester: Box::new(AdfTester::new()),
            decomposer: Box::new(SeasonalDecomposer::new()),
            detector: Box::new(AutocorrelationDetector::new()),
            recommender: Box::new(RuleBasedRecommender::new()),
            period: None,
            presence_tolerance: DEFAULT_PRESENCE_TOLERANCE,
            max_observations: DEFAULT_MAX_OBSERVATIONS,
        }
    }

    pub fn with_conditioner(mut self, conditioner: Box<dyn SeriesConditioner>) -> Self {
        self.conditioner = conditioner;
        self
    }

    pub fn with_tester(mut self, tester: Box<dyn StationarityTester>) -> Self {
        self.tester = tester;
        self
    }

    pub fn with_decomposer(mut self, decomposer: Box<dyn Decomposer>) -> Self {
        self.decomposer = decomposer;
        self
    }

    pub fn with_detector(mut self, detector: Box<dyn SeasonalityDetector>) -> Self {
        self.detector = detector;
        self
    }

    pub fn with_recommender(mut self, recommender: Box<dyn Recommender>) -> Self {
        self.recommender = recommender;
        self
    }

    /// Fix the seasonal period instead of deriving it.
    pub fn with_period(mut self, period: usize) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_presence_tolerance(mut self, tolerance: f64) -> Self {
        self.presence_tolerance = tolerance;
        self
    }

    pub fn with_max_observations(mut self, limit: usize) -> Self {
        self.max_observations = limit;
        self
    }

    /// Diagnose one raw series.
    pub fn run(&self, raw: &[RawObservation]) -> Result<DiagnosticReport> {
        self.check_size(raw.len())?;

        debug!(conditioner = self.conditioner.name(), rows = raw.len(), "conditioning");
        let conditioned = self.conditioner.condition(raw)?;
        let series = conditioned.series;
        self.check_size(series.len())?;

        let complete = complete_span_values(&series)?;
        let (period, period_source) = self.resolve_period(&series, &complete)?;
        debug!(period, ?period_source, "seasonal period resolved");

        let values = series.values();
        let (stationarity, decomposition) = rayon::join(
            || self.tester.test(&complete),
            || self.decomposer.decompose(&values, period),
        );
        let stationarity = stationarity?;
        let decomposition = decomposition?;

        let presence = assess_presence(&decomposition, self.presence_tolerance);
        let recommendation = self.recommender.recommend(
            stationarity.is_stationary,
            presence.has_trend,
            presence.has_seasonality,
        );

        info!(
            tester = self.tester.name(),
            points = series.len(),
            period,
            p_value = stationarity.p_value,
            stationary = stationarity.is_stationary,
            has_trend = presence.has_trend,
            has_seasonality = presence.has_seasonality,
            "diagnosis complete"
        );

        Ok(DiagnosticReport {
            series,
            conditioning: conditioned.summary,
            period,
            period_source,
            stationarity,
            decomposition,
            presence,
            recommendation,
        })
    }

    /// Diagnose many independent series in parallel.
    ///
    /// Results come back in input order, one per series.
    pub fn run_batch(&self, batch: &[Vec<RawObservation>]) -> Vec<Result<DiagnosticReport>> {
        batch.par_iter().map(|raw| self.run(raw)).collect()
    }

    fn check_size(&self, actual: usize) -> Result<()> {
        if actual > self.max_observations {
            return Err(DiagnosticError::InputTooLarge {
                limit: self.max_observations,
                actual,
            });
        }
        Ok(())
    }

    /// Explicit period, then the frequency's conventional cycle, then the
    /// autocorrelation peak.
    fn resolve_period(
        &self,
        series: &TimeSeries,
        complete: &[f64],
    ) -> Result<(usize, PeriodSource)> {
        if let Some(period) = self.period {
            if period < 2 {
                return Err(DiagnosticError::InvalidPeriod(period));
            }
            return Ok((period, PeriodSource::Explicit));
        }
        if let Some(period) = series.frequency().canonical_period() {
            return Ok((period, PeriodSource::Frequency));
        }
        self.detector
            .detect(complete, complete.len() / 2)
            .map(|period| (period, PeriodSource::Autocorrelation))
            .ok_or(DiagnosticError::UndeterminedPeriod)
    }
}

impl Default for DiagnosticPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Values of the complete span, failing on the first interior gap.
fn complete_span_values(series: &TimeSeries) -> Result<Vec<f64>> {
    let span = series
        .complete_span()
        .ok_or(series_spi::SeriesError::AllMissing)?;
    let start = span.start;
    series.observations()[span]
        .iter()
        .enumerate()
        .map(|(i, o)| {
            o.value
                .ok_or(DiagnosticError::MissingValues { index: start + i })
        })
        .collect()
}
