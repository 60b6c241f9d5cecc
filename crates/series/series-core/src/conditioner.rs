//! Standard series conditioner.
//!
//! Parse, sort and dedup, resolve the frequency, resample onto the grid and
//! interpolate interior gaps.

use series_spi::{
    ConditionedSeries, ConditioningSummary, Frequency, FrequencyInferrer, MonthAnchor,
    RawObservation, Result, SeriesConditioner, SeriesError, TimeSeries,
};
use tracing::{debug, info, warn};

use crate::inference::{MedianSpacingInferrer, DEFAULT_MIN_MODE_SHARE};
use crate::interpolate::interpolate_time;
use crate::parse::parse_observations;
use crate::resample::{resample_anchored, sort_dedup, MAX_GRID_POINTS};

/// Conditioner that turns raw rows into a regular [`TimeSeries`].
#[derive(Debug, Clone)]
pub struct StandardConditioner {
    frequency: Option<Frequency>,
    inferrer: MedianSpacingInferrer,
    interpolate: bool,
    max_grid_points: usize,
}

impl StandardConditioner {
    pub fn new() -> Self {
        Self {
            frequency: None,
            inferrer: MedianSpacingInferrer::with_min_mode_share(DEFAULT_MIN_MODE_SHARE),
            interpolate: true,
            max_grid_points: MAX_GRID_POINTS,
        }
    }

    /// Use a declared frequency instead of inferring one.
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Minimum share of spacings the inferred frequency must explain.
    pub fn with_min_mode_share(mut self, share: f64) -> Self {
        self.inferrer = MedianSpacingInferrer::with_min_mode_share(share);
        self
    }

    /// Enable or disable interpolation of interior gaps.
    pub fn with_interpolation(mut self, interpolate: bool) -> Self {
        self.interpolate = interpolate;
        self
    }

    pub fn with_max_grid_points(mut self, limit: usize) -> Self {
        self.max_grid_points = limit;
        self
    }

    /// Declared frequency, if any.
    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }
}

impl Default for StandardConditioner {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesConditioner for StandardConditioner {
    fn condition(&self, raw: &[RawObservation]) -> Result<ConditionedSeries> {
        let input_rows = raw.len();
        let (mut observations, unparsed_rows) = parse_observations(raw);
        if unparsed_rows > 0 {
            warn!(
                unparsed_rows,
                input_rows, "dropped rows with unparseable timestamps"
            );
        }
        if observations.is_empty() {
            return Err(SeriesError::EmptyInput);
        }

        let duplicate_rows = sort_dedup(&mut observations);
        if duplicate_rows > 0 {
            info!(duplicate_rows, "dropped duplicate timestamps, kept first occurrence");
        }

        let timestamps: Vec<_> = observations.iter().map(|o| o.timestamp).collect();
        let (frequency, frequency_inferred) = match self.frequency {
            Some(frequency) if frequency.is_valid() => (frequency, false),
            Some(frequency) => return Err(SeriesError::InvalidFrequency(frequency.alias())),
            None => (self.inferrer.infer(&timestamps)?, true),
        };
        let anchor = MonthAnchor::detect(frequency, &timestamps);
        debug!(%frequency, frequency_inferred, ?anchor, "sampling frequency resolved");

        let (mut grid, counts) =
            resample_anchored(&observations, frequency, anchor, self.max_grid_points)?;
        if counts.off_grid > 0 {
            warn!(
                off_grid_rows = counts.off_grid,
                "dropped rows not on the {} grid", frequency
            );
        }

        let interpolated = if self.interpolate {
            interpolate_time(&mut grid)
        } else {
            0
        };

        if grid.iter().all(|o| o.is_missing()) {
            return Err(SeriesError::AllMissing);
        }

        let series = TimeSeries::from_regular_anchored(grid, frequency, anchor)?;
        let summary = ConditioningSummary {
            input_rows,
            unparsed_rows,
            duplicate_rows,
            off_grid_rows: counts.off_grid,
            inserted_gaps: counts.inserted,
            interpolated,
            frequency,
            frequency_inferred,
            anchor,
        };
        debug!(
            points = series.len(),
            missing = series.missing_count(),
            interpolated,
            "series conditioned"
        );

        Ok(ConditionedSeries { series, summary })
    }

    fn name(&self) -> &str {
        "Standard"
    }
}
