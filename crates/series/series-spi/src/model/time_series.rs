//! Regular time series.

use std::ops::Range;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::{Frequency, MonthAnchor, Observation};
use crate::error::{Result, SeriesError};

/// An ordered, uniformly spaced sequence of observations.
///
/// Timestamps are strictly increasing and every consecutive pair is exactly
/// one `frequency` step apart. Values may be missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    observations: Vec<Observation>,
    frequency: Frequency,
    anchor: MonthAnchor,
}

impl TimeSeries {
    /// Build a series from observations that already lie on a regular grid.
    ///
    /// The month anchor is detected from the timestamps. Fails with
    /// `SeriesError::IrregularSeries` when the observations are not one
    /// `frequency` step apart, and `SeriesError::EmptyInput` when empty.
    pub fn from_regular(observations: Vec<Observation>, frequency: Frequency) -> Result<Self> {
        let timestamps: Vec<_> = observations.iter().map(|o| o.timestamp).collect();
        let anchor = MonthAnchor::detect(frequency, &timestamps);
        Self::from_regular_anchored(observations, frequency, anchor)
    }

    /// Build a series whose calendar grid is placed by `anchor`.
    pub fn from_regular_anchored(
        observations: Vec<Observation>,
        frequency: Frequency,
        anchor: MonthAnchor,
    ) -> Result<Self> {
        if !frequency.is_valid() {
            return Err(SeriesError::InvalidFrequency(frequency.alias()));
        }
        let start = observations
            .first()
            .map(|o| o.timestamp)
            .ok_or(SeriesError::EmptyInput)?;

        for (i, obs) in observations.iter().enumerate() {
            if frequency.advance_anchored(start, i, anchor) != Some(obs.timestamp) {
                return Err(SeriesError::IrregularSeries(format!(
                    "observation {} at {} is not on the {} grid starting {}",
                    i, obs.timestamp, frequency, start
                )));
            }
        }

        let observations = observations
            .into_iter()
            .map(|o| Observation::new(o.timestamp, o.value))
            .collect();

        Ok(Self {
            observations,
            frequency,
            anchor,
        })
    }

    /// Build a complete series of `values` starting at `start`, keeping its
    /// day of month on calendar grids.
    pub fn from_values(start: NaiveDateTime, frequency: Frequency, values: &[f64]) -> Result<Self> {
        let observations = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                frequency
                    .advance(start, i)
                    .map(|t| Observation::new(t, Some(v)))
                    .ok_or_else(|| {
                        SeriesError::IrregularSeries(format!("grid overflows at index {}", i))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_regular_anchored(observations, frequency, MonthAnchor::DayOfMonth)
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series has no grid points.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Sampling frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Placement of calendar grid points within the month.
    pub fn anchor(&self) -> MonthAnchor {
        self.anchor
    }

    /// All observations in order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Timestamps in order.
    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.observations.iter().map(|o| o.timestamp).collect()
    }

    /// Values in order, `None` where missing.
    pub fn values(&self) -> Vec<Option<f64>> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Number of missing values.
    pub fn missing_count(&self) -> usize {
        self.observations.iter().filter(|o| o.is_missing()).count()
    }

    /// First timestamp.
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.observations.first().map(|o| o.timestamp)
    }

    /// Last timestamp.
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.observations.last().map(|o| o.timestamp)
    }

    /// Index range from the first to the last present value.
    ///
    /// Leading and trailing missing values fall outside the range.
    pub fn complete_span(&self) -> Option<Range<usize>> {
        let first = self.observations.iter().position(|o| !o.is_missing())?;
        let last = self.observations.iter().rposition(|o| !o.is_missing())?;
        Some(first..last + 1)
    }

    /// Values in the complete span, if none of them is missing.
    pub fn complete_values(&self) -> Option<Vec<f64>> {
        let span = self.complete_span()?;
        self.observations[span].iter().map(|o| o.value).collect()
    }
}
