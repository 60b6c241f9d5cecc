//! Conditioner configuration types.

use serde::{Deserialize, Serialize};
use series_core::inference::DEFAULT_MIN_MODE_SHARE;
use series_core::resample::MAX_GRID_POINTS;
use series_core::StandardConditioner;
use series_spi::Frequency;

/// Configuration for turning raw rows into a regular series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionerConfig {
    /// Declared sampling frequency (e.g. "D", "M", "15min"); inferred when absent
    pub frequency: Option<Frequency>,
    /// Share of spacings the inferred frequency must explain
    pub min_mode_share: f64,
    /// Whether to interpolate interior gaps
    pub interpolate: bool,
    /// Upper bound on resampled grid points
    pub max_grid_points: usize,
}

impl Default for ConditionerConfig {
    fn default() -> Self {
        Self {
            frequency: None,
            min_mode_share: DEFAULT_MIN_MODE_SHARE,
            interpolate: true,
            max_grid_points: MAX_GRID_POINTS,
        }
    }
}

impl ConditionerConfig {
    /// Configuration with a declared frequency.
    pub fn with_frequency(frequency: Frequency) -> Self {
        Self {
            frequency: Some(frequency),
            ..Self::default()
        }
    }

    /// Build the conditioner described by this configuration.
    pub fn conditioner(&self) -> StandardConditioner {
        let conditioner = StandardConditioner::new()
            .with_min_mode_share(self.min_mode_share)
            .with_interpolation(self.interpolate)
            .with_max_grid_points(self.max_grid_points);
        match self.frequency {
            Some(frequency) => conditioner.with_frequency(frequency),
            None => conditioner,
        }
    }
}

/// Builder for ConditionerConfig.
#[derive(Debug, Default)]
pub struct ConditionerConfigBuilder {
    frequency: Option<Frequency>,
    min_mode_share: Option<f64>,
    interpolate: Option<bool>,
    max_grid_points: Option<usize>,
}

impl ConditionerConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared frequency.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Set the minimum mode share for inference.
    pub fn min_mode_share(mut self, share: f64) -> Self {
        self.min_mode_share = Some(share);
        self
    }

    /// Enable or disable interpolation.
    pub fn interpolate(mut self, interpolate: bool) -> Self {
        self.interpolate = Some(interpolate);
        self
    }

    /// Set the grid size limit.
    pub fn max_grid_points(mut self, limit: usize) -> Self {
        self.max_grid_points = Some(limit);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<ConditionerConfig, &'static str> {
        let defaults = ConditionerConfig::default();
        let min_mode_share = self.min_mode_share.unwrap_or(defaults.min_mode_share);
        if !(0.0..=1.0).contains(&min_mode_share) {
            return Err("min_mode_share must be within [0, 1]");
        }
        if self.frequency.is_some_and(|f| !f.is_valid()) {
            return Err("frequency multiplier must be at least 1");
        }
        let max_grid_points = self.max_grid_points.unwrap_or(defaults.max_grid_points);
        if max_grid_points == 0 {
            return Err("max_grid_points must be positive");
        }

        Ok(ConditionerConfig {
            frequency: self.frequency,
            min_mode_share,
            interpolate: self.interpolate.unwrap_or(defaults.interpolate),
            max_grid_points,
        })
    }
}
