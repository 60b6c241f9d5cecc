//! Series conditioning error types

use thiserror::Error;

/// Errors raised while turning raw rows into a regular series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// No row survived timestamp parsing
    #[error("No valid timestamped rows in input")]
    EmptyInput,

    /// Every value is missing, even after interpolation
    #[error("Every value is missing after interpolation")]
    AllMissing,

    /// Sampling frequency could not be inferred and none was declared
    #[error("Cannot infer sampling frequency ({reason}); declare a frequency explicitly")]
    AmbiguousFrequency { reason: String },

    /// Frequency alias could not be parsed
    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    /// Observations do not lie on a regular grid
    #[error("Irregular series: {0}")]
    IrregularSeries(String),

    /// Resampling would produce more grid points than allowed
    #[error("Resampled grid too large: {points} points exceeds limit of {limit}")]
    GridTooLarge { points: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            SeriesError::EmptyInput.to_string(),
            "No valid timestamped rows in input"
        );
    }

    #[test]
    fn test_ambiguous_frequency_message() {
        let error = SeriesError::AmbiguousFrequency {
            reason: "only one timestamp".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot infer sampling frequency (only one timestamp); declare a frequency explicitly"
        );
    }

    #[test]
    fn test_grid_too_large_message() {
        let error = SeriesError::GridTooLarge {
            points: 20,
            limit: 10,
        };
        assert_eq!(
            error.to_string(),
            "Resampled grid too large: 20 points exceeds limit of 10"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error + Send + Sync> = Box::new(SeriesError::AllMissing);
        assert!(error.source().is_none());
    }
}
