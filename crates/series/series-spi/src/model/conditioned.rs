//! Output of the conditioning stage.

use serde::Serialize;

use super::{Frequency, MonthAnchor, TimeSeries};

/// What conditioning did to the input, for reporting back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditioningSummary {
    /// Rows handed in
    pub input_rows: usize,
    /// Rows dropped because the timestamp did not parse
    pub unparsed_rows: usize,
    /// Rows dropped as exact-timestamp duplicates (first occurrence kept)
    pub duplicate_rows: usize,
    /// Rows dropped because they do not lie on the sampling grid
    pub off_grid_rows: usize,
    /// Grid points with no input row, inserted as missing
    pub inserted_gaps: usize,
    /// Missing values filled by interpolation
    pub interpolated: usize,
    /// Sampling frequency of the output grid
    pub frequency: Frequency,
    /// Whether the frequency was inferred rather than declared
    pub frequency_inferred: bool,
    /// Placement of calendar grid points within the month
    pub anchor: MonthAnchor,
}

/// A conditioned series plus the summary of how it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionedSeries {
    pub series: TimeSeries,
    pub summary: ConditioningSummary,
}
