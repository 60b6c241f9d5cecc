//! Sampling frequency inference from inter-sample spacing.

use chrono::NaiveDateTime;
use series_spi::{Frequency, FrequencyInferrer, MonthAnchor, Result, SeriesError};
use tracing::debug;

/// Default share of spacings that must agree with the inferred frequency
pub const DEFAULT_MIN_MODE_SHARE: f64 = 0.5;

const FIXED_UNITS: [(i64, fn(u32) -> Frequency); 5] = [
    (604_800, Frequency::Weeks),
    (86_400, Frequency::Days),
    (3_600, Frequency::Hours),
    (60, Frequency::Minutes),
    (1, Frequency::Seconds),
];

/// Infers the frequency from the median spacing between samples.
///
/// The median spacing proposes a fixed-duration candidate and, when it is
/// month-like, a calendar candidate. The candidate that puts the larger share
/// of timestamps on its grid wins (gaps still count as on the grid). Below
/// `min_mode_share` the spacing has no stable mode and inference fails.
#[derive(Debug, Clone)]
pub struct MedianSpacingInferrer {
    min_mode_share: f64,
}

impl MedianSpacingInferrer {
    pub fn new() -> Self {
        Self {
            min_mode_share: DEFAULT_MIN_MODE_SHARE,
        }
    }

    pub fn with_min_mode_share(min_mode_share: f64) -> Self {
        Self {
            min_mode_share: min_mode_share.clamp(0.0, 1.0),
        }
    }
}

impl Default for MedianSpacingInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyInferrer for MedianSpacingInferrer {
    fn infer(&self, timestamps: &[NaiveDateTime]) -> Result<Frequency> {
        infer_frequency(timestamps, self.min_mode_share)
    }
}

/// Infer the sampling frequency of sorted, unique timestamps.
pub fn infer_frequency(timestamps: &[NaiveDateTime], min_mode_share: f64) -> Result<Frequency> {
    if timestamps.len() < 2 {
        return Err(ambiguous("fewer than two distinct timestamps"));
    }

    let mut spacings: Vec<i64> = timestamps
        .windows(2)
        .map(|w| w[1].signed_duration_since(w[0]).num_seconds())
        .collect();
    if spacings.iter().any(|&s| s <= 0) {
        return Err(ambiguous("timestamps are not strictly increasing by whole seconds"));
    }
    spacings.sort_unstable();
    let median = spacings[(spacings.len() - 1) / 2];

    let mut candidates = vec![fixed_candidate(median)];
    candidates.extend(calendar_candidate(median));

    let mut best: Option<(Frequency, f64)> = None;
    for candidate in candidates {
        let share = consistency_share(candidate, timestamps);
        debug!(frequency = %candidate, share, "frequency candidate");
        if best.map_or(true, |(_, s)| share > s) {
            best = Some((candidate, share));
        }
    }

    match best {
        Some((frequency, share)) if share >= min_mode_share => Ok(frequency),
        Some((frequency, share)) => Err(ambiguous(&format!(
            "only {:.0}% of timestamps lie on the {} grid of the median spacing",
            share * 100.0,
            frequency
        ))),
        None => Err(ambiguous("no candidate frequency")),
    }
}

/// Share of timestamps after the first that lie on the `frequency` grid
/// anchored at the first one.
///
/// Gaps keep later timestamps on the grid, so only rows that resampling would
/// drop count against the frequency.
pub fn consistency_share(frequency: Frequency, timestamps: &[NaiveDateTime]) -> f64 {
    let Some((&start, rest)) = timestamps.split_first() else {
        return 0.0;
    };
    if rest.is_empty() {
        return 0.0;
    }
    let anchor = MonthAnchor::detect(frequency, timestamps);
    let matching = rest
        .iter()
        .filter(|&&t| frequency.grid_index_anchored(start, t, anchor).is_some())
        .count();
    matching as f64 / rest.len() as f64
}

fn fixed_candidate(secs: i64) -> Frequency {
    for (unit, ctor) in FIXED_UNITS {
        if secs % unit == 0 {
            return ctor(u32::try_from(secs / unit).unwrap_or(u32::MAX));
        }
    }
    Frequency::Seconds(u32::try_from(secs).unwrap_or(u32::MAX))
}

fn calendar_candidate(secs: i64) -> Option<Frequency> {
    if secs % 86_400 != 0 {
        return None;
    }
    match secs / 86_400 {
        28..=31 => Some(Frequency::Months(1)),
        59..=62 => Some(Frequency::Months(2)),
        89..=92 => Some(Frequency::Quarters(1)),
        181..=184 => Some(Frequency::Months(6)),
        365..=366 => Some(Frequency::Years(1)),
        _ => None,
    }
}

fn ambiguous(reason: &str) -> SeriesError {
    SeriesError::AmbiguousFrequency {
        reason: reason.to_string(),
    }
}
