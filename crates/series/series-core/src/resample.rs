//! Ordering, deduplication and regular-grid resampling.

use std::collections::BTreeMap;

use series_spi::{Frequency, MonthAnchor, Observation, Result, SeriesError};
use tracing::debug;

/// Upper bound on resampled grid points.
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Counts reported by [`resample`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResampleCounts {
    /// Observations that did not fall on a grid point
    pub off_grid: usize,
    /// Grid points without an observation
    pub inserted: usize,
}

/// Sort by timestamp and drop exact-timestamp duplicates.
///
/// The sort is stable, so the first occurrence in input order survives.
/// Returns the number of rows dropped.
pub fn sort_dedup(observations: &mut Vec<Observation>) -> usize {
    let before = observations.len();
    observations.sort_by_key(|o| o.timestamp);
    observations.dedup_by_key(|o| o.timestamp);
    before - observations.len()
}

/// Place sorted, unique observations on the grid anchored at the first one.
///
/// The grid runs from the first timestamp to the last observation that lies
/// on it. Observations between grid points are dropped. Calendar grids follow
/// month ends only when that places more observations; see
/// [`MonthAnchor::detect`].
pub fn resample(
    observations: &[Observation],
    frequency: Frequency,
) -> Result<(Vec<Observation>, ResampleCounts)> {
    resample_with_limit(observations, frequency, MAX_GRID_POINTS)
}

pub fn resample_with_limit(
    observations: &[Observation],
    frequency: Frequency,
    limit: usize,
) -> Result<(Vec<Observation>, ResampleCounts)> {
    let timestamps: Vec<_> = observations.iter().map(|o| o.timestamp).collect();
    let anchor = MonthAnchor::detect(frequency, &timestamps);
    resample_anchored(observations, frequency, anchor, limit)
}

/// Resample onto the grid placed by an explicit `anchor`.
pub fn resample_anchored(
    observations: &[Observation],
    frequency: Frequency,
    anchor: MonthAnchor,
    limit: usize,
) -> Result<(Vec<Observation>, ResampleCounts)> {
    if !frequency.is_valid() {
        return Err(SeriesError::InvalidFrequency(frequency.alias()));
    }
    let start = observations
        .first()
        .map(|o| o.timestamp)
        .ok_or(SeriesError::EmptyInput)?;

    let mut counts = ResampleCounts::default();
    let mut slots: BTreeMap<usize, Option<f64>> = BTreeMap::new();
    for obs in observations {
        match frequency.grid_index_anchored(start, obs.timestamp, anchor) {
            Some(index) => {
                slots.entry(index).or_insert(obs.value);
            }
            None => counts.off_grid += 1,
        }
    }

    let last = slots.keys().next_back().copied().unwrap_or(0);
    let points = last.saturating_add(1);
    if points > limit {
        return Err(SeriesError::GridTooLarge { points, limit });
    }

    let mut grid = Vec::with_capacity(points);
    for index in 0..points {
        let timestamp = frequency.advance_anchored(start, index, anchor).ok_or_else(|| {
            SeriesError::IrregularSeries(format!("grid overflows at index {}", index))
        })?;
        let value = match slots.get(&index) {
            Some(value) => *value,
            None => {
                counts.inserted += 1;
                None
            }
        };
        grid.push(Observation::new(timestamp, value));
    }

    debug!(
        points,
        off_grid = counts.off_grid,
        inserted = counts.inserted,
        ?anchor,
        "resampled onto {} grid",
        frequency
    );
    Ok((grid, counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn day(d: u32) -> NaiveDateTime {
        ymd(2024, 1, d)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn monthly(start: NaiveDateTime, n: usize, anchor: MonthAnchor) -> Vec<Observation> {
        (0..n)
            .map(|i| {
                let t = Frequency::Months(1).advance_anchored(start, i, anchor).unwrap();
                Observation::new(t, Some(i as f64))
            })
            .collect()
    }

    #[test]
    fn test_sort_dedup_keeps_first() {
        let mut obs = vec![
            Observation::new(day(3), Some(3.0)),
            Observation::new(day(1), Some(1.0)),
            Observation::new(day(3), Some(30.0)),
            Observation::new(day(2), Some(2.0)),
        ];
        let dropped = sort_dedup(&mut obs);
        assert_eq!(dropped, 1);
        let values: Vec<_> = obs.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_resample_inserts_gaps() {
        let obs = vec![
            Observation::new(day(1), Some(1.0)),
            Observation::new(day(2), Some(2.0)),
            Observation::new(day(5), Some(5.0)),
        ];
        let (grid, counts) = resample(&obs, Frequency::Days(1)).unwrap();
        assert_eq!(grid.len(), 5);
        assert_eq!(counts.inserted, 2);
        assert_eq!(counts.off_grid, 0);
        assert_eq!(grid[2].value, None);
        assert_eq!(grid[3].timestamp, day(4));
    }

    #[test]
    fn test_resample_drops_off_grid() {
        let obs = vec![
            Observation::new(day(1), Some(1.0)),
            Observation::new(day(1) + Duration::hours(6), Some(9.0)),
            Observation::new(day(2), Some(2.0)),
            Observation::new(day(3), Some(3.0)),
        ];
        let (grid, counts) = resample(&obs, Frequency::Days(1)).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(counts.off_grid, 1);
        assert_eq!(counts.inserted, 0);
    }

    #[test]
    fn test_resample_grid_ends_at_last_on_grid() {
        let obs = vec![
            Observation::new(day(1), Some(1.0)),
            Observation::new(day(2), Some(2.0)),
            Observation::new(day(2) + Duration::hours(3), Some(2.5)),
        ];
        let (grid, _) = resample(&obs, Frequency::Days(1)).unwrap();
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_resample_limit() {
        let obs = vec![
            Observation::new(day(1), Some(1.0)),
            Observation::new(day(1) + Duration::days(1000), Some(2.0)),
        ];
        let result = resample_with_limit(&obs, Frequency::Days(1), 100);
        assert_eq!(
            result.unwrap_err(),
            SeriesError::GridTooLarge {
                points: 1001,
                limit: 100
            }
        );
    }

    #[test]
    fn test_resample_keeps_day_of_month_from_month_end_start() {
        // The 28th of every month, starting on a February month end
        let obs = monthly(ymd(2021, 2, 28), 36, MonthAnchor::DayOfMonth);
        let (grid, counts) = resample(&obs, Frequency::Months(1)).unwrap();
        assert_eq!(grid.len(), 36);
        assert_eq!(counts, ResampleCounts::default());
        assert_eq!(grid, obs);

        // The 30th, starting on an April month end
        let obs = monthly(ymd(2021, 4, 30), 12, MonthAnchor::DayOfMonth);
        let (grid, counts) = resample(&obs, Frequency::Months(1)).unwrap();
        assert_eq!(grid.len(), 12);
        assert_eq!(counts.off_grid, 0);
        assert_eq!(counts.inserted, 0);
        assert_eq!(grid[1].timestamp, ymd(2021, 5, 30));
    }

    #[test]
    fn test_resample_follows_month_ends() {
        let obs = monthly(ymd(2021, 2, 28), 24, MonthAnchor::MonthEnd);
        let (grid, counts) = resample(&obs, Frequency::Months(1)).unwrap();
        assert_eq!(grid.len(), 24);
        assert_eq!(counts, ResampleCounts::default());
        assert_eq!(grid[1].timestamp, ymd(2021, 3, 31));
        assert_eq!(grid[2].timestamp, ymd(2021, 4, 30));
    }

    #[test]
    fn test_resample_empty() {
        let result = resample(&[], Frequency::Days(1));
        assert_eq!(result.unwrap_err(), SeriesError::EmptyInput);
    }
}
