//! Time-weighted linear interpolation.

use series_spi::Observation;

/// Fill interior missing values linearly in elapsed time.
///
/// Each missing value between two present neighbours gets
/// `left + (right - left) * (t - t_left) / (t_right - t_left)`, with times in
/// seconds, so uneven calendar steps are weighted by their true length.
/// Leading and trailing missing values stay missing. Returns how many values
/// were filled.
pub fn interpolate_time(observations: &mut [Observation]) -> usize {
    let present: Vec<usize> = observations
        .iter()
        .enumerate()
        .filter(|(_, o)| !o.is_missing())
        .map(|(i, _)| i)
        .collect();

    let mut filled = 0;
    for pair in present.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if right - left < 2 {
            continue;
        }
        let (Some(y0), Some(y1)) = (observations[left].value, observations[right].value) else {
            continue;
        };
        let t0 = observations[left].timestamp;
        let span = observations[right]
            .timestamp
            .signed_duration_since(t0)
            .num_milliseconds() as f64;
        if span <= 0.0 {
            continue;
        }

        for obs in &mut observations[left + 1..right] {
            let elapsed = obs.timestamp.signed_duration_since(t0).num_milliseconds() as f64;
            obs.value = Some(y0 + (y1 - y0) * elapsed / span);
            filled += 1;
        }
    }
    filled
}
