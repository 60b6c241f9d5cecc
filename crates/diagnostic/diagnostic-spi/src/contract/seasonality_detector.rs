//! Seasonal period detection contract

/// Derives a seasonal period from the data when none is declared.
pub trait SeasonalityDetector: Send + Sync {
    /// Period in `2..=max_period`, or `None` when no cycle stands out
    fn detect(&self, values: &[f64], max_period: usize) -> Option<usize>;
}
