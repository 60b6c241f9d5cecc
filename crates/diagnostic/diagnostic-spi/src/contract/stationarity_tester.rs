//! Trait for stationarity testing

use crate::error::Result;
use crate::model::StationarityReport;

/// Trait for unit-root style stationarity tests
pub trait StationarityTester: Send + Sync {
    /// Test a complete series (no missing values)
    fn test(&self, values: &[f64]) -> Result<StationarityReport>;

    /// Get the test name
    fn name(&self) -> &str;
}
