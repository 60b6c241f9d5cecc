//! Component presence model

use serde::{Deserialize, Serialize};

/// Whether the decomposition shows a trend and a seasonal component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentPresence {
    pub has_trend: bool,
    pub has_seasonality: bool,
    /// Population standard deviation of the defined trend values
    pub trend_std: f64,
    /// Population standard deviation of the defined seasonal values
    pub seasonal_std: f64,
}
