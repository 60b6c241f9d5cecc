//! Stationarity test models

use serde::{Deserialize, Serialize};

/// How the number of lagged differences is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LagSelection {
    /// Exactly this many lagged differences
    Fixed(usize),
    /// Minimise the Akaike information criterion
    #[default]
    Aic,
    /// Minimise the Bayesian information criterion
    Bic,
}

/// Test statistic thresholds at the usual significance levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    #[serde(rename = "1%")]
    pub one_percent: f64,
    #[serde(rename = "5%")]
    pub five_percent: f64,
    #[serde(rename = "10%")]
    pub ten_percent: f64,
}

/// Result of an Augmented Dickey-Fuller test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationarityReport {
    /// t-statistic of the lagged level coefficient
    pub statistic: f64,
    /// Approximate p-value in [0, 1]
    pub p_value: f64,
    /// `p_value < significance`
    pub is_stationary: bool,
    /// Lagged differences in the final regression
    pub used_lag: usize,
    /// Rows in the final regression
    pub n_obs: usize,
    pub critical_values: CriticalValues,
    pub significance: f64,
}
