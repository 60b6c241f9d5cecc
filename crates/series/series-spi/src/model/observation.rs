//! Observation types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A row as handed over by the I/O layer: unparsed timestamp text and a
/// numeric value or a missing marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Timestamp-like text (e.g. "2024-01-31", "2024-01-31T12:00:00Z")
    pub timestamp: String,
    /// Numeric value, `None` when missing
    pub value: Option<f64>,
}

impl RawObservation {
    /// Create a new raw observation.
    pub fn new(timestamp: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            timestamp: timestamp.into(),
            value,
        }
    }

    /// Create a raw observation with a present value.
    pub fn present(timestamp: impl Into<String>, value: f64) -> Self {
        Self::new(timestamp, Some(value))
    }

    /// Create a raw observation with a missing value.
    pub fn missing(timestamp: impl Into<String>) -> Self {
        Self::new(timestamp, None)
    }
}

/// A parsed observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Parsed timestamp
    pub timestamp: NaiveDateTime,
    /// Value, `None` when missing
    pub value: Option<f64>,
}

impl Observation {
    /// Create a new observation. Non-finite values are stored as missing.
    pub fn new(timestamp: NaiveDateTime, value: Option<f64>) -> Self {
        Self {
            timestamp,
            value: value.filter(|v| v.is_finite()),
        }
    }

    /// Whether the value is missing.
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}
