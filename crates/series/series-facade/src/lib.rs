//! Series Facade
//!
//! High-level API for series conditioning. Re-exports all public types
//! from the series stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use series_api::*;

// Explicit re-exports for documentation
pub use series_api::prelude;

// Re-export core modules for direct access
pub use series_core::{conditioner, inference, interpolate, parse, resample};
