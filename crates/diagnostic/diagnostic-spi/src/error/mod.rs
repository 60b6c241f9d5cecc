//! Error module containing error types and result aliases

mod diagnostic_error;

pub use diagnostic_error::DiagnosticError;

/// Result type for diagnostic operations
pub type Result<T> = std::result::Result<T, DiagnosticError>;
