//! # Error Types
//!
//! Structured error types for structiq_core. These errors are designed to be
//! informative for both humans and UI layers, providing enough context to
//! render a specific message and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use structiq_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "span_m".to_string(),
//!             value: span_m.to_string(),
//!             reason: "Span must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for structiq_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by UI and API consumers.
/// All failures are per-call: the caller recovers by supplying
/// corrected input, never by retrying the same call.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Material not found in the reference table
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// An intermediate formula produced a non-real value
    /// (e.g. a negative number under a square root)
    #[error("Math domain error in {calculation}: {detail}")]
    DomainMath { calculation: String, detail: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a DomainMath error
    pub fn domain_math(calculation: impl Into<String>, detail: impl Into<String>) -> Self {
        CalcError::DomainMath {
            calculation: calculation.into(),
            detail: detail.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::DomainMath { .. } => "DOMAIN_MATH_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("span_m", "-5.0", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::domain_math("lever arm", "negative discriminant").error_code(),
            "DOMAIN_MATH_ERROR"
        );
    }

    #[test]
    fn test_display_messages() {
        let error = CalcError::invalid_input("floor_count", "0", "At least one floor is required");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'floor_count': 0 - At least one floor is required"
        );
    }
}
