//! Error types for numerical integration operations.

use std::fmt;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during numerical integration.
///
/// Only precondition violations live here. Failures raised by a fallible
/// integrand are returned to the caller in the integrand's own error type.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrateError {
    /// Invalid interval provided (non-finite bounds or a >= b).
    InvalidInterval { a: f64, b: f64, context: String },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },
}

impl fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "Invalid interval [{}, {}] in {}: bounds must be finite and satisfy a < b",
                    a, b, context
                )
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
        }
    }
}

impl std::error::Error for IntegrateError {}

/// Reject non-finite bounds and empty or reversed intervals.
pub(crate) fn check_interval(a: f64, b: f64, context: &str) -> IntegrateResult<()> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(IntegrateError::InvalidInterval {
            a,
            b,
            context: context.to_string(),
        });
    }
    Ok(())
}

/// Reject tolerances that are zero, negative, or NaN.
pub(crate) fn check_tolerance(eps: f64, context: &str) -> IntegrateResult<()> {
    if !eps.is_finite() || eps <= 0.0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: "eps".to_string(),
            message: format!("{}: tolerance must be positive and finite (got {})", context, eps),
        });
    }
    Ok(())
}
