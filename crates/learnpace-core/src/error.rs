//! Validation error types.
//!
//! Every malformed input is rejected before any arithmetic happens, so a
//! caller never sees a silently coerced score, an `inf`, or a `NaN`.

use thiserror::Error;

/// Errors raised when a performance record or scorer configuration is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A score sequence has no entries, so its mean is undefined.
    #[error("{field} must not be empty")]
    EmptySequence { field: &'static str },

    /// A percentage falls outside [0, 100].
    #[error("{field}[{index}] = {value} is outside the range 0..=100")]
    PercentageOutOfRange {
        field: &'static str,
        index: usize,
        value: f64,
    },

    /// A duration used as a divisor is zero or negative.
    #[error("{field} must be strictly positive, got {value}")]
    NonPositiveDuration { field: &'static str, value: f64 },

    /// A duration is negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeDuration { field: &'static str, value: f64 },

    /// A value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Scoring weights are negative, non-finite, or do not sum to 1.0.
    #[error("invalid pace weights: {0}")]
    InvalidWeights(String),
}

impl ValidationError {
    /// The name of the offending field, if the error refers to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::EmptySequence { field }
            | ValidationError::PercentageOutOfRange { field, .. }
            | ValidationError::NonPositiveDuration { field, .. }
            | ValidationError::NegativeDuration { field, .. }
            | ValidationError::NonFinite { field } => Some(field),
            ValidationError::InvalidWeights(_) => None,
        }
    }
}
