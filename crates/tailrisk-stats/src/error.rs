//! Error types for statistical operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized Result type for statistical operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
///
/// Serializable so results that carry per-metric errors stay
/// wire-representable.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatsError {
    /// Insufficient data points for the requested statistic.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// A ratio metric's denominator is exactly zero.
    ///
    /// Returned instead of a signed-infinity sentinel so degenerate inputs
    /// (zero volatility, flat equity curve, no losing days) are reported,
    /// never silently defaulted.
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// The metric whose denominator vanished.
        context: String,
    },

    /// Invalid input parameter.
    #[error("Invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the invalid input.
        reason: String,
    },
}

impl StatsError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::insufficient_data(2, 0);
        assert_eq!(err.to_string(), "Insufficient data: need at least 2, got 0");

        let err = StatsError::division_by_zero("sharpe ratio");
        assert!(err.to_string().contains("sharpe ratio"));
    }
}
