//! Error types for the Tailrisk core crate.
//!
//! This module defines the error types shared by the estimator crates,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Tailrisk core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced by the core types and accepted from external suppliers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Not enough valid observations for the requested operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Out-of-domain configuration or input value.
    #[error("Invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the invalid parameter.
        reason: String,
    },

    /// Price series violates its ordering invariant.
    #[error("Invalid price series: {reason}")]
    InvalidPriceSeries {
        /// Description of the violation.
        reason: String,
    },

    /// External market-data supplier failed.
    ///
    /// Never produced by the core itself; suppliers implementing
    /// [`crate::traits::PriceSource`] surface retrieval failures through
    /// this variant and the engine propagates them unmodified.
    #[error("Data unavailable: {reason}")]
    DataUnavailable {
        /// Description of the supplier failure.
        reason: String,
    },
}

impl CoreError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Creates a data unavailable error.
    #[must_use]
    pub fn data_unavailable(reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            reason: reason.into(),
        }
    }
}
