//! Error types for risk calculations.

use serde::{Deserialize, Serialize};
use tailrisk_core::CoreError;
use tailrisk_stats::StatsError;
use thiserror::Error;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
///
/// Serializable so report sections that failed stay wire-representable
/// alongside the ones that succeeded.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum RiskError {
    /// Not enough valid observations for the requested estimator.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Out-of-domain configuration: alpha outside (0,1), non-positive
    /// simulation count, non-positive sigma, zero horizon.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// External market-data supplier failure, propagated unmodified.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Statistics layer error.
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),
}

impl From<CoreError> for RiskError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientData { required, actual } => {
                Self::InsufficientData(format!("need at least {required}, got {actual}"))
            }
            CoreError::InvalidParameter { reason } | CoreError::InvalidPriceSeries { reason } => {
                Self::InvalidParameter(reason)
            }
            CoreError::DataUnavailable { reason } => Self::DataUnavailable(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: RiskError = CoreError::insufficient_data(2, 0).into();
        assert!(matches!(err, RiskError::InsufficientData(_)));

        let err: RiskError = CoreError::data_unavailable("network timeout").into();
        assert_eq!(err.to_string(), "data unavailable: network timeout");
    }

    #[test]
    fn test_stats_error_mapping() {
        let err: RiskError = StatsError::division_by_zero("sharpe ratio").into();
        assert!(err.to_string().contains("sharpe ratio"));
    }
}
