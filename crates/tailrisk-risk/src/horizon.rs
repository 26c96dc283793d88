//! Square-root-of-time horizon scaling.

use crate::error::{RiskError, RiskResult};

/// Scales a single-period VaR or expected-shortfall figure to an N-day
/// horizon: `v * sqrt(horizon_days)`.
///
/// Pure and stateless; a horizon of 1 is the identity transform. The
/// square-root-of-time rule assumes i.i.d. returns across periods (the
/// same assumption the parametric method already makes) and is applied
/// uniformly to all three VaR methods' outputs and to expected shortfall.
/// Only finalized single-period figures are scaled, never raw returns.
///
/// # Errors
///
/// `RiskError::InvalidParameter` for a zero horizon.
pub fn scale_to_horizon(value: f64, horizon_days: u32) -> RiskResult<f64> {
    if horizon_days == 0 {
        return Err(RiskError::InvalidParameter(
            "horizon must be at least 1 trading day".to_string(),
        ));
    }
    Ok(value * f64::from(horizon_days).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_day_is_identity() {
        for v in [-0.05, 0.0, 0.12] {
            assert_relative_eq!(scale_to_horizon(v, 1).unwrap(), v);
        }
    }

    #[test]
    fn test_four_days_doubles() {
        assert_relative_eq!(scale_to_horizon(-0.02, 4).unwrap(), -0.04);
    }

    #[test]
    fn test_standard_horizons() {
        let v = -0.0329;
        assert_relative_eq!(scale_to_horizon(v, 252).unwrap(), v * 252.0_f64.sqrt());
    }

    #[test]
    fn test_zero_horizon_rejected() {
        assert!(matches!(
            scale_to_horizon(-0.02, 0),
            Err(RiskError::InvalidParameter(_))
        ));
    }
}
