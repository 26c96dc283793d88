//! Historical (empirical-quantile) VaR.

use crate::error::{RiskError, RiskResult};
use tailrisk_stats::quantile::quantile;

/// Calculate historical VaR from a series of log returns.
///
/// The estimate is the `alpha`-quantile of the observed returns under the
/// linear-interpolation rule; no distributional assumption is made. At the
/// boundaries, `alpha = 0` returns the worst observed return and
/// `alpha = 1` the best.
///
/// # Arguments
///
/// * `returns` - Cleaned log returns (absent entries already excluded)
/// * `alpha` - Left-tail probability in `[0, 1]`
///
/// # Returns
///
/// Single-day VaR as a log return (typically negative).
///
/// # Errors
///
/// `RiskError::InsufficientData` when no returns are supplied;
/// `RiskError::InvalidParameter` when `alpha` is outside `[0, 1]`.
pub fn historical_var(returns: &[f64], alpha: f64) -> RiskResult<f64> {
    if returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "no returns provided".to_string(),
        ));
    }
    if !alpha.is_finite() || alpha < 0.0 || alpha > 1.0 {
        return Err(RiskError::InvalidParameter(format!(
            "alpha must be in [0, 1], got {alpha}"
        )));
    }

    Ok(quantile(returns, alpha)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RETURNS: [f64; 5] = [-0.05, -0.02, 0.00, 0.01, 0.03];

    #[test]
    fn test_historical_var_fixture() {
        // alpha = 0.2 interpolates at position 0.8 of the sorted series.
        assert_relative_eq!(
            historical_var(&RETURNS, 0.2).unwrap(),
            -0.026,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_alpha_boundaries_give_extremes() {
        assert_relative_eq!(historical_var(&RETURNS, 0.0).unwrap(), -0.05);
        assert_relative_eq!(historical_var(&RETURNS, 1.0).unwrap(), 0.03);
    }

    #[test]
    fn test_empty_returns() {
        assert!(matches!(
            historical_var(&[], 0.05),
            Err(RiskError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_alpha_out_of_domain() {
        assert!(matches!(
            historical_var(&RETURNS, -0.01),
            Err(RiskError::InvalidParameter(_))
        ));
        assert!(matches!(
            historical_var(&RETURNS, 1.5),
            Err(RiskError::InvalidParameter(_))
        ));
    }
}
