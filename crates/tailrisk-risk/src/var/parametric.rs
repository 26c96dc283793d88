//! Parametric (variance-covariance) VaR.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{RiskError, RiskResult};
use tailrisk_stats::moments::{mean, sample_std};

/// A normal distribution fitted to a return series.
///
/// The variance-covariance method assumes returns are i.i.d. normal with
/// constant mean and variance. That assumption is explicit: the fitted
/// parameters stay observable on every result so a consumer can judge fit
/// quality (and the Monte Carlo method reuses them verbatim).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalFit {
    /// Sample mean of the returns.
    pub mu: f64,
    /// Sample standard deviation of the returns (n−1 denominator).
    pub sigma: f64,
}

impl NormalFit {
    /// Fits mean and standard deviation to a return series.
    ///
    /// # Errors
    ///
    /// `RiskError::InsufficientData` for fewer than 2 returns (sigma
    /// undefined).
    pub fn from_returns(returns: &[f64]) -> RiskResult<Self> {
        if returns.len() < 2 {
            return Err(RiskError::InsufficientData(format!(
                "parametric fit needs at least 2 returns, got {}",
                returns.len()
            )));
        }
        Ok(Self {
            mu: mean(returns)?,
            sigma: sample_std(returns)?,
        })
    }
}

/// A parametric VaR result with its fitted distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParametricVar {
    /// The fitted normal parameters.
    pub fit: NormalFit,
    /// Single-day VaR as a log return: `mu + z * sigma`.
    pub var: f64,
}

/// The standard-normal left-tail quantile `Φ⁻¹(alpha)`.
pub(crate) fn standard_normal_quantile(alpha: f64) -> RiskResult<f64> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(RiskError::InvalidParameter(format!(
            "alpha must be in (0, 1), got {alpha}"
        )));
    }
    let standard = Normal::new(0.0, 1.0)
        .map_err(|e| RiskError::InvalidParameter(format!("standard normal: {e}")))?;
    Ok(standard.inverse_cdf(alpha))
}

/// Calculate parametric VaR using the variance-covariance method.
///
/// Fits `mu` and `sigma` to the returns and evaluates the exact normal
/// quantile: `VaR = mu + Φ⁻¹(alpha) * sigma`. For `alpha < 0.5` the
/// z-score is negative, so the estimate sits in the loss tail.
///
/// # Errors
///
/// `RiskError::InsufficientData` for fewer than 2 returns;
/// `RiskError::InvalidParameter` when `alpha` is outside `(0, 1)`.
pub fn parametric_var(returns: &[f64], alpha: f64) -> RiskResult<ParametricVar> {
    let fit = NormalFit::from_returns(returns)?;
    let z = standard_normal_quantile(alpha)?;
    Ok(ParametricVar {
        fit,
        var: fit.mu + z * fit.sigma,
    })
}
