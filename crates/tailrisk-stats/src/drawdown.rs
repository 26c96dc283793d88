//! Equity-curve compounding and maximum drawdown.

use crate::error::{StatsError, StatsResult};

/// Compounds a log-return series into a cumulative equity curve.
///
/// The curve starts from a reference value of 1.0 and multiplies by
/// `exp(r)` per period, so `equity[t] / equity[s]` reproduces the
/// underlying price ratio exactly.
#[must_use]
pub fn equity_curve(log_returns: &[f64]) -> Vec<f64> {
    let mut curve = Vec::with_capacity(log_returns.len() + 1);
    let mut equity = 1.0;
    curve.push(equity);
    for &r in log_returns {
        equity *= r.exp();
        curve.push(equity);
    }
    curve
}

/// Maximum drawdown: the largest peak-to-trough relative decline of an
/// equity curve.
///
/// Defined as `min over t of (equity[t] / running_max(equity[0..=t]) - 1)`;
/// always ≤ 0, and exactly 0 for a monotonically non-decreasing curve.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for an empty curve and
/// `StatsError::InvalidParameter` for non-positive equity values.
pub fn max_drawdown(equity: &[f64]) -> StatsResult<f64> {
    if equity.is_empty() {
        return Err(StatsError::insufficient_data(1, 0));
    }

    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0f64;
    for &value in equity {
        if !value.is_finite() || value <= 0.0 {
            return Err(StatsError::invalid_parameter(format!(
                "equity curve values must be positive, got {value}"
            )));
        }
        peak = peak.max(value);
        worst = worst.min(value / peak - 1.0);
    }
    Ok(worst)
}
