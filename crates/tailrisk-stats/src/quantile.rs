//! Interpolated quantiles and expected shortfall.

use crate::error::{StatsError, StatsResult};

/// The `p`-quantile of the observations under the linear-interpolation
/// rule between order statistics (the standard percentile definition).
///
/// `p = 0` returns the minimum observation and `p = 1` the maximum.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for an empty slice and
/// `StatsError::InvalidParameter` for `p` outside `[0, 1]`.
pub fn quantile(values: &[f64], p: f64) -> StatsResult<f64> {
    if values.is_empty() {
        return Err(StatsError::insufficient_data(1, 0));
    }
    if !p.is_finite() || p < 0.0 || p > 1.0 {
        return Err(StatsError::invalid_parameter(format!(
            "quantile probability must be in [0, 1], got {p}"
        )));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let fraction = position - lower as f64;

    if fraction == 0.0 || lower + 1 == sorted.len() {
        return Ok(sorted[lower]);
    }
    Ok(sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower]))
}

/// Expected shortfall: the mean of all observations at or below the
/// `alpha`-quantile.
///
/// This is the tail average, at least as extreme as the VaR boundary it
/// conditions on.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for an empty slice and
/// `StatsError::InvalidParameter` for `alpha` outside `[0, 1]`.
pub fn expected_shortfall(values: &[f64], alpha: f64) -> StatsResult<f64> {
    let threshold = quantile(values, alpha)?;

    // The threshold is interpolated from order statistics, so at least the
    // minimum observation is always at or below it.
    let (sum, count) = values
        .iter()
        .filter(|&&v| v <= threshold)
        .fold((0.0, 0usize), |(s, c), &v| (s + v, c + 1));

    Ok(sum / count as f64)
}
