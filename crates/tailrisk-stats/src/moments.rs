//! Sample moments of a return series.
//!
//! All sample statistics use the n−1 denominator; the standardized moments
//! (skewness, kurtosis) use population central moments, computed in a
//! single pass.

use crate::error::{StatsError, StatsResult};

/// Arithmetic mean of the observations.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for an empty slice.
pub fn mean(values: &[f64]) -> StatsResult<f64> {
    if values.is_empty() {
        return Err(StatsError::insufficient_data(1, 0));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance with the n−1 denominator.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for fewer than 2 observations.
pub fn sample_variance(values: &[f64]) -> StatsResult<f64> {
    if values.len() < 2 {
        return Err(StatsError::insufficient_data(2, values.len()));
    }
    let mu = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mu).powi(2)).sum();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation with the n−1 denominator.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for fewer than 2 observations.
pub fn sample_std(values: &[f64]) -> StatsResult<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Annualized volatility: sample standard deviation scaled by
/// `sqrt(periods_per_year)`.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for fewer than 2 observations,
/// or `StatsError::InvalidParameter` for a non-positive annualization base.
pub fn annualized_volatility(values: &[f64], periods_per_year: f64) -> StatsResult<f64> {
    if periods_per_year <= 0.0 || !periods_per_year.is_finite() {
        return Err(StatsError::invalid_parameter(format!(
            "periods per year must be positive, got {periods_per_year}"
        )));
    }
    Ok(sample_std(values)? * periods_per_year.sqrt())
}

/// Central moments m2, m3, m4 about the mean (population denominators).
fn central_moments(values: &[f64]) -> StatsResult<(f64, f64, f64)> {
    if values.len() < 2 {
        return Err(StatsError::insufficient_data(2, values.len()));
    }
    let n = values.len() as f64;
    let mu = mean(values)?;

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for &v in values {
        let d = v - mu;
        let d2 = d * d;
        m2 += d2;
        m3 += d * d2;
        m4 += d2 * d2;
    }
    Ok((m2 / n, m3 / n, m4 / n))
}

/// Skewness: third standardized central moment `m3 / m2^(3/2)`.
///
/// Negative skew indicates a heavier loss tail.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for fewer than 2 observations,
/// or `StatsError::DivisionByZero` when all observations are identical.
pub fn skewness(values: &[f64]) -> StatsResult<f64> {
    let (m2, m3, _) = central_moments(values)?;
    if m2 == 0.0 {
        return Err(StatsError::division_by_zero("skewness"));
    }
    Ok(m3 / m2.powf(1.5))
}

/// Kurtosis: fourth standardized central moment `m4 / m2^2`.
///
/// A normal distribution has kurtosis 3; larger values indicate fat tails.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for fewer than 2 observations,
/// or `StatsError::DivisionByZero` when all observations are identical.
pub fn kurtosis(values: &[f64]) -> StatsResult<f64> {
    let (m2, _, m4) = central_moments(values)?;
    if m2 == 0.0 {
        return Err(StatsError::division_by_zero("kurtosis"));
    }
    Ok(m4 / (m2 * m2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RETURNS: [f64; 5] = [-0.05, -0.02, 0.00, 0.01, 0.03];

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&RETURNS).unwrap(), -0.006);
    }

    #[test]
    fn test_sample_variance_n_minus_one() {
        // Hand-computed: sum of squared deviations = 0.00372, / 4
        assert_relative_eq!(sample_variance(&RETURNS).unwrap(), 0.00093, epsilon = 1e-12);
        assert_relative_eq!(
            sample_std(&RETURNS).unwrap(),
            0.00093_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_annualized_volatility() {
        let daily = sample_std(&RETURNS).unwrap();
        let annual = annualized_volatility(&RETURNS, 252.0).unwrap();
        assert_relative_eq!(annual, daily * 252.0_f64.sqrt());
    }

    #[test]
    fn test_skewness_sign() {
        // Left-heavy sample skews negative.
        let left_heavy = [-0.10, -0.01, 0.0, 0.01, 0.02];
        assert!(skewness(&left_heavy).unwrap() < 0.0);

        // Symmetric sample has zero skew.
        let symmetric = [-0.02, -0.01, 0.0, 0.01, 0.02];
        assert_relative_eq!(skewness(&symmetric).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kurtosis_of_two_point_distribution() {
        // Equal mass at ±1 has m4/m2² = 1, the minimum possible kurtosis.
        let bimodal = [-1.0, 1.0, -1.0, 1.0];
        assert_relative_eq!(kurtosis(&bimodal).unwrap(), 1.0);
    }

    #[test]
    fn test_constant_series_degenerate() {
        let flat = [0.01, 0.01, 0.01];
        assert!(matches!(
            skewness(&flat),
            Err(StatsError::DivisionByZero { .. })
        ));
        assert!(matches!(
            kurtosis(&flat),
            Err(StatsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_insufficient_data() {
        assert!(mean(&[]).is_err());
        assert!(sample_variance(&[0.01]).is_err());
        assert!(sample_std(&[0.01]).is_err());
        assert!(skewness(&[0.01]).is_err());
    }
}
