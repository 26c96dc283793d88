//! Performance ratios: CAGR, Sharpe, Calmar, and the win/loss family.

use crate::drawdown::{equity_curve, max_drawdown};
use crate::error::{StatsError, StatsResult};
use crate::moments::{mean, sample_std};

/// Average return: the arithmetic mean of all per-period returns.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for an empty slice.
pub fn avg_return(returns: &[f64]) -> StatsResult<f64> {
    mean(returns)
}

/// Average win: the mean of strictly positive returns.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` when no winning period exists.
pub fn avg_win(returns: &[f64]) -> StatsResult<f64> {
    let wins: Vec<f64> = returns.iter().copied().filter(|&r| r > 0.0).collect();
    mean(&wins)
}

/// Average loss: the mean of strictly negative returns.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` when no losing period exists.
pub fn avg_loss(returns: &[f64]) -> StatsResult<f64> {
    let losses: Vec<f64> = returns.iter().copied().filter(|&r| r < 0.0).collect();
    mean(&losses)
}

/// Win/loss ratio: `|avg_win / avg_loss|`.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` when there are no winning or no
/// losing periods (the latter would otherwise divide by zero).
pub fn win_loss_ratio(returns: &[f64]) -> StatsResult<f64> {
    let win = avg_win(returns)?;
    let loss = avg_loss(returns)?;
    Ok((win / loss).abs())
}

/// Compound annual growth rate from an equity curve.
///
/// `(final / initial)^(periods_per_year / n_periods) - 1`, where
/// `n_periods` is the number of compounding steps in the curve.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for a curve with fewer than 2
/// points and `StatsError::InvalidParameter` for non-positive endpoints or
/// annualization base.
pub fn cagr(equity: &[f64], periods_per_year: f64) -> StatsResult<f64> {
    if equity.len() < 2 {
        return Err(StatsError::insufficient_data(2, equity.len()));
    }
    if periods_per_year <= 0.0 || !periods_per_year.is_finite() {
        return Err(StatsError::invalid_parameter(format!(
            "periods per year must be positive, got {periods_per_year}"
        )));
    }
    let initial = equity[0];
    let final_ = equity[equity.len() - 1];
    if initial <= 0.0 || final_ <= 0.0 {
        return Err(StatsError::invalid_parameter(
            "equity curve endpoints must be positive",
        ));
    }
    let n_periods = (equity.len() - 1) as f64;
    Ok((final_ / initial).powf(periods_per_year / n_periods) - 1.0)
}

/// Annualized Sharpe ratio.
///
/// Per-period excess mean over per-period standard deviation, scaled by
/// `sqrt(periods_per_year)`. The risk-free rate is supplied annualized and
/// de-annualized by simple division.
///
/// # Errors
///
/// Returns `StatsError::InsufficientData` for fewer than 2 returns and
/// `StatsError::DivisionByZero` when volatility is exactly zero.
pub fn sharpe_ratio(
    returns: &[f64],
    risk_free_rate: f64,
    periods_per_year: f64,
) -> StatsResult<f64> {
    if periods_per_year <= 0.0 || !periods_per_year.is_finite() {
        return Err(StatsError::invalid_parameter(format!(
            "periods per year must be positive, got {periods_per_year}"
        )));
    }
    let excess = mean(returns)? - risk_free_rate / periods_per_year;
    let std = sample_std(returns)?;
    if std == 0.0 {
        return Err(StatsError::division_by_zero("sharpe ratio"));
    }
    Ok(excess / std * periods_per_year.sqrt())
}

/// Calmar ratio: CAGR over the absolute maximum drawdown.
///
/// # Errors
///
/// Returns `StatsError::DivisionByZero` when the equity curve never draws
/// down (a monotone curve has zero drawdown), plus the `cagr` /
/// `max_drawdown` error conditions.
pub fn calmar_ratio(returns: &[f64], periods_per_year: f64) -> StatsResult<f64> {
    let curve = equity_curve(returns);
    let growth = cagr(&curve, periods_per_year)?;
    let drawdown = max_drawdown(&curve)?;
    if drawdown == 0.0 {
        return Err(StatsError::division_by_zero("calmar ratio"));
    }
    Ok(growth / drawdown.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RETURNS: [f64; 6] = [0.01, -0.02, 0.015, 0.005, -0.01, 0.02];

    #[test]
    fn test_win_loss_family() {
        assert_relative_eq!(
            avg_win(&RETURNS).unwrap(),
            (0.01 + 0.015 + 0.005 + 0.02) / 4.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            avg_loss(&RETURNS).unwrap(),
            (-0.02 + -0.01) / 2.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            win_loss_ratio(&RETURNS).unwrap(),
            (0.0125 / 0.015),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_win_loss_ratio_without_losses() {
        let all_wins = [0.01, 0.02, 0.03];
        assert!(matches!(
            win_loss_ratio(&all_wins),
            Err(StatsError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_cagr_one_year_of_periods() {
        // A curve spanning exactly periods_per_year steps: CAGR equals the
        // total growth.
        let equity = [1.0, 1.02, 1.08, 1.10];
        assert_relative_eq!(cagr(&equity, 3.0).unwrap(), 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_cagr_annualizes_shorter_windows() {
        // Doubling over half a "year" of 2 periods compounds to 4x.
        let equity = [1.0, 2.0];
        assert_relative_eq!(cagr(&equity, 2.0).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sharpe_zero_volatility_is_error() {
        let flat = [0.01, 0.01, 0.01];
        assert!(matches!(
            sharpe_ratio(&flat, 0.0, 252.0),
            Err(StatsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_sharpe_sign_follows_excess_return() {
        assert!(sharpe_ratio(&RETURNS, 0.0, 252.0).unwrap() > 0.0);
        let losing: Vec<f64> = RETURNS.iter().map(|r| -r).collect();
        assert!(sharpe_ratio(&losing, 0.0, 252.0).unwrap() < 0.0);
    }

    #[test]
    fn test_calmar_monotone_curve_is_error() {
        let rising = [0.01, 0.02, 0.01];
        assert!(matches!(
            calmar_ratio(&rising, 252.0),
            Err(StatsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_calmar_sign() {
        // Net-positive series with a drawdown: positive Calmar.
        assert!(calmar_ratio(&RETURNS, 252.0).unwrap() > 0.0);
    }
}
