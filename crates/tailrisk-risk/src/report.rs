//! The aggregate risk report.
//!
//! `compute_risk_report` is the pure entry point the interactive surface
//! calls on every configuration change: one price series plus one config
//! in, all three VaR estimates plus the statistics suite out. Each section
//! is computed independently from the same return series: a failure in
//! one method is reported in its own slot and never prevents or alters the
//! others.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{RiskError, RiskResult};
use crate::horizon::scale_to_horizon;
use crate::var::{
    historical_var, monte_carlo_var, parametric_var, NormalFit, ReturnDistribution, VarEstimate,
    VarMethod,
};
use tailrisk_core::types::TRADING_DAYS_PER_YEAR;
use tailrisk_core::{PriceSeries, ReturnSeries, RiskConfig};
use tailrisk_stats::drawdown::{equity_curve, max_drawdown};
use tailrisk_stats::moments::{annualized_volatility, kurtosis, skewness};
use tailrisk_stats::performance::{
    avg_loss, avg_return, avg_win, cagr, calmar_ratio, sharpe_ratio, win_loss_ratio,
};
use tailrisk_stats::quantile::expected_shortfall;

/// A parametric VaR estimate with its fitted distribution parameters.
///
/// `fit` stays visible so a consumer can judge how well the normality
/// assumption matches the observed returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParametricEstimate {
    /// The horizon-scaled estimate.
    pub estimate: VarEstimate,
    /// Fitted sample mean and standard deviation.
    pub fit: NormalFit,
}

/// A Monte Carlo VaR estimate with its simulated sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloEstimate {
    /// The horizon-scaled estimate.
    pub estimate: VarEstimate,
    /// Parameters the draws came from (identical to the parametric fit).
    pub fit: NormalFit,
    /// The simulated single-day log returns.
    pub samples: Vec<f64>,
}

impl MonteCarloEstimate {
    /// Returns the simulated distribution with the single-day threshold
    /// marked, ready for rendering.
    #[must_use]
    pub fn distribution(&self) -> ReturnDistribution {
        ReturnDistribution {
            samples: self.samples.clone(),
            threshold: self.estimate.daily_value,
        }
    }
}

/// The statistics suite computed from one return series.
///
/// Metrics that are always defined for a non-degenerate series are plain
/// values; ratio metrics whose denominator can vanish (and the win/loss
/// family, which needs at least one win and one loss) carry their own
/// `Result` so a degenerate input surfaces per metric instead of
/// discarding the rest of the suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskStatSet {
    /// Mean per-period log return.
    pub avg_return: f64,
    /// Mean of strictly positive returns.
    pub avg_win: RiskResult<f64>,
    /// Mean of strictly negative returns.
    pub avg_loss: RiskResult<f64>,
    /// `|avg_win / avg_loss|`.
    pub win_loss_ratio: RiskResult<f64>,
    /// Annualized volatility (sample std × √252).
    pub volatility: f64,
    /// Third standardized central moment.
    pub skewness: RiskResult<f64>,
    /// Fourth standardized central moment (normal = 3).
    pub kurtosis: RiskResult<f64>,
    /// Compound annual growth rate of the compounded equity curve.
    pub cagr: f64,
    /// Annualized Sharpe ratio; errors when volatility is exactly zero.
    pub sharpe: RiskResult<f64>,
    /// Calmar ratio; errors when the curve never draws down.
    pub calmar: RiskResult<f64>,
    /// Maximum drawdown of the equity curve (≤ 0).
    pub max_drawdown: f64,
    /// Single-day expected shortfall at the configured alpha.
    pub expected_shortfall: f64,
    /// Expected shortfall scaled to the reporting horizon.
    pub expected_shortfall_horizon: f64,
}

/// The complete risk report for one instrument and configuration.
///
/// Each VaR method and the statistics suite occupy independent `Result`
/// slots; consumers render what succeeded and report what failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Instrument identifier, echoed from the configuration.
    pub ticker: String,
    /// Left-tail probability the VaR estimates correspond to.
    pub alpha: f64,
    /// Reporting horizon in trading days.
    pub horizon_days: u32,
    /// The cleaned log-return series all sections were computed from.
    pub returns: ReturnSeries,
    /// Historical (empirical-quantile) VaR.
    pub historical: RiskResult<VarEstimate>,
    /// Parametric (variance-covariance) VaR.
    pub parametric: RiskResult<ParametricEstimate>,
    /// Monte Carlo VaR.
    pub monte_carlo: RiskResult<MonteCarloEstimate>,
    /// Performance and risk statistics.
    pub stats: RiskResult<RiskStatSet>,
}

impl RiskReport {
    /// Returns the observed return distribution with the single-day
    /// historical VaR threshold marked, if that method succeeded.
    #[must_use]
    pub fn historical_distribution(&self) -> Option<ReturnDistribution> {
        self.historical.as_ref().ok().map(|var| ReturnDistribution {
            samples: self.returns.as_slice().to_vec(),
            threshold: var.daily_value,
        })
    }
}

/// Builds the random source for a configuration: seeded when a seed is
/// set, entropy-backed otherwise.
#[must_use]
pub fn rng_for_config(config: &RiskConfig) -> StdRng {
    config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

fn finalize(daily: f64, alpha: f64, horizon_days: u32, method: VarMethod) -> RiskResult<VarEstimate> {
    Ok(VarEstimate {
        value: scale_to_horizon(daily, horizon_days)?,
        daily_value: daily,
        alpha,
        horizon_days,
        method,
    })
}

/// Computes the statistics suite from a return series.
///
/// # Errors
///
/// `RiskError::InsufficientData` when fewer than 2 returns are available
/// (volatility and the equity-curve metrics are undefined); per-metric
/// errors for the ratio fields are carried inside the set.
pub fn compute_risk_stats(returns: &[f64], config: &RiskConfig) -> RiskResult<RiskStatSet> {
    let alpha = config.confidence.alpha();
    let curve = equity_curve(returns);

    let es = expected_shortfall(returns, alpha)?;

    Ok(RiskStatSet {
        avg_return: avg_return(returns)?,
        avg_win: avg_win(returns).map_err(RiskError::from),
        avg_loss: avg_loss(returns).map_err(RiskError::from),
        win_loss_ratio: win_loss_ratio(returns).map_err(RiskError::from),
        volatility: annualized_volatility(returns, TRADING_DAYS_PER_YEAR)?,
        skewness: skewness(returns).map_err(RiskError::from),
        kurtosis: kurtosis(returns).map_err(RiskError::from),
        cagr: cagr(&curve, TRADING_DAYS_PER_YEAR)?,
        sharpe: sharpe_ratio(returns, config.risk_free_rate, TRADING_DAYS_PER_YEAR)
            .map_err(RiskError::from),
        calmar: calmar_ratio(returns, TRADING_DAYS_PER_YEAR).map_err(RiskError::from),
        max_drawdown: max_drawdown(&curve)?,
        expected_shortfall: es,
        expected_shortfall_horizon: scale_to_horizon(es, config.horizon_days)?,
    })
}

/// Computes the full risk report: all three VaR methods plus the
/// statistics suite, independently, from one price series.
///
/// Pure function of its inputs: the random source is the only
/// nondeterminism and is explicitly owned by the caller (see
/// [`rng_for_config`] for the production default). Config validation and
/// return-series derivation are fatal; everything downstream fails only in
/// its own slot.
///
/// # Errors
///
/// `RiskError::InvalidParameter` for an invalid configuration,
/// `RiskError::InsufficientData` when no valid return can be derived, and
/// `RiskError::DataUnavailable` propagated from a failed supplier.
pub fn compute_risk_report<R: Rng>(
    prices: &PriceSeries,
    config: &RiskConfig,
    rng: &mut R,
) -> RiskResult<RiskReport> {
    config.validate()?;
    let returns = prices.log_returns()?;

    let alpha = config.confidence.alpha();
    let horizon = config.horizon_days;
    let series = returns.as_slice();

    let historical = historical_var(series, alpha)
        .and_then(|daily| finalize(daily, alpha, horizon, VarMethod::Historical));

    let parametric = parametric_var(series, alpha).and_then(|result| {
        Ok(ParametricEstimate {
            estimate: finalize(result.var, alpha, horizon, VarMethod::Parametric)?,
            fit: result.fit,
        })
    });

    let monte_carlo = NormalFit::from_returns(series)
        .and_then(|fit| monte_carlo_var(fit, alpha, config.num_simulations, rng))
        .and_then(|result| {
            Ok(MonteCarloEstimate {
                estimate: finalize(result.var, alpha, horizon, VarMethod::MonteCarlo)?,
                fit: result.fit,
                samples: result.samples,
            })
        });

    let stats = compute_risk_stats(series, config);

    for (section, err) in [
        ("historical", historical.as_ref().err()),
        ("parametric", parametric.as_ref().err()),
        ("monte-carlo", monte_carlo.as_ref().err()),
        ("stats", stats.as_ref().err()),
    ] {
        if let Some(err) = err {
            debug!("{} section failed for {}: {err}", section, config.ticker);
        }
    }

    Ok(RiskReport {
        ticker: config.ticker.clone(),
        alpha,
        horizon_days: horizon,
        returns,
        historical,
        parametric,
        monte_carlo,
        stats,
    })
}
