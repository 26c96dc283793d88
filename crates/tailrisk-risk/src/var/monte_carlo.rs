//! Monte Carlo VaR.

use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;

use super::{NormalFit, ReturnDistribution};
use crate::error::{RiskError, RiskResult};
use tailrisk_stats::quantile::quantile;

/// A Monte Carlo VaR result.
///
/// The simulated sample is retained so the rendering consumer can draw the
/// distribution with the threshold marked, and so expected shortfall can be
/// taken over the same draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloVar {
    /// The parameters the draws came from.
    pub fit: NormalFit,
    /// Single-day VaR: the `alpha`-quantile of the simulated sample.
    pub var: f64,
    /// The simulated log returns.
    pub samples: Vec<f64>,
}

impl MonteCarloVar {
    /// Returns the simulated distribution with the VaR threshold marked.
    #[must_use]
    pub fn distribution(&self) -> ReturnDistribution {
        ReturnDistribution {
            samples: self.samples.clone(),
            threshold: self.var,
        }
    }
}

/// Calculate Monte Carlo VaR by simulating normal returns.
///
/// Draws `num_simulations` independent samples from `N(mu, sigma)` using
/// the caller-supplied random source, then applies the identical
/// empirical-quantile rule as the historical method to the simulated
/// sample.
///
/// Output is stochastic by design: repeated calls with the same inputs
/// differ unless `rng` is seeded. The random source is an explicit
/// argument, never ambient global state, so tests can pass a
/// `StdRng::seed_from_u64` and production callers a thread RNG.
///
/// # Errors
///
/// `RiskError::InvalidParameter` when `num_simulations < 1`, when
/// `sigma <= 0` (degenerate distribution), or when `alpha` is outside
/// `(0, 1)`.
pub fn monte_carlo_var<R: Rng>(
    fit: NormalFit,
    alpha: f64,
    num_simulations: usize,
    rng: &mut R,
) -> RiskResult<MonteCarloVar> {
    if num_simulations < 1 {
        return Err(RiskError::InvalidParameter(
            "simulation count must be at least 1".to_string(),
        ));
    }
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(RiskError::InvalidParameter(format!(
            "alpha must be in (0, 1), got {alpha}"
        )));
    }

    // Normal::new rejects sigma <= 0 and NaN parameters.
    let normal = Normal::new(fit.mu, fit.sigma).map_err(|_| {
        RiskError::InvalidParameter(format!(
            "degenerate normal distribution (mu = {}, sigma = {})",
            fit.mu, fit.sigma
        ))
    })?;

    let samples: Vec<f64> = (0..num_simulations).map(|_| rng.sample(normal)).collect();
    let var = quantile(&samples, alpha)?;

    Ok(MonteCarloVar { fit, var, samples })
}
