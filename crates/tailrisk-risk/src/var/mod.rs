//! Value at Risk (VaR) calculations.
//!
//! VaR estimates the log-return threshold below which at most an `alpha`
//! fraction of outcomes fall. All three methods consume the same cleaned
//! return series and the same alpha; they differ only in how the return
//! distribution is modeled.

mod historical;
mod monte_carlo;
mod parametric;

pub use historical::historical_var;
pub use monte_carlo::{monte_carlo_var, MonteCarloVar};
pub use parametric::{parametric_var, NormalFit, ParametricVar};

use serde::{Deserialize, Serialize};

/// VaR calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarMethod {
    /// Empirical quantile of observed returns.
    Historical,
    /// Variance-covariance under a fitted normal.
    Parametric,
    /// Empirical quantile of simulated normal draws.
    MonteCarlo,
}

impl std::fmt::Display for VarMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VarMethod::Historical => "historical",
            VarMethod::Parametric => "parametric",
            VarMethod::MonteCarlo => "monte-carlo",
        };
        write!(f, "{name}")
    }
}

/// A finalized Value-at-Risk estimate.
///
/// `value` is expressed as a log return over `horizon_days` trading days
/// (typically negative; more negative means a larger potential loss).
/// `daily_value` retains the single-period figure the horizon scaling was
/// applied to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarEstimate {
    /// VaR over the reporting horizon, as a log return.
    pub value: f64,
    /// The single-day figure before horizon scaling.
    pub daily_value: f64,
    /// Left-tail probability the estimate corresponds to.
    pub alpha: f64,
    /// Reporting horizon in trading days.
    pub horizon_days: u32,
    /// Method used for the calculation.
    pub method: VarMethod,
}

impl std::fmt::Display for VarEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VaR({:.0}%, {}d, {}): {:.4}",
            (1.0 - self.alpha) * 100.0,
            self.horizon_days,
            self.method,
            self.value
        )
    }
}

/// A return distribution plus the threshold to mark on it.
///
/// This is the seam the rendering consumer plugs into: a histogram-ready
/// sample (observed returns for the historical method, simulated draws for
/// Monte Carlo) and the single VaR value to overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnDistribution {
    /// The sample to render.
    pub samples: Vec<f64>,
    /// The VaR threshold to mark.
    pub threshold: f64,
}
