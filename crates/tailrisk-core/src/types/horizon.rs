//! Reporting horizon and annualization constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical number of trading days per year.
///
/// Used consistently for every annualization in the library (CAGR, Sharpe,
/// volatility) and as the conversion base between an annual risk-free rate
/// and its per-day equivalent.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Standard reporting horizons for VaR and expected shortfall.
///
/// Single-day risk figures are extrapolated to a horizon under the
/// square-root-of-time rule, which inherits the i.i.d. assumption of the
/// parametric method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Horizon {
    /// One trading day (no scaling).
    #[default]
    Daily,
    /// One trading month (21 days).
    Monthly,
    /// One trading quarter (63 days).
    Quarterly,
    /// Half a trading year (126 days).
    SemiAnnual,
    /// One trading year (252 days).
    Annual,
}

impl Horizon {
    /// Returns the horizon length in trading days.
    #[must_use]
    pub fn trading_days(&self) -> u32 {
        match self {
            Horizon::Daily => 1,
            Horizon::Monthly => 21,
            Horizon::Quarterly => 63,
            Horizon::SemiAnnual => 126,
            Horizon::Annual => 252,
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Horizon::Daily => "1d",
            Horizon::Monthly => "21d",
            Horizon::Quarterly => "63d",
            Horizon::SemiAnnual => "126d",
            Horizon::Annual => "252d",
        };
        write!(f, "{name}")
    }
}
