//! Configuration for a risk-report computation.

use serde::{Deserialize, Serialize};

use super::{ConfidenceLevel, Horizon};
use crate::error::{CoreError, CoreResult};

/// Configuration for computing a risk report.
///
/// Collects everything the interactive surface supplies: the instrument
/// identity (opaque to the engine), confidence level, reporting horizon,
/// Monte Carlo simulation count, risk-free rate, and an optional RNG seed
/// for reproducible simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Instrument identifier. Opaque to the engine; only the price-series
    /// supplier interprets it.
    pub ticker: String,

    /// VaR/ES confidence level.
    pub confidence: ConfidenceLevel,

    /// Reporting horizon in trading days. 1 means no scaling.
    pub horizon_days: u32,

    /// Number of Monte Carlo draws.
    pub num_simulations: usize,

    /// Annualized risk-free rate used for the Sharpe ratio.
    pub risk_free_rate: f64,

    /// Seed for the Monte Carlo random source. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            ticker: String::new(),
            confidence: ConfidenceLevel::DEFAULT,
            horizon_days: 1,
            num_simulations: 10_000,
            risk_free_rate: 0.0,
            seed: None,
        }
    }
}

impl RiskConfig {
    /// Creates a config for a ticker with default settings.
    #[must_use]
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            ..Self::default()
        }
    }

    /// Sets the confidence level.
    #[must_use]
    pub fn with_confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the reporting horizon in trading days.
    #[must_use]
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Sets the reporting horizon from a standard preset.
    #[must_use]
    pub fn with_horizon(self, horizon: Horizon) -> Self {
        self.with_horizon_days(horizon.trading_days())
    }

    /// Sets the number of Monte Carlo simulations.
    #[must_use]
    pub fn with_simulations(mut self, count: usize) -> Self {
        self.num_simulations = count;
        self
    }

    /// Sets the annualized risk-free rate.
    #[must_use]
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the Monte Carlo seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration domains.
    ///
    /// The confidence level enforces its own domain at construction and
    /// deserialization; this checks the remaining fields the interactive
    /// surface cannot be trusted with.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidParameter` for a zero horizon, zero
    /// simulation count, or non-finite risk-free rate.
    pub fn validate(&self) -> CoreResult<()> {
        if self.horizon_days == 0 {
            return Err(CoreError::invalid_parameter(
                "horizon must be at least 1 trading day",
            ));
        }
        if self.num_simulations == 0 {
            return Err(CoreError::invalid_parameter(
                "simulation count must be at least 1",
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(CoreError::invalid_parameter(
                "risk-free rate must be finite",
            ));
        }
        Ok(())
    }
}
