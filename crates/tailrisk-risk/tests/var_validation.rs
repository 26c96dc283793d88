//! Integration tests validating the VaR engine against hand-computed
//! reference values and cross-method consistency properties.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tailrisk_core::types::ConfidenceLevel;
use tailrisk_core::{PriceSeries, RiskConfig};
use tailrisk_risk::prelude::*;
use tailrisk_risk::var::NormalFit;
use tailrisk_stats::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn price_series(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
    PriceSeries::new(
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| (start + chrono::Days::new(i as u64), close))
            .collect(),
    )
    .unwrap()
}

/// A year of mildly trending synthetic closes with both up and down days.
fn synthetic_closes() -> Vec<f64> {
    let mut closes = Vec::with_capacity(253);
    let mut price = 100.0;
    for day in 0..253u32 {
        // Deterministic oscillation with drift; hits winners and losers.
        let swing = f64::from(day % 7) - 3.0;
        price *= 1.0 + 0.0004 + 0.004 * swing;
        closes.push(price);
    }
    closes
}

// ============================================================================
// Reference-Value Tests
// ============================================================================

#[test]
fn historical_var_matches_hand_computed_quantile() {
    // Fixture from the percentile definition: position 0.2 * 4 = 0.8 of
    // the sorted returns interpolates between -0.05 and -0.02.
    let returns = [-0.05, -0.02, 0.00, 0.01, 0.03];
    assert_relative_eq!(
        historical_var(&returns, 0.2).unwrap(),
        -0.026,
        epsilon = 1e-12
    );
}

#[test]
fn monte_carlo_recovers_normal_quantile() {
    // mu = 0, sigma = 0.02, alpha = 0.05: VaR = Phi^-1(0.05) * 0.02.
    let fit = NormalFit {
        mu: 0.0,
        sigma: 0.02,
    };
    let mut rng = StdRng::seed_from_u64(123);
    let mc = monte_carlo_var(fit, 0.05, 100_000, &mut rng).unwrap();

    assert_relative_eq!(mc.var, -0.0329, max_relative = 0.015);
}

#[test]
fn monte_carlo_converges_to_parametric() {
    let closes = synthetic_closes();
    let prices = price_series(&closes);
    let returns = prices.log_returns().unwrap();

    let parametric = parametric_var(returns.as_slice(), 0.05).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let mc = monte_carlo_var(parametric.fit, 0.05, 100_000, &mut rng).unwrap();

    assert_relative_eq!(mc.var, parametric.var, max_relative = 0.015);
}

#[test]
fn expected_shortfall_never_above_var() {
    let closes = synthetic_closes();
    let prices = price_series(&closes);
    let returns = prices.log_returns().unwrap();

    for alpha in [0.01, 0.05, 0.10] {
        let var = historical_var(returns.as_slice(), alpha).unwrap();
        let es = expected_shortfall(returns.as_slice(), alpha).unwrap();
        assert!(
            es <= var,
            "ES {es} above VaR {var} at alpha {alpha}"
        );
    }
}

#[test]
fn price_return_equity_round_trip() {
    let closes = synthetic_closes();
    let prices = price_series(&closes);
    let returns = prices.log_returns().unwrap();

    assert!(returns.len() <= closes.len() - 1);

    // Compounding the return series reproduces every price ratio.
    let curve = equity_curve(returns.as_slice());
    for (i, &close) in closes.iter().enumerate() {
        assert_relative_eq!(curve[i], close / closes[0], max_relative = 1e-10);
    }
}

// ============================================================================
// Error-Contract Tests
// ============================================================================

#[test]
fn insufficient_data_for_every_estimator() {
    // Historical: zero observations.
    assert!(matches!(
        historical_var(&[], 0.05),
        Err(RiskError::InsufficientData(_))
    ));
    // Parametric: mean alone is not enough, variance needs two.
    assert!(matches!(
        parametric_var(&[], 0.05),
        Err(RiskError::InsufficientData(_))
    ));
    assert!(matches!(
        parametric_var(&[0.01], 0.05),
        Err(RiskError::InsufficientData(_))
    ));
}

#[test]
fn zero_denominator_policy_is_an_error() {
    let flat = [0.01, 0.01, 0.01, 0.01];
    assert!(matches!(
        sharpe_ratio(&flat, 0.0, 252.0),
        Err(StatsError::DivisionByZero { .. })
    ));
    assert!(matches!(
        calmar_ratio(&flat, 252.0),
        Err(StatsError::DivisionByZero { .. })
    ));
    let no_losses = [0.01, 0.02, 0.00];
    assert!(win_loss_ratio(&no_losses).is_err());
}

// ============================================================================
// End-to-End Report
// ============================================================================

#[test]
fn report_over_synthetic_year() {
    let closes = synthetic_closes();
    let prices = price_series(&closes);
    let config = RiskConfig::new("SYNTH")
        .with_confidence(ConfidenceLevel::new(0.95).unwrap())
        .with_horizon_days(21)
        .with_simulations(50_000)
        .with_seed(2024);
    let mut rng = rng_for_config(&config);

    let report = compute_risk_report(&prices, &config, &mut rng).unwrap();

    let historical = report.historical.as_ref().unwrap();
    let parametric = report.parametric.as_ref().unwrap();
    let monte_carlo = report.monte_carlo.as_ref().unwrap();

    // All three loss estimates sit in the left tail.
    assert!(historical.daily_value < 0.0);
    assert!(parametric.estimate.daily_value < 0.0);
    assert!(monte_carlo.estimate.daily_value < 0.0);

    // Horizon scaling is sqrt(21) for every method.
    let scale = 21.0_f64.sqrt();
    assert_relative_eq!(
        historical.value,
        historical.daily_value * scale,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        monte_carlo.estimate.value,
        monte_carlo.estimate.daily_value * scale,
        epsilon = 1e-12
    );

    // The Monte Carlo draws come from the parametric fit.
    assert_eq!(monte_carlo.fit, parametric.fit);

    let stats = report.stats.as_ref().unwrap();
    assert!(stats.volatility > 0.0);
    assert!(stats.max_drawdown < 0.0);
    assert!(stats.expected_shortfall <= historical.daily_value);
    assert!(stats.avg_win.as_ref().unwrap() > &0.0);
    assert!(stats.avg_loss.as_ref().unwrap() < &0.0);
}
