//! # Tailrisk Stats
//!
//! Return-series statistics for the Tailrisk risk analytics library.
//!
//! This crate provides the pure numerical layer:
//!
//! - **Moments**: mean, sample variance/standard deviation, skewness, kurtosis
//! - **Quantiles**: linearly interpolated quantiles and expected shortfall
//! - **Drawdown**: equity-curve compounding and maximum drawdown
//! - **Performance**: CAGR, Sharpe, Calmar, and the win/loss family
//!
//! Every function is a pure function of a `&[f64]` slice of log returns
//! (or an equity curve derived from one); no state is shared between calls.
//!
//! ## Conventions
//!
//! - Sample statistics use the n−1 denominator throughout.
//! - Quantiles interpolate linearly between order statistics.
//! - Annualization multiplies by the caller-supplied periods-per-year base;
//!   the engine uses 252 trading days everywhere.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]

pub mod drawdown;
pub mod error;
pub mod moments;
pub mod performance;
pub mod quantile;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::drawdown::{equity_curve, max_drawdown};
    pub use crate::error::{StatsError, StatsResult};
    pub use crate::moments::{
        annualized_volatility, kurtosis, mean, sample_std, sample_variance, skewness,
    };
    pub use crate::performance::{
        avg_loss, avg_return, avg_win, cagr, calmar_ratio, sharpe_ratio, win_loss_ratio,
    };
    pub use crate::quantile::{expected_shortfall, quantile};
}

pub use error::{StatsError, StatsResult};
