//! # tailrisk-risk
//!
//! VaR estimation and risk reporting for a single instrument.
//!
//! This crate provides the three classic VaR methodologies plus the
//! aggregate report the interactive surface consumes:
//!
//! - **Historical VaR**: empirical alpha-quantile of observed log returns
//! - **Parametric VaR**: variance-covariance method under a fitted normal
//! - **Monte Carlo VaR**: empirical quantile of simulated normal draws
//! - **Horizon scaling**: square-root-of-time extrapolation
//! - **Risk report**: all three estimates plus the statistics suite,
//!   computed independently from one return series
//!
//! ## Example
//!
//! ```ignore
//! use tailrisk_risk::prelude::*;
//! use tailrisk_core::prelude::*;
//! use rand::SeedableRng;
//!
//! let config = RiskConfig::new("MSFT").with_seed(42);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let report = compute_risk_report(&prices, &config, &mut rng)?;
//!
//! if let Ok(var) = &report.historical {
//!     println!("95% 1d historical VaR: {var}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]

mod error;
pub mod horizon;
pub mod report;
pub mod var;

pub use error::{RiskError, RiskResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::horizon::scale_to_horizon;
    pub use crate::report::{
        compute_risk_report, rng_for_config, MonteCarloEstimate, ParametricEstimate, RiskReport,
        RiskStatSet,
    };
    pub use crate::var::{
        historical_var, monte_carlo_var, parametric_var, MonteCarloVar, NormalFit, ParametricVar,
        ReturnDistribution, VarEstimate, VarMethod,
    };
    pub use crate::{RiskError, RiskResult};
}
