//! # Tailrisk
//!
//! Facade crate for the Tailrisk single-instrument risk analytics library.
//!
//! Re-exports the public API of the member crates:
//!
//! - [`tailrisk_core`]: domain types, configuration, and the price-source
//!   trait
//! - [`tailrisk_stats`]: pure return-series statistics
//! - [`tailrisk_risk`]: the three VaR estimators, horizon scaling, and the
//!   aggregate risk report
//!
//! ## Example
//!
//! ```rust
//! use tailrisk::prelude::*;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let prices = PriceSeries::new(
//!     [100.0, 101.5, 99.0, 98.2, 100.4, 102.1, 101.0]
//!         .iter()
//!         .enumerate()
//!         .map(|(i, &close)| (start + chrono::Days::new(i as u64), close))
//!         .collect(),
//! )?;
//!
//! let config = RiskConfig::new("MSFT").with_seed(42);
//! let mut rng = rng_for_config(&config);
//! let report = compute_risk_report(&prices, &config, &mut rng)?;
//!
//! if let Ok(var) = &report.historical {
//!     println!("{var}");
//! }
//! # Ok::<(), tailrisk::RiskError>(())
//! ```

#![warn(missing_docs)]

pub use tailrisk_core::{
    self as core, ConfidenceLevel, CoreError, CoreResult, Horizon, PriceSeries, ReturnSeries,
    RiskConfig,
};
pub use tailrisk_risk::{self as risk, RiskError, RiskResult};
pub use tailrisk_stats::{self as stats, StatsError, StatsResult};

pub use tailrisk_core::prelude::TRADING_DAYS_PER_YEAR;

/// Prelude for convenient imports.
pub mod prelude {
    pub use tailrisk_core::prelude::*;
    pub use tailrisk_risk::prelude::*;
    pub use tailrisk_stats::prelude::*;
}
