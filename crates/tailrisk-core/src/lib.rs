//! # Tailrisk Core
//!
//! Core types and traits for the Tailrisk single-instrument risk analytics
//! library.
//!
//! This crate provides the foundational building blocks used throughout
//! Tailrisk:
//!
//! - **Types**: Domain-specific types like `PriceSeries`, `ReturnSeries`,
//!   `ConfidenceLevel`, `Horizon`, and `RiskConfig`
//! - **Traits**: The `PriceSource` abstraction over market-data suppliers
//! - **Errors**: Structured error types shared by the estimator crates
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values (a
//!   confidence level is not a bare `f64`)
//! - **Validate at the Boundary**: Constructors reject out-of-domain input
//!   so the estimators can assume well-formed series
//! - **Explicit Over Implicit**: Simplifying assumptions (log returns,
//!   trading-day annualization) are visible in the API
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let series = PriceSeries::new(vec![
//!     (NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 100.0),
//!     (NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 101.0),
//!     (NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(), 99.5),
//! ])?;
//!
//! let returns = series.log_returns()?;
//! assert_eq!(returns.len(), 2);
//! # Ok::<(), tailrisk_core::CoreError>(())
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
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::traits::PriceSource;
    pub use crate::types::{
        ConfidenceLevel, Horizon, PricePoint, PriceSeries, ReturnSeries, RiskConfig,
        TRADING_DAYS_PER_YEAR,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{ConfidenceLevel, Horizon, PriceSeries, ReturnSeries, RiskConfig};
