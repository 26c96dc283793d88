//! Domain types for single-instrument risk analytics.

mod confidence;
mod config;
mod horizon;
mod price_series;
mod return_series;

pub use confidence::ConfidenceLevel;
pub use config::RiskConfig;
pub use horizon::{Horizon, TRADING_DAYS_PER_YEAR};
pub use price_series::{PricePoint, PriceSeries};
pub use return_series::ReturnSeries;
