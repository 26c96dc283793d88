//! Core traits for the Tailrisk library.
//!
//! This module defines the abstraction over external market-data suppliers:
//!
//! - [`PriceSource`]: Trait for retrieving historical closing prices

use chrono::NaiveDate;

use crate::error::CoreResult;
use crate::types::PriceSeries;

/// Trait for historical closing-price suppliers.
///
/// The engine never retrieves data itself; a supplier (HTTP client, file
/// reader, test fixture) implements this trait and the engine consumes the
/// resulting [`PriceSeries`] as immutable input.
///
/// # Errors
///
/// Implementations surface every retrieval failure (unknown ticker, empty
/// date range, network error) as [`crate::CoreError::DataUnavailable`].
/// The engine treats such a failure as fatal input and propagates it
/// unmodified; retry policy belongs to the supplier.
pub trait PriceSource: Send + Sync {
    /// Returns daily closing prices for `ticker` over `[start, end]`,
    /// ordered by date.
    fn closing_prices(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> CoreResult<PriceSeries>;
}
