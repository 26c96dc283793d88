//! Price series and log-return derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ReturnSeries;
use crate::error::{CoreError, CoreResult};

/// A single daily closing-price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Closing price. May be non-positive or NaN when the supplier had a
    /// gap; such observations are excluded during return derivation.
    pub close: f64,
}

/// An ordered series of daily closing prices for one instrument.
///
/// Dates are strictly increasing; this is validated at construction.
/// Individual prices are not required to be valid (suppliers deliver gaps
/// as NaN or zero); invalid prices simply produce no return entry.
///
/// # Example
///
/// ```rust
/// use tailrisk_core::types::PriceSeries;
/// use chrono::NaiveDate;
///
/// let series = PriceSeries::new(vec![
///     (NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 100.0),
///     (NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 102.0),
/// ])?;
/// let returns = series.log_returns()?;
/// assert_eq!(returns.len(), 1);
/// # Ok::<(), tailrisk_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a price series from `(date, close)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPriceSeries` if dates are not strictly
    /// increasing, or `CoreError::InsufficientData` if fewer than 2 points
    /// are supplied.
    pub fn new(points: Vec<(NaiveDate, f64)>) -> CoreResult<Self> {
        if points.len() < 2 {
            return Err(CoreError::insufficient_data(2, points.len()));
        }
        for window in points.windows(2) {
            if window[1].0 <= window[0].0 {
                return Err(CoreError::InvalidPriceSeries {
                    reason: format!(
                        "dates must be strictly increasing ({} followed by {})",
                        window[0].0, window[1].0
                    ),
                });
            }
        }
        Ok(Self {
            points: points
                .into_iter()
                .map(|(date, close)| PricePoint { date, close })
                .collect(),
        })
    }

    /// Returns the number of price points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the price points in date order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Returns the first observation date.
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Returns the last observation date.
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Derives the daily log-return series.
    ///
    /// Each adjacent pair of valid prices contributes
    /// `ln(close[i+1] / close[i])`. A pair containing a non-positive or
    /// NaN price contributes nothing; the return is absent, not zero.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InsufficientData` if no valid adjacent pair
    /// remains.
    pub fn log_returns(&self) -> CoreResult<ReturnSeries> {
        let valid = |p: f64| p.is_finite() && p > 0.0;

        let returns: Vec<f64> = self
            .points
            .windows(2)
            .filter(|w| valid(w[0].close) && valid(w[1].close))
            .map(|w| (w[1].close / w[0].close).ln())
            .collect();

        if returns.is_empty() {
            return Err(CoreError::insufficient_data(2, 0));
        }

        Ok(ReturnSeries::new(returns))
    }
}
