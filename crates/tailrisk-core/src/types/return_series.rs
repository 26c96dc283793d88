//! Log-return series.

use serde::{Deserialize, Serialize};

/// An ordered series of daily log returns.
///
/// Entries are `ln(p[t] / p[t-1])` for adjacent valid prices; pairs with a
/// missing or non-positive price are excluded at derivation time, so every
/// entry here is a finite real number. The estimator crates consume this
/// type as a plain slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    returns: Vec<f64>,
}

impl ReturnSeries {
    /// Creates a return series from already-derived log returns.
    #[must_use]
    pub fn new(returns: Vec<f64>) -> Self {
        Self { returns }
    }

    /// Returns the number of return observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Returns the log returns in time order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.returns
    }

    /// Returns an iterator over the log returns.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.returns.iter()
    }
}

impl From<Vec<f64>> for ReturnSeries {
    fn from(returns: Vec<f64>) -> Self {
        Self::new(returns)
    }
}

impl<'a> IntoIterator for &'a ReturnSeries {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.returns.iter()
    }
}
