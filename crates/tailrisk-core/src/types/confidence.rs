//! Confidence level newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A VaR confidence level in the open interval (0, 1).
///
/// The left-tail probability mass of interest is `alpha = 1 - level`:
/// a 95% confidence level asks for the 5% quantile of the return
/// distribution.
///
/// # Example
///
/// ```rust
/// use tailrisk_core::types::ConfidenceLevel;
///
/// let level = ConfidenceLevel::new(0.95)?;
/// assert!((level.alpha() - 0.05).abs() < 1e-12);
/// # Ok::<(), tailrisk_core::CoreError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// The conventional 95% default.
    pub const DEFAULT: Self = Self(0.95);

    /// Creates a confidence level, validating it lies strictly in (0, 1).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidParameter` for values outside the open
    /// interval or non-finite values.
    pub fn new(level: f64) -> CoreResult<Self> {
        if !level.is_finite() || level <= 0.0 || level >= 1.0 {
            return Err(CoreError::invalid_parameter(format!(
                "confidence level must be in (0, 1), got {level}"
            )));
        }
        Ok(Self(level))
    }

    /// Returns the confidence level (e.g. 0.95).
    #[must_use]
    pub fn level(&self) -> f64 {
        self.0
    }

    /// Returns the left-tail probability `alpha = 1 - level`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = CoreError;

    fn try_from(level: f64) -> CoreResult<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> f64 {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
