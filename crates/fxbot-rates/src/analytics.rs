//! Trend classification and percentage change over rate sequences
//!
//! These helpers operate on plain rate slices in chronological order, so
//! they compose with [`crate::series::RateSeries::rates`] but do not depend
//! on it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RatesError, Result};

/// Qualitative direction of movement between the first and last rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Last rate is strictly above the first
    Rising,
    /// Last rate is strictly below the first
    Falling,
    /// First and last rates are equal
    Stable,
    /// Fewer than two observations, nothing to compare
    InsufficientData,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Rising => write!(f, "rising"),
            Trend::Falling => write!(f, "falling"),
            Trend::Stable => write!(f, "stable"),
            Trend::InsufficientData => write!(f, "insufficient data"),
        }
    }
}

/// Classify the overall direction of a chronological rate sequence
///
/// Only the first and last values matter; everything in between is ignored.
/// Sequences shorter than two observations classify as
/// [`Trend::InsufficientData`].
pub fn classify_trend(rates: &[f64]) -> Trend {
    if rates.len() < 2 {
        return Trend::InsufficientData;
    }
    let first = rates[0];
    let last = rates[rates.len() - 1];
    if last > first {
        Trend::Rising
    } else if last < first {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

/// Percentage change from the first to the last rate
///
/// Returns `Ok(None)` for sequences shorter than two observations. A zero
/// first rate has no meaningful relative change and yields an
/// [`RatesError::ArithmeticError`].
pub fn percentage_change(rates: &[f64]) -> Result<Option<f64>> {
    if rates.len() < 2 {
        return Ok(None);
    }
    let first = rates[0];
    let last = rates[rates.len() - 1];
    if first == 0.0 {
        return Err(RatesError::ArithmeticError(
            "percentage change over a zero base rate".to_string(),
        ));
    }
    Ok(Some((last - first) / first * 100.0))
}
