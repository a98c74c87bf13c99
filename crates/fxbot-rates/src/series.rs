//! Dated rate observations and ordered series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated exchange-rate observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Units of target currency per one unit of base currency
    pub rate: f64,
}

impl RatePoint {
    /// Create a new observation
    pub fn new(date: NaiveDate, rate: f64) -> Self {
        Self { date, rate }
    }
}

/// An ordered series of rate observations, oldest date first
///
/// Providers deliver history newest-first; use [`RateSeries::from_newest_first`]
/// to restore chronological order. Analytics and chart rendering assume
/// ascending dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSeries {
    points: Vec<RatePoint>,
}

impl RateSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from observations collected newest date first
    ///
    /// Reverses the input so the series runs oldest to newest.
    pub fn from_newest_first(mut points: Vec<RatePoint>) -> Self {
        points.reverse();
        Self { points }
    }

    /// Observations in chronological order
    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    /// Just the rate values, in chronological order
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate).collect()
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest observation, if any
    pub fn first(&self) -> Option<&RatePoint> {
        self.points.first()
    }

    /// Newest observation, if any
    pub fn last(&self) -> Option<&RatePoint> {
        self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_newest_first_restores_chronological_order() {
        let series = RateSeries::from_newest_first(vec![
            RatePoint::new(date(2024, 3, 3), 1.30),
            RatePoint::new(date(2024, 3, 2), 1.20),
            RatePoint::new(date(2024, 3, 1), 1.10),
        ]);

        assert_eq!(series.len(), 3);
        assert_eq!(series.first().unwrap().date, date(2024, 3, 1));
        assert_eq!(series.last().unwrap().date, date(2024, 3, 3));
        assert_eq!(series.rates(), vec![1.10, 1.20, 1.30]);
    }

    #[test]
    fn test_empty_series() {
        let series = RateSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.first().is_none());
        assert!(series.last().is_none());
        assert!(series.rates().is_empty());
    }

    #[test]
    fn test_single_point_series() {
        let series = RateSeries::from_newest_first(vec![RatePoint::new(date(2024, 3, 1), 0.85)]);
        assert_eq!(series.len(), 1);
        assert_eq!(series.first(), series.last());
    }
}
