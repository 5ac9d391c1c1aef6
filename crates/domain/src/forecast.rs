//! Daily forecast aggregation
//!
//! The provider returns a forecast sample every three hours. A daily view
//! takes one sample per block of `interval` samples, always at the same
//! offset within the block, so every day is shown at the same hour as the
//! first sample.
//!
//! # Examples
//!
//! ```
//! use domain::ForecastAggregator;
//!
//! let hours: Vec<u32> = (0..40).map(|i| i * 3).collect();
//! let days = ForecastAggregator::default().select(&hours);
//! assert_eq!(days, vec![&0, &24, &48, &72, &96]);
//! ```

/// Samples per day at a 3-hour spacing
pub const SAMPLES_PER_DAY: usize = 8;

/// Number of days in the daily view
pub const FORECAST_HORIZON_DAYS: usize = 5;

/// Reduces an ordered forecast series to at most one sample per day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastAggregator {
    interval: usize,
    horizon: usize,
}

impl Default for ForecastAggregator {
    fn default() -> Self {
        Self {
            interval: SAMPLES_PER_DAY,
            horizon: FORECAST_HORIZON_DAYS,
        }
    }
}

impl ForecastAggregator {
    /// Create an aggregator; an interval of zero is treated as one
    #[must_use]
    pub fn new(interval: usize, horizon: usize) -> Self {
        Self {
            interval: interval.max(1),
            horizon,
        }
    }

    #[must_use]
    pub const fn interval(&self) -> usize {
        self.interval
    }

    #[must_use]
    pub const fn horizon(&self) -> usize {
        self.horizon
    }

    /// Pick samples at indices `0, interval, 2 * interval, ...`, at most
    /// `horizon` of them, in series order
    pub fn select<'a, T>(&self, series: &'a [T]) -> Vec<&'a T> {
        self.select_indexed(series)
            .into_iter()
            .map(|(_, sample)| sample)
            .collect()
    }

    /// Like [`select`](Self::select) but keeps each sample's series index
    pub fn select_indexed<'a, T>(&self, series: &'a [T]) -> Vec<(usize, &'a T)> {
        series
            .iter()
            .enumerate()
            .step_by(self.interval)
            .take(self.horizon)
            .collect()
    }

    /// Number of days [`select`](Self::select) yields for a series of `len`
    #[must_use]
    pub const fn day_count(&self, len: usize) -> usize {
        let available = len.div_ceil(self.interval);
        if available < self.horizon {
            available
        } else {
            self.horizon
        }
    }
}
