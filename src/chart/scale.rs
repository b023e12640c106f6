//! Time and linear scales

use chrono::{Duration, NaiveDate};

/// Maps dates within an extent onto `[0, range]` pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    range: f64,
}

impl TimeScale {
    /// A degenerate extent (single date) maps everything to zero
    pub fn new(extent: (NaiveDate, NaiveDate), range: f64) -> Self {
        Self {
            start: extent.0,
            end: extent.1,
            range,
        }
    }

    pub fn position(&self, date: NaiveDate) -> f64 {
        let total = (self.end - self.start).num_days();
        if total <= 0 {
            return 0.0;
        }
        let offset = (date - self.start).num_days();
        offset as f64 / total as f64 * self.range
    }

    /// Evenly spaced tick dates from start to end, inclusive
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        if count == 0 {
            return Vec::new();
        }
        let total = (self.end - self.start).num_days();
        (0..=count)
            .map(|i| self.start + Duration::days(total * i as i64 / count as i64))
            .collect()
    }
}

/// Maps `[0, max]` onto `[range, 0]` pixels (inverted for canvas y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    max: f64,
    range: f64,
}

impl LinearScale {
    pub fn new(max: f64, range: f64) -> Self {
        Self { max, range }
    }

    pub fn position(&self, value: f64) -> f64 {
        if self.max == 0.0 {
            return self.range;
        }
        self.range * (1.0 - value / self.max)
    }

    /// Tick values from zero to max, inclusive
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        (0..=count)
            .map(|i| self.max * i as f64 / count as f64)
            .collect()
    }
}
