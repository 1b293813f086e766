// File: crates/chart-core/src/window.rs
// Summary: Fixed-capacity FIFO window of samples and its value bounds.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::error::{ChartError, Result};
use crate::sample::Sample;

/// Value extrema of a window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// Ordered buffer of the most recent samples.
/// Invariant: `len() == capacity()` from construction on.
#[derive(Clone, Debug)]
pub struct SlidingWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SlidingWindow {
    /// Take the backfill as initial content; capacity is its length.
    pub fn init(history: Vec<Sample>) -> Result<Self> {
        if history.is_empty() {
            return Err(ChartError::EmptyHistory);
        }
        let capacity = history.len();
        Ok(Self { samples: VecDeque::from(history), capacity })
    }

    /// Evict the oldest sample and append `sample`. Returns the evicted one.
    pub fn advance(&mut self, sample: Sample) -> Sample {
        // rotating by one is O(1) on a deque; the old front lands in the last slot
        self.samples.rotate_left(1);
        let last = self.capacity - 1;
        std::mem::replace(&mut self.samples[last], sample)
    }

    /// Min/max over the current contents, recomputed on every call.
    pub fn bounds(&self) -> Bounds {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for s in &self.samples {
            min = min.min(s.value());
            max = max.max(s.value());
        }
        Bounds { min, max }
    }

    /// `(oldest, newest)` timestamps.
    pub fn time_extent(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.oldest().timestamp(), self.newest().timestamp())
    }

    pub fn oldest(&self) -> &Sample { &self.samples[0] }
    pub fn newest(&self) -> &Sample { &self.samples[self.samples.len() - 1] }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn capacity(&self) -> usize { self.capacity }
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample> + '_ { self.samples.iter() }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(Sample::value).collect()
    }
}
