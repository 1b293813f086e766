// File: crates/chart-core/src/source.rs
// Summary: Sample sources (synthetic uniform generator) and history backfill.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::{ChartError, Result};
use crate::sample::Sample;

/// Produces one sample per tick.
pub trait SampleSource: Send {
    fn pull_one(&mut self, label: &str) -> Result<Sample>;

    /// Value for a backfilled point stamped `at`. Sources without a notion of
    /// history reuse `pull_one` and restamp the result.
    fn pull_at(&mut self, label: &str, at: DateTime<Utc>) -> Result<Sample> {
        let s = self.pull_one(label)?;
        Sample::try_new(label, at, s.value())
    }
}

/// Ticker label plus cadence. `interval / frequency` is the window capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickParams {
    label: String,
    frequency: Duration,
    interval: Duration,
}

impl TickParams {
    pub fn new(label: impl Into<String>, frequency: Duration, interval: Duration) -> Result<Self> {
        if frequency.is_zero() {
            return Err(ChartError::InvalidTickParams("frequency must be positive".into()));
        }
        if interval < frequency {
            return Err(ChartError::InvalidTickParams(format!(
                "interval {interval:?} is shorter than frequency {frequency:?}"
            )));
        }
        Ok(Self { label: label.into(), frequency, interval })
    }

    /// Convenience constructor taking whole seconds.
    pub fn from_secs(label: impl Into<String>, frequency_secs: u64, interval_secs: u64) -> Result<Self> {
        Self::new(label, Duration::from_secs(frequency_secs), Duration::from_secs(interval_secs))
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn frequency(&self) -> Duration { self.frequency }
    pub fn interval(&self) -> Duration { self.interval }

    /// Number of samples held by a window fed at this cadence.
    pub fn capacity(&self) -> usize {
        (self.interval.as_nanos() / self.frequency.as_nanos()) as usize
    }
}

/// Uniform random values in `[base, base + spread)`, stamped with the wall clock.
#[derive(Clone, Copy, Debug)]
pub struct UniformSource {
    pub base: f64,
    pub spread: f64,
}

impl UniformSource {
    pub fn new(base: f64, spread: f64) -> Self {
        Self { base, spread }
    }

    fn draw(&self) -> f64 {
        if self.spread <= 0.0 {
            return self.base;
        }
        self.base + rand::rng().random_range(0.0..self.spread)
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(99.0, 3.0)
    }
}

impl SampleSource for UniformSource {
    fn pull_one(&mut self, label: &str) -> Result<Sample> {
        Sample::try_new(label, Utc::now(), self.draw())
    }

    fn pull_at(&mut self, label: &str, at: DateTime<Utc>) -> Result<Sample> {
        Sample::try_new(label, at, self.draw())
    }
}

/// Synthesise `params.capacity()` samples spaced `frequency` apart, the last
/// one stamped now. Each value is drawn independently. Fails with
/// `InvalidTickParams` when the backfill would reach outside the representable
/// time range.
pub fn pull_history<S: SampleSource + ?Sized>(source: &mut S, params: &TickParams) -> Result<Vec<Sample>> {
    let end = Utc::now();
    let step = chrono::Duration::from_std(params.frequency())
        .map_err(|e| ChartError::InvalidTickParams(e.to_string()))?;
    let n = params.capacity();
    let stamps = (0..n)
        .rev()
        .map(|back| {
            i32::try_from(back)
                .ok()
                .and_then(|back| step.checked_mul(back))
                .and_then(|offset| end.checked_sub_signed(offset))
                .ok_or_else(|| {
                    ChartError::InvalidTickParams(format!(
                        "backfill of {n} samples every {:?} overflows the time range",
                        params.frequency()
                    ))
                })
        })
        .collect::<Result<Vec<_>>>()?;
    stamps.into_iter().map(|at| source.pull_at(params.label(), at)).collect()
}
