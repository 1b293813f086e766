// File: crates/chart-core/src/sample.rs
// Summary: Immutable time-series sample validated at construction.

use chrono::{DateTime, Utc};

use crate::error::{ChartError, Result};

/// One observation of a labelled series.
/// Invariant: `value` is finite. Fields are read-only after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    label: String,
    timestamp: DateTime<Utc>,
    value: f64,
}

impl Sample {
    /// Build a sample, rejecting NaN and infinite values.
    pub fn try_new(label: impl Into<String>, timestamp: DateTime<Utc>, value: f64) -> Result<Self> {
        let label = label.into();
        if !value.is_finite() {
            return Err(ChartError::MalformedSample(format!(
                "{label} at {timestamp}: value {value} is not finite"
            )));
        }
        Ok(Self { label, timestamp, value })
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
    pub fn value(&self) -> f64 { self.value }

    /// Timestamp as fractional seconds since the epoch.
    pub fn epoch_secs(&self) -> f64 {
        self.timestamp.timestamp_millis() as f64 / 1000.0
    }
}
