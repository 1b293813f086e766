// File: crates/chart-core/src/scale.rs
// Summary: Linear (value/index) and time scales mapping a domain onto a pixel range.

use chrono::{DateTime, Utc};

use crate::grid::{nice_ticks, time_ticks, TimeStep};

/// Common scale operations. Scales are created once per chart; only the
/// domain changes afterwards.
pub trait Scale {
    type Domain: Copy;

    fn map(&self, v: Self::Domain) -> f32;
    fn set_domain(&mut self, lo: Self::Domain, hi: Self::Domain);
    fn domain(&self) -> (Self::Domain, Self::Domain);
    fn range(&self) -> (f32, f32);
}

/// Affine map from `[d0, d1]` to `[r0, r1]`. A degenerate domain maps every
/// input to the midpoint of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            return (self.r0 + self.r1) * 0.5;
        }
        let t = (v - self.d0) / span;
        self.r0 + (t as f32) * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let rspan = self.r1 - self.r0;
        if rspan == 0.0 {
            return self.d0;
        }
        self.d0 + ((px - self.r0) / rspan) as f64 * (self.d1 - self.d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.d0, self.d1, count)
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    fn map(&self, v: f64) -> f32 { self.to_px(v) }
    fn set_domain(&mut self, lo: f64, hi: f64) {
        self.d0 = lo;
        self.d1 = hi;
    }
    fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    fn range(&self) -> (f32, f32) { (self.r0, self.r1) }
}

/// Time scale; maps instants by their millisecond offset into the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f32, f32)) -> Self {
        let mut s = Self { inner: LinearScale::new((0.0, 0.0), range), start: domain.0, end: domain.1 };
        s.set_domain(domain.0, domain.1);
        s
    }

    #[inline]
    pub fn to_px(&self, t: DateTime<Utc>) -> f32 {
        self.inner.to_px(t.timestamp_millis() as f64)
    }

    /// Calendar-aligned ticks and the step that produced them.
    pub fn ticks(&self, count: usize) -> (Vec<DateTime<Utc>>, TimeStep) {
        time_ticks(self.start, self.end, count)
    }
}

impl Scale for TimeScale {
    type Domain = DateTime<Utc>;

    fn map(&self, t: DateTime<Utc>) -> f32 { self.to_px(t) }
    fn set_domain(&mut self, lo: DateTime<Utc>, hi: DateTime<Utc>) {
        self.start = lo;
        self.end = hi;
        self.inner.set_domain(lo.timestamp_millis() as f64, hi.timestamp_millis() as f64);
    }
    fn domain(&self) -> (DateTime<Utc>, DateTime<Utc>) { (self.start, self.end) }
    fn range(&self) -> (f32, f32) { self.inner.range() }
}
