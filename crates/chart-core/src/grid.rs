// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" linear steps and calendar time steps).

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

/// Step of 1, 2 or 5 times a power of ten giving about `count` ticks over
/// `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if count == 0 || span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    let raw = span / count as f64;
    let power = raw.log10().floor();
    let mag = 10f64.powf(power);
    let err = raw / mag;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * mag
}

/// Multiples of [`tick_step`] lying inside `[min, max]`, ascending.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if lo == hi {
        return vec![lo];
    }
    let step = tick_step(lo, hi, count);
    if step <= 0.0 {
        return Vec::new();
    }
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    // multiply rather than accumulate to keep 0.1-style steps exact-ish
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Calendar-aware time tick interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeStep {
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Months(u32),
    Years(i32),
}

impl TimeStep {
    const LADDER: [TimeStep; 20] = [
        TimeStep::Seconds(1),
        TimeStep::Seconds(5),
        TimeStep::Seconds(15),
        TimeStep::Seconds(30),
        TimeStep::Minutes(1),
        TimeStep::Minutes(5),
        TimeStep::Minutes(15),
        TimeStep::Minutes(30),
        TimeStep::Hours(1),
        TimeStep::Hours(3),
        TimeStep::Hours(6),
        TimeStep::Hours(12),
        TimeStep::Days(1),
        TimeStep::Days(2),
        TimeStep::Days(7),
        TimeStep::Months(1),
        TimeStep::Months(3),
        TimeStep::Years(1),
        TimeStep::Years(5),
        TimeStep::Years(10),
    ];

    /// Nominal length in seconds (months as 30 days, years as 365).
    pub fn approx_secs(&self) -> i64 {
        match *self {
            TimeStep::Seconds(n) => n,
            TimeStep::Minutes(n) => n * 60,
            TimeStep::Hours(n) => n * 3_600,
            TimeStep::Days(n) => n * 86_400,
            TimeStep::Months(n) => n as i64 * 30 * 86_400,
            TimeStep::Years(n) => n as i64 * 365 * 86_400,
        }
    }

    /// Smallest step producing at most `count` ticks across `span_secs`.
    pub fn for_span(span_secs: f64, count: usize) -> TimeStep {
        let target = span_secs / count.max(1) as f64;
        Self::LADDER
            .iter()
            .copied()
            .find(|s| s.approx_secs() as f64 >= target)
            .unwrap_or(TimeStep::Years(10))
    }

    /// First aligned instant at or after `t`.
    fn ceil(&self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match *self {
            TimeStep::Seconds(_) | TimeStep::Minutes(_) | TimeStep::Hours(_) | TimeStep::Days(_) => {
                let step = self.approx_secs() * 1_000;
                let ms = t.timestamp_millis();
                let aligned = ms.div_euclid(step) * step;
                let aligned = if aligned < ms { aligned + step } else { aligned };
                Utc.timestamp_millis_opt(aligned).single()
            }
            TimeStep::Months(n) => {
                let mut d = first_of_month(t.year(), t.month())?;
                while d < t || (d.month0() % n) != 0 {
                    d = add_months(d, 1)?;
                }
                Some(d)
            }
            TimeStep::Years(n) => {
                let mut year = t.year();
                loop {
                    let d = first_of_month(year, 1)?;
                    if d >= t && year % n == 0 {
                        return Some(d);
                    }
                    year += 1;
                }
            }
        }
    }

    fn next(&self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match *self {
            TimeStep::Months(n) => add_months(t, n),
            TimeStep::Years(n) => add_months(t, n as u32 * 12),
            _ => Some(t + Duration::seconds(self.approx_secs())),
        }
    }
}

fn first_of_month(year: i32, month: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

fn add_months(t: DateTime<Utc>, n: u32) -> Option<DateTime<Utc>> {
    let total = t.year() * 12 + t.month0() as i32 + n as i32;
    first_of_month(total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

/// Aligned tick instants inside `[start, end]` and the step used.
pub fn time_ticks(start: DateTime<Utc>, end: DateTime<Utc>, count: usize) -> (Vec<DateTime<Utc>>, TimeStep) {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let span = (hi - lo).num_milliseconds() as f64 / 1000.0;
    let step = TimeStep::for_span(span, count);
    let mut out = Vec::new();
    let mut cur = step.ceil(lo);
    while let Some(t) = cur {
        if t > hi {
            break;
        }
        out.push(t);
        cur = step.next(t);
    }
    (out, step)
}
