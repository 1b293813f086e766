// File: crates/chart-core/src/axis.rs
// Summary: Axis model (orientation, tick positions and labels) built from a scale.

use crate::grid::{tick_step, TimeStep};
use crate::scale::{LinearScale, Scale, TimeScale};
use crate::types::{TICK_COUNT, TICK_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// How time tick labels are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// `%H:%M:%S` regardless of step.
    #[default]
    Clock,
    /// Pick a format from the tick step (time of day, day, month or year).
    Auto,
}

impl TimeFormat {
    fn pattern(&self, step: TimeStep) -> &'static str {
        match self {
            TimeFormat::Clock => "%H:%M:%S",
            TimeFormat::Auto => match step {
                TimeStep::Seconds(_) => "%H:%M:%S",
                TimeStep::Minutes(_) | TimeStep::Hours(_) => "%H:%M",
                TimeStep::Days(_) => "%b %d",
                TimeStep::Months(_) => "%B",
                TimeStep::Years(_) => "%Y",
            },
        }
    }
}

/// One tick: pixel offset along the axis and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    /// Pixel extent of the domain line.
    pub range: (f32, f32),
    pub ticks: Vec<Tick>,
    pub tick_size_inner: f32,
    pub tick_size_outer: f32,
}

impl Axis {
    pub fn empty(orient: Orient) -> Self {
        Self { orient, range: (0.0, 0.0), ticks: Vec::new(), tick_size_inner: TICK_SIZE, tick_size_outer: TICK_SIZE }
    }

    /// Bottom axis over a time scale.
    pub fn bottom_time(scale: &TimeScale, format: TimeFormat) -> Self {
        let (instants, step) = scale.ticks(TICK_COUNT);
        let pattern = format.pattern(step);
        let ticks = instants
            .into_iter()
            .map(|t| Tick { offset: scale.to_px(t), label: t.format(pattern).to_string() })
            .collect();
        Self { orient: Orient::Bottom, range: scale.range(), ticks, ..Self::empty(Orient::Bottom) }
    }

    /// Left axis over a value scale.
    pub fn left_linear(scale: &LinearScale) -> Self {
        let (d0, d1) = scale.domain();
        let step = tick_step(d0.min(d1), d0.max(d1), TICK_COUNT);
        let ticks = scale
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|v| Tick { offset: scale.to_px(v), label: format_value(v, step) })
            .collect();
        Self { orient: Orient::Left, range: scale.range(), ticks, ..Self::empty(Orient::Left) }
    }

    /// Override the outer tick size (0 hides the domain end caps).
    pub fn with_outer(mut self, size: f32) -> Self {
        self.tick_size_outer = size;
        self
    }
}

/// Format `v` with just enough decimals for ticks `step` apart.
pub fn format_value(v: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let s = format!("{v:.decimals$}");
    // avoid "-0" style labels
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
