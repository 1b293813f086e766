// File: crates/chart-core/src/chart.rs
// Summary: Streaming and static line charts: scales, domain recompute, scene redraw.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, TimeFormat};
use crate::downsample::lttb;
use crate::error::{ChartError, Result};
use crate::geometry::{Frame, Point};
use crate::page::MountPoint;
use crate::sample::Sample;
use crate::scale::{LinearScale, Scale, TimeScale};
use crate::scene::Scene;
use crate::series::{line_path, Interpolation};
use crate::source::SampleSource;
use crate::theme::Theme;
use crate::types::Insets;
use crate::window::{Bounds, SlidingWindow};

/// What the path's x coordinate is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XMode {
    /// Sample index over `[0, N-1]`; the axis still shows time.
    #[default]
    Index,
    /// Sample timestamp over `[oldest, newest]`.
    Time,
}

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub insets: Insets,
    pub theme: Theme,
    pub interpolation: Interpolation,
    pub x_mode: XMode,
    /// Static feeds longer than this are thinned with LTTB.
    pub max_points: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            theme: Theme::classic(),
            interpolation: Interpolation::Linear,
            x_mode: XMode::Index,
            max_points: 2_000,
        }
    }
}

/// Result of one timer tick.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// Window advanced; carries the evicted sample.
    Advanced(Sample),
    /// Sample rejected; window unchanged.
    Skipped,
}

/// Streaming chart over a fixed-size window.
pub struct LineChart {
    mount: MountPoint,
    window: SlidingWindow,
    options: ChartOptions,
    x_index: LinearScale,
    x_time: TimeScale,
    y: LinearScale,
    scene: Scene,
}

impl LineChart {
    /// Draw axes and path for the backfilled `window` into `mount`.
    pub fn create(mount: MountPoint, frame: Frame, window: SlidingWindow, options: ChartOptions) -> Result<Self> {
        if !(frame.width > 0.0 && frame.height > 0.0) {
            return Err(ChartError::Config(format!("frame must be positive, got {}x{}", frame.width, frame.height)));
        }
        let scene = Scene::new(frame, options.insets, options.theme, "line-graph", "line-graph-path").with_background();
        let mut chart = Self {
            mount,
            x_index: LinearScale::new((0.0, 0.0), (0.0, frame.width)),
            x_time: TimeScale::new(window.time_extent(), (0.0, frame.width)),
            y: LinearScale::new((0.0, 0.0), (frame.height, 0.0)),
            window,
            options,
            scene,
        };
        chart.redraw();
        tracing::info!(mount = chart.mount.id(), capacity = chart.window.capacity(), "line chart created");
        Ok(chart)
    }

    /// Recompute both domains from the window, rebuild axes and path, present.
    pub fn redraw(&mut self) {
        let n = self.window.len();
        let (t0, t1) = self.window.time_extent();
        let bounds = self.window.bounds();
        self.x_index.set_domain(0.0, n.saturating_sub(1) as f64);
        self.x_time.set_domain(t0, t1);
        self.y.set_domain(bounds.min, bounds.max);

        let points: Vec<Point> = self
            .window
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let x = match self.options.x_mode {
                    XMode::Index => self.x_index.map(i as f64),
                    XMode::Time => self.x_time.map(s.timestamp()),
                };
                Point::new(x, self.y.map(s.value()))
            })
            .collect();

        let x_axis = Axis::bottom_time(&self.x_time, TimeFormat::Clock).with_outer(0.0);
        let y_axis = Axis::left_linear(&self.y).with_outer(0.0);
        self.scene.update(x_axis, y_axis, line_path(&points, self.options.interpolation));
        self.mount.present(self.scene.to_svg());
        tracing::debug!(revision = self.scene.revision(), min = bounds.min, max = bounds.max, "redraw");
    }

    /// Append `sample`, evicting the oldest, then redraw.
    pub fn push(&mut self, sample: Sample) -> Sample {
        let evicted = self.window.advance(sample);
        self.redraw();
        evicted
    }

    /// One timer tick: pull, advance, redraw. Malformed samples are dropped.
    pub fn tick<S: SampleSource + ?Sized>(&mut self, source: &mut S, label: &str) -> TickOutcome {
        match source.pull_one(label) {
            Ok(sample) => TickOutcome::Advanced(self.push(sample)),
            Err(e) => {
                tracing::warn!(mount = self.mount.id(), error = %e, "dropping sample; window unchanged");
                TickOutcome::Skipped
            }
        }
    }

    pub fn window(&self) -> &SlidingWindow { &self.window }
    pub fn bounds(&self) -> Bounds { self.window.bounds() }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn mount(&self) -> &MountPoint { &self.mount }
    pub fn y_domain(&self) -> (f64, f64) { self.y.domain() }
    pub fn x_index_domain(&self) -> (f64, f64) { self.x_index.domain() }
    pub fn x_time_domain(&self) -> (chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>) { self.x_time.domain() }
    pub fn to_svg(&self) -> String { self.scene.to_svg() }
}

/// One-shot chart over a static feed; y starts at zero.
pub struct StaticChart {
    mount: MountPoint,
    samples: Vec<Sample>,
    scene: Scene,
}

impl StaticChart {
    pub fn create(mount: MountPoint, frame: Frame, samples: Vec<Sample>, options: &ChartOptions) -> Result<Self> {
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return Err(ChartError::EmptyHistory);
        };
        if options.max_points < 2 {
            return Err(ChartError::Config(format!("max_points must be at least 2, got {}", options.max_points)));
        }
        let label = first.label().to_string();

        let (mut t0, mut t1) = (first.timestamp(), last.timestamp());
        let mut vmax = f64::NEG_INFINITY;
        for s in &samples {
            t0 = t0.min(s.timestamp());
            t1 = t1.max(s.timestamp());
            vmax = vmax.max(s.value());
        }

        let x = TimeScale::new((t0, t1), (0.0, frame.width));
        let y = LinearScale::new((0.0, vmax), (frame.height, 0.0));

        let drawn = if samples.len() > options.max_points {
            tracing::info!(feed = %label, from = samples.len(), to = options.max_points, "thinning static feed");
            lttb(&samples, options.max_points)
        } else {
            samples.clone()
        };
        let points: Vec<Point> = drawn.iter().map(|s| Point::new(x.map(s.timestamp()), y.map(s.value()))).collect();

        let mut scene = Scene::new(frame, options.insets, options.theme, "line-chart", "line-chart-path");
        scene.update(
            Axis::bottom_time(&x, TimeFormat::Auto),
            Axis::left_linear(&y),
            line_path(&points, options.interpolation),
        );
        mount.present(scene.to_svg());
        tracing::info!(mount = mount.id(), feed = %label, rows = samples.len(), "static chart drawn");
        Ok(Self { mount, samples, scene })
    }

    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn mount(&self) -> &MountPoint { &self.mount }
    pub fn to_svg(&self) -> String { self.scene.to_svg() }
}
