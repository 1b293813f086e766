// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the sample/window/chart API.

pub mod axis;
pub mod chart;
pub mod config;
pub mod downsample;
pub mod error;
pub mod feed;
pub mod geometry;
pub mod grid;
pub mod page;
pub mod sample;
pub mod scale;
pub mod scene;
pub mod series;
pub mod source;
pub mod theme;
pub mod types;
pub mod window;

pub use axis::{Axis, TimeFormat};
pub use chart::{ChartOptions, LineChart, StaticChart, TickOutcome, XMode};
pub use config::TicklineConfig;
pub use error::{ChartError, Result};
pub use geometry::Frame;
pub use page::{MountPoint, Page, SidebarIntent, SidebarState};
pub use sample::Sample;
pub use scene::Scene;
pub use series::{Interpolation, PathCmd};
pub use source::{pull_history, SampleSource, TickParams, UniformSource};
pub use theme::{Rgba, Theme};
pub use window::{Bounds, SlidingWindow};
