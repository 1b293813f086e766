// File: crates/chart-core/src/config.rs
// Summary: TOML configuration for frame, theme and tick parameters.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::{ChartOptions, XMode};
use crate::error::{ChartError, Result};
use crate::geometry::Frame;
use crate::series::Interpolation;
use crate::source::{TickParams, UniformSource};
use crate::theme;
use crate::types::{HEIGHT, WIDTH};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicklineConfig {
    pub chart: ChartSection,
    pub live: LiveSection,
    pub page: PageSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSection {
    pub width: f32,
    pub height: f32,
    pub theme: String,
    pub interpolation: Interpolation,
    pub x_mode: XMode,
    pub max_points: usize,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: "classic".into(),
            interpolation: Interpolation::Linear,
            x_mode: XMode::Index,
            max_points: 2_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveSection {
    pub ticker: String,
    pub frequency_secs: u64,
    pub interval_secs: u64,
    /// Lower end of the generated value range.
    pub base: f64,
    /// Width of the generated value range.
    pub spread: f64,
}

impl Default for LiveSection {
    fn default() -> Self {
        Self { ticker: "FUN".into(), frequency_secs: 1, interval_secs: 60, base: 99.0, spread: 3.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSection {
    pub title: String,
    pub mount: String,
}

impl Default for PageSection {
    fn default() -> Self {
        Self { title: "Dashboard".into(), mount: "main-display-visual".into() }
    }
}

impl TicklineConfig {
    pub fn frame(&self) -> Frame {
        Frame::new(self.chart.width, self.chart.height)
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            theme: theme::find(&self.chart.theme),
            interpolation: self.chart.interpolation,
            x_mode: self.chart.x_mode,
            max_points: self.chart.max_points,
            ..ChartOptions::default()
        }
    }

    pub fn tick_params(&self) -> Result<TickParams> {
        TickParams::from_secs(&self.live.ticker, self.live.frequency_secs, self.live.interval_secs)
    }

    pub fn source(&self) -> UniformSource {
        UniformSource::new(self.live.base, self.live.spread)
    }
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<TicklineConfig> {
    toml::from_str(raw).map_err(|e| ChartError::Config(format!("TOML parse error: {e}")))
}

/// Load configuration from a TOML file. Returns defaults if the file doesn't
/// exist so a chart always has sensible settings.
pub fn load(path: impl AsRef<Path>) -> Result<TicklineConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!("Config file not found at '{}'; using defaults.", path.display());
        return Ok(TicklineConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ChartError::Config(format!("cannot read '{}': {e}", path.display())))?;
    parse(&raw)
}

/// Default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("tickline").join("tickline.toml")
}
