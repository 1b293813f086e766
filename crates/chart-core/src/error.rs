// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy shared by every chart instance.

use std::path::Path;

use thiserror::Error;

/// Errors raised while loading, sampling or mounting a chart.
/// All of them are local to one chart instance.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Static feed missing or unparsable. Terminal for that chart.
    #[error("failed to load feed '{source_name}': {reason}")]
    LoadFailure { source_name: String, reason: String },

    /// Sample with a non-finite value or an unusable timestamp.
    #[error("malformed sample: {0}")]
    MalformedSample(String),

    /// Mount point id is not registered on the page.
    #[error("render target '{0}' is not present on the page")]
    RenderTargetMissing(String),

    #[error("invalid tick parameters: {0}")]
    InvalidTickParams(String),

    /// A window cannot be initialised from an empty backfill.
    #[error("window history is empty")]
    EmptyHistory,

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ChartError {
    pub fn load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LoadFailure { source_name: source_name.into(), reason: reason.into() }
    }

    pub fn load_path(path: &Path, reason: impl Into<String>) -> Self {
        Self::load(path.display().to_string(), reason)
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
