// File: crates/chart-core/src/geometry.rs
// Summary: Frame sizing and lightweight pixel geometry.

use crate::types::{Insets, MAX_FRAME_WIDTH};

/// Content area size in pixels, excluding margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Derive a frame from the container's parent width and the viewport.
    /// Width is capped at [`MAX_FRAME_WIDTH`]; height keeps the viewport aspect.
    pub fn from_viewport(parent_width: f32, viewport_width: f32, viewport_height: f32) -> Self {
        let width = parent_width.min(MAX_FRAME_WIDTH).max(0.0);
        let height = if viewport_width > 0.0 {
            width * viewport_height / viewport_width
        } else {
            0.0
        };
        Self { width, height }
    }

    /// Outer document size once margins are added.
    pub fn outer(&self, insets: &Insets) -> (f32, f32) {
        (self.width + insets.hsum() as f32, self.height + insets.vsum() as f32)
    }
}

/// Axis-aligned rectangle in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
