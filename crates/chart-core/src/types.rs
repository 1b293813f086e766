// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (frame limits, margins, tick defaults).

/// Widest content frame derived from the viewport, in pixels.
pub const MAX_FRAME_WIDTH: f32 = 900.0;
/// Default content frame width in pixels.
pub const WIDTH: f32 = 900.0;
/// Default content frame height in pixels.
pub const HEIGHT: f32 = 500.0;

/// Target tick count for both axes.
pub const TICK_COUNT: usize = 10;
/// Inner tick length in pixels.
pub const TICK_SIZE: f32 = 6.0;
/// Gap between a tick and its label.
pub const TICK_PADDING: f32 = 3.0;

/// Screen margins around the content area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Fixed chart margins: top 10, right 30, bottom 30, left 60.
    fn default() -> Self {
        Self::new(60, 30, 10, 30)
    }
}
