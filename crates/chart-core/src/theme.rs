// File: crates/chart-core/src/theme.rs
// Summary: Chart color themes, backend-neutral (SVG and skia both consume them).

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS color: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Whole-document background (outside the content area).
    pub background: Rgba,
    /// Content-area fill behind the line.
    pub content: Rgba,
    pub axis_line: Rgba,
    pub tick_label: Rgba,
    pub line_stroke: Rgba,
    pub line_width: f32,
}

impl Theme {
    /// Grey content panel with a steelblue line.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Rgba::rgb(255, 255, 255),
            content: Rgba::rgb(0xea, 0xea, 0xea),
            axis_line: Rgba::rgb(0, 0, 0),
            tick_label: Rgba::rgb(0, 0, 0),
            line_stroke: Rgba::rgb(70, 130, 180), // steelblue
            line_width: 1.5,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            content: Rgba::rgb(28, 28, 32),
            axis_line: Rgba::rgb(180, 180, 190),
            tick_label: Rgba::rgb(235, 235, 245),
            line_stroke: Rgba::rgb(64, 160, 255),
            line_width: 1.5,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            content: Rgba::rgb(240, 240, 244),
            axis_line: Rgba::rgb(60, 60, 70),
            tick_label: Rgba::rgb(20, 20, 30),
            line_stroke: Rgba::rgb(32, 120, 200),
            line_width: 1.5,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
