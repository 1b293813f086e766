// File: crates/chart-core/src/scene.rs
// Summary: Retained chart scene (background, two axes, one line) and its SVG serialisation.
// Notes:
// - A redraw replaces the axes and the line only; the background node and
//   document frame are built once and kept.

use std::fmt::Write;

use crate::axis::{Axis, Orient};
use crate::geometry::{Frame, RectF};
use crate::series::{fmt_px, to_svg_d, PathCmd};
use crate::theme::Theme;
use crate::types::{Insets, TICK_PADDING};

#[derive(Clone, Debug)]
pub struct Scene {
    pub frame: Frame,
    pub insets: Insets,
    pub theme: Theme,
    /// Class on the root `<svg>` element.
    pub class: &'static str,
    /// Class on the line path.
    pub line_class: &'static str,
    background: Option<RectF>,
    x_axis: Axis,
    y_axis: Axis,
    line: Vec<PathCmd>,
    revision: u64,
}

impl Scene {
    pub fn new(frame: Frame, insets: Insets, theme: Theme, class: &'static str, line_class: &'static str) -> Self {
        Self {
            frame,
            insets,
            theme,
            class,
            line_class,
            background: None,
            x_axis: Axis::empty(Orient::Bottom),
            y_axis: Axis::empty(Orient::Left),
            line: Vec::new(),
            revision: 0,
        }
    }

    /// Add a content-area panel one pixel larger than the frame on each side.
    pub fn with_background(mut self) -> Self {
        self.background = Some(RectF::from_xywh(-1.0, -1.0, self.frame.width + 2.0, self.frame.height + 2.0));
        self
    }

    /// Replace axes and line geometry; bumps the revision.
    pub fn update(&mut self, x_axis: Axis, y_axis: Axis, line: Vec<PathCmd>) {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self.line = line;
        self.revision += 1;
    }

    pub fn background(&self) -> Option<RectF> { self.background }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn line(&self) -> &[PathCmd] { &self.line }
    /// Number of updates applied since construction.
    pub fn revision(&self) -> u64 { self.revision }

    /// Outer document size (frame plus margins).
    pub fn outer_size(&self) -> (f32, f32) { self.frame.outer(&self.insets) }

    pub fn to_svg(&self) -> String {
        let (w, h) = self.outer_size();
        let mut out = String::with_capacity(4096 + self.line.len() * 24);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" width="{}" height="{}">"#,
            self.class, fmt_px(w), fmt_px(h)
        );
        let _ = write!(out, r#"<g transform="translate({},{})">"#, self.insets.left, self.insets.top);
        if let Some(bg) = self.background {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" style="fill: {}"/>"#,
                fmt_px(bg.x), fmt_px(bg.y), fmt_px(bg.width), fmt_px(bg.height), self.theme.content.to_css()
            );
        }
        self.write_axis(&mut out, &self.x_axis, "x-axis");
        self.write_axis(&mut out, &self.y_axis, "y-axis");
        let _ = write!(
            out,
            r#"<path class="{}" fill="none" stroke="{}" stroke-width="{}" d="{}"/>"#,
            self.line_class,
            self.theme.line_stroke.to_css(),
            fmt_px(self.theme.line_width),
            to_svg_d(&self.line)
        );
        out.push_str("</g></svg>");
        out
    }

    fn write_axis(&self, out: &mut String, axis: &Axis, class: &str) {
        let stroke = self.theme.axis_line.to_css();
        let text = self.theme.tick_label.to_css();
        let inner = axis.tick_size_inner;
        let outer = axis.tick_size_outer;
        let spacing = inner.max(0.0) + TICK_PADDING;
        let (r0, r1) = axis.range;

        match axis.orient {
            Orient::Bottom => {
                let _ = write!(
                    out,
                    r#"<g class="{class}" transform="translate(0,{})" fill="none" font-size="10" font-family="sans-serif" text-anchor="middle">"#,
                    fmt_px(self.frame.height)
                );
                let _ = write!(
                    out,
                    r#"<path class="domain" stroke="{stroke}" d="M{},{}V0H{}V{}"/>"#,
                    fmt_px(r0), fmt_px(outer), fmt_px(r1), fmt_px(outer)
                );
                for t in &axis.ticks {
                    let _ = write!(
                        out,
                        r#"<g class="tick" transform="translate({},0)"><line stroke="{stroke}" y2="{}"/><text fill="{text}" y="{}" dy="0.71em">{}</text></g>"#,
                        fmt_px(t.offset), fmt_px(inner), fmt_px(spacing), escape_xml(&t.label)
                    );
                }
            }
            Orient::Left => {
                let _ = write!(
                    out,
                    r#"<g class="{class}" fill="none" font-size="10" font-family="sans-serif" text-anchor="end">"#
                );
                let _ = write!(
                    out,
                    r#"<path class="domain" stroke="{stroke}" d="M{},{}H0V{}H{}"/>"#,
                    fmt_px(-outer), fmt_px(r0), fmt_px(r1), fmt_px(-outer)
                );
                for t in &axis.ticks {
                    let _ = write!(
                        out,
                        r#"<g class="tick" transform="translate(0,{})"><line stroke="{stroke}" x2="{}"/><text fill="{text}" x="{}" dy="0.32em">{}</text></g>"#,
                        fmt_px(t.offset), fmt_px(-inner), fmt_px(-spacing), escape_xml(&t.label)
                    );
                }
            }
        }
        out.push_str("</g>");
    }
}

/// Escape text for element content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
