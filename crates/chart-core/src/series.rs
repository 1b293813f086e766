// File: crates/chart-core/src/series.rs
// Summary: Line geometry: path commands built from projected points.
// Notes:
// - `MonotoneX` follows the Fritsch–Carlson monotone cubic: the curve never
//   overshoots between two samples, so it stays inside the y domain.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Interpolation between consecutive points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    #[default]
    Linear,
    MonotoneX,
}

/// Path drawing command in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
}

/// Build path commands through `points` (assumed sorted by x for `MonotoneX`).
pub fn line_path(points: &[Point], interp: Interpolation) -> Vec<PathCmd> {
    let Some(&first) = points.first() else { return Vec::new() };
    let mut cmds = Vec::with_capacity(points.len());
    cmds.push(PathCmd::MoveTo(first));
    if points.len() == 1 {
        return cmds;
    }
    match interp {
        Interpolation::Linear => cmds.extend(points[1..].iter().map(|&p| PathCmd::LineTo(p))),
        Interpolation::MonotoneX if points.len() == 2 => cmds.push(PathCmd::LineTo(points[1])),
        Interpolation::MonotoneX => {
            let m = monotone_tangents(points);
            for i in 0..points.len() - 1 {
                let (p0, p1) = (points[i], points[i + 1]);
                let dx = (p1.x - p0.x) / 3.0;
                cmds.push(PathCmd::CubicTo(
                    Point::new(p0.x + dx, p0.y + dx * m[i]),
                    Point::new(p1.x - dx, p1.y - dx * m[i + 1]),
                    p1,
                ));
            }
        }
    }
    cmds
}

fn monotone_tangents(p: &[Point]) -> Vec<f32> {
    let n = p.len();
    let secant: Vec<f32> = p
        .windows(2)
        .map(|w| {
            let dx = w[1].x - w[0].x;
            if dx == 0.0 { 0.0 } else { (w[1].y - w[0].y) / dx }
        })
        .collect();

    let mut m = vec![0.0f32; n];
    m[0] = secant[0];
    m[n - 1] = secant[n - 2];
    for i in 1..n - 1 {
        let (a, b) = (secant[i - 1], secant[i]);
        m[i] = if a * b <= 0.0 { 0.0 } else { (a + b) * 0.5 };
    }

    // clamp so each segment stays monotone
    for i in 0..n - 1 {
        let d = secant[i];
        if d == 0.0 {
            m[i] = 0.0;
            m[i + 1] = 0.0;
            continue;
        }
        let a = m[i] / d;
        let b = m[i + 1] / d;
        let h = a.hypot(b);
        if h > 3.0 {
            let t = 3.0 / h;
            m[i] = t * a * d;
            m[i + 1] = t * b * d;
        }
    }
    m
}

/// Serialise commands to SVG path data.
pub fn to_svg_d(cmds: &[PathCmd]) -> String {
    use std::fmt::Write;
    let mut d = String::with_capacity(cmds.len() * 16);
    for c in cmds {
        let _ = match c {
            PathCmd::MoveTo(p) => write!(d, "M{},{}", fmt_px(p.x), fmt_px(p.y)),
            PathCmd::LineTo(p) => write!(d, "L{},{}", fmt_px(p.x), fmt_px(p.y)),
            PathCmd::CubicTo(a, b, p) => write!(
                d,
                "C{},{},{},{},{},{}",
                fmt_px(a.x), fmt_px(a.y), fmt_px(b.x), fmt_px(b.y), fmt_px(p.x), fmt_px(p.y)
            ),
        };
    }
    d
}

/// Pixel coordinate with at most three decimals and no trailing zeros.
pub fn fmt_px(v: f32) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
