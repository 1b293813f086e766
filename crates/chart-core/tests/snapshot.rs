// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic streaming chart after two pushes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, checks the document skeleton and hand-derived coordinates, then notes how to bless.

use chart_core::{ChartOptions, Frame, LineChart, Page, Sample, SlidingWindow};
use chrono::{Duration, TimeZone, Utc};

fn render_svg() -> String {
    let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let history = [100.2, 101.7, 99.4, 100.9, 101.1, 99.8]
        .iter()
        .enumerate()
        .map(|(i, &v)| Sample::try_new("FUN", t0 + Duration::seconds(i as i64 * 10), v).unwrap())
        .collect();
    let page = Page::new("snapshot").with_container("chart");
    let mut chart = LineChart::create(
        page.mount("chart").unwrap(),
        Frame::new(480.0, 240.0),
        SlidingWindow::init(history).unwrap(),
        ChartOptions::default(),
    )
    .expect("create chart");
    chart.push(Sample::try_new("FUN", t0 + Duration::seconds(60), 101.9).unwrap());
    chart.push(Sample::try_new("FUN", t0 + Duration::seconds(70), 99.1).unwrap());
    chart.to_svg()
}

#[test]
fn golden_streaming_chart() {
    let svg = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("streaming_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(svg, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        assert_skeleton(&svg);
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

/// Window after the pushes: values 99.4 100.9 101.1 99.8 101.9 99.1 at
/// 12:00:20..12:01:10, drawn into a 480x240 frame by sample index.
fn assert_skeleton(svg: &str) {
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="line-graph" width="570" height="280"><g transform="translate(60,10)"><rect x="-1" y="-1" width="482" height="242""#
    ), "{svg}");
    assert!(svg.ends_with("</g></svg>"));

    let x = svg.find(r#"<g class="x-axis" transform="translate(0,240)""#).expect("x axis group");
    let y = svg.find(r#"<g class="y-axis""#).expect("y axis group");
    let line = svg.find(r#"<path class="line-graph-path""#).expect("line path");
    assert!(x < y && y < line, "axes are drawn before the line");

    // 5 s steps from 12:00:20 to 12:01:10, then 0.2 steps from 99.2 to 101.8
    assert_eq!(svg[x..y].matches(r#"class="tick""#).count(), 11);
    assert_eq!(svg[y..line].matches(r#"class="tick""#).count(), 14);
    for label in [">12:00:20<", ">12:01:10<", ">99.2<", ">101.8<"] {
        assert!(svg.contains(label), "missing tick label {label}");
    }

    assert!(svg.contains(r#"d="M0,214.286L96,"#), "{svg}");
    assert!(svg.contains(r#"L384,0L480,240"/>"#), "{svg}");
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_svg(), render_svg());
}
