// File: crates/chart-live/tests/live.rs
// Purpose: Tick cadence, malformed-sample skipping, cancellation and async static load
// on a paused tokio clock.

use std::time::Duration;

use chart_core::{
    ChartError, ChartOptions, Frame, LineChart, Page, Sample, SampleSource, SlidingWindow, TickParams, UniformSource,
};
use chart_live::{open_static, spawn, start, LiveError, TickStats};
use chrono::{DateTime, TimeZone, Utc};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// Replays fixed values; `None` yields a malformed sample.
struct Scripted {
    values: Vec<Option<f64>>,
    at: DateTime<Utc>,
}

impl Scripted {
    fn new(values: Vec<Option<f64>>) -> Self {
        Self { values, at: t0() + chrono::Duration::seconds(10) }
    }
}

impl SampleSource for Scripted {
    fn pull_one(&mut self, label: &str) -> chart_core::Result<Sample> {
        self.at = self.at + chrono::Duration::seconds(1);
        let v = if self.values.is_empty() { Some(0.0) } else { self.values.remove(0) };
        Sample::try_new(label, self.at, v.unwrap_or(f64::NAN))
    }
}

fn chart(page: &Page, values: &[f64]) -> LineChart {
    let history = values
        .iter()
        .enumerate()
        .map(|(i, &v)| Sample::try_new("FUN", t0() + chrono::Duration::seconds(i as i64), v).unwrap())
        .collect();
    LineChart::create(
        page.mount("main").unwrap(),
        Frame::new(300.0, 200.0),
        SlidingWindow::init(history).unwrap(),
        ChartOptions::default(),
    )
    .unwrap()
}

fn params() -> TickParams {
    TickParams::from_secs("FUN", 1, 3).unwrap()
}

#[tokio::test(start_paused = true)]
async fn ticks_once_per_frequency() {
    let page = Page::new("live").with_container("main");
    let handle = spawn(chart(&page, &[1.0, 2.0, 3.0]), Scripted::new(vec![Some(10.0), Some(11.0), Some(12.0)]), params());
    assert!(handle.is_live());

    // first tick fires one period after arming
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(handle.stats(), TickStats::default());

    tokio::time::sleep(Duration::from_millis(3_000)).await;
    assert_eq!(handle.stats(), TickStats { advanced: 3, skipped: 0 });

    let chart = handle.stop().await.unwrap();
    assert_eq!(chart.window().values(), vec![10.0, 11.0, 12.0]);
    assert_eq!(chart.y_domain(), (10.0, 12.0));
}

#[tokio::test(start_paused = true)]
async fn late_ticks_coalesce_instead_of_queueing() {
    let page = Page::new("live").with_container("main");
    let handle = spawn(chart(&page, &[1.0, 2.0, 3.0]), Scripted::new(vec![Some(7.0); 10]), params());
    // let the task register its first deadline before the clock jumps
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(5_500)).await;
    tokio::task::yield_now().await;
    assert_eq!(handle.stats(), TickStats { advanced: 1, skipped: 0 });

    // cadence resumes on the next period boundary, not in a burst
    tokio::time::sleep(Duration::from_millis(1_000)).await;
    assert_eq!(handle.stats().advanced, 2);

    let chart = handle.stop().await.unwrap();
    assert_eq!(chart.window().values(), vec![3.0, 7.0, 7.0]);
}

#[tokio::test(start_paused = true)]
async fn malformed_samples_are_skipped() {
    let page = Page::new("live").with_container("main");
    let handle = spawn(chart(&page, &[1.0, 2.0, 3.0]), Scripted::new(vec![Some(5.0), None, Some(6.0)]), params());

    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(handle.stats(), TickStats { advanced: 2, skipped: 1 });

    let chart = handle.stop().await.unwrap();
    assert_eq!(chart.window().values(), vec![3.0, 5.0, 6.0]);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels_the_timer() {
    let page = Page::new("live").with_container("main");
    let mount = page.mount("main").unwrap();
    let handle = spawn(chart(&page, &[1.0, 2.0, 3.0]), Scripted::new(vec![Some(7.0); 10]), params());
    let before = mount.snapshot();
    drop(handle);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(mount.snapshot(), before);
}

#[tokio::test(start_paused = true)]
async fn stop_halts_redraws() {
    let page = Page::new("live").with_container("main");
    let mount = page.mount("main").unwrap();
    let handle = spawn(chart(&page, &[1.0, 2.0, 3.0]), Scripted::new(Vec::new()), params());
    tokio::time::sleep(Duration::from_millis(1_500)).await;
    let chart = handle.stop().await.unwrap();
    let frozen = mount.snapshot();
    assert_eq!(frozen.as_deref(), Some(chart.to_svg().as_str()));

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(mount.snapshot(), frozen);
}

#[tokio::test(start_paused = true)]
async fn start_backfills_then_goes_live() {
    let page = Page::new("live").with_container("#main-display-visual");
    let params = TickParams::from_secs("FUN", 1, 60).unwrap();
    let handle = start(
        page.mount("main-display-visual").unwrap(),
        Frame::new(900.0, 500.0),
        UniformSource::default(),
        params,
        ChartOptions::default(),
    )
    .unwrap();
    assert_eq!(handle.mount_id(), "main-display-visual");

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(handle.stats().advanced, 2);

    let chart = handle.stop().await.unwrap();
    assert_eq!(chart.window().len(), 60);
    let b = chart.bounds();
    assert!(b.min >= 99.0 && b.max < 102.0);
}

#[tokio::test]
async fn static_feed_loads_before_render() {
    let path = std::path::PathBuf::from("target/test_out/live_static.csv");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "date,value\n2023-6-15,101.4\n2023-6-16,99.2\n").unwrap();

    let page = Page::new("static").with_container("main");
    let mount = page.mount("main").unwrap();
    let chart = open_static(mount.clone(), Frame::new(400.0, 300.0), &path, &ChartOptions::default())
        .await
        .unwrap();
    assert_eq!(chart.samples().len(), 2);
    assert!(mount.snapshot().unwrap().contains("line-chart-path"));
}

#[tokio::test]
async fn missing_static_feed_is_load_failure_and_draws_nothing() {
    let page = Page::new("static").with_container("main");
    let mount = page.mount("main").unwrap();
    let err = open_static(mount.clone(), Frame::new(400.0, 300.0), "target/test_out/absent.csv", &ChartOptions::default())
        .await
        .err()
        .expect("load should fail");
    assert!(matches!(err, LiveError::Chart(ChartError::LoadFailure { .. })));
    assert!(mount.snapshot().is_none());
}
