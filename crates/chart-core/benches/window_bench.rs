use chart_core::{ChartOptions, Frame, LineChart, Page, Sample, SlidingWindow};
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn history(n: usize) -> Vec<Sample> {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| Sample::try_new("B", t0 + Duration::seconds(i as i64), 100.0 + (i as f64 * 0.1).sin()).unwrap())
        .collect()
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for &n in &[60usize, 600, 6_000] {
        let mut w = SlidingWindow::init(history(n)).unwrap();
        let t0 = w.newest().timestamp();
        let mut i = 0i64;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                i += 1;
                let s = Sample::try_new("B", t0 + Duration::seconds(i), (i as f64).cos()).unwrap();
                black_box(w.advance(s));
                black_box(w.bounds());
            });
        });
    }
    group.finish();
}

fn bench_tick_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_redraw");
    for &n in &[60usize, 600] {
        let page = Page::new("bench").with_container("c");
        let window = SlidingWindow::init(history(n)).unwrap();
        let t0 = window.newest().timestamp();
        let mut chart = LineChart::create(page.mount("c").unwrap(), Frame::new(900.0, 500.0), window, ChartOptions::default()).unwrap();
        let mut i = 0i64;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                i += 1;
                let s = Sample::try_new("B", t0 + Duration::seconds(i), 100.0 + (i as f64).cos()).unwrap();
                black_box(chart.push(s));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance, bench_tick_redraw);
criterion_main!(benches);
