// File: crates/chart-core/src/downsample.rs
// Summary: LTTB thinning for long static feeds.

use crate::sample::Sample;

/// Largest-Triangle-Three-Buckets over `(epoch seconds, value)`.
/// Returns the indices of at most `threshold` samples; first and last are
/// always kept and the result is in ascending order.
pub fn lttb_indices(samples: &[Sample], threshold: usize) -> Vec<usize> {
    let n = samples.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return (0..n).collect(); }
    if threshold == 1 { return vec![0]; }

    let xy = |i: usize| (samples[i].epoch_secs(), samples[i].value());
    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut picked = Vec::with_capacity(threshold);
    picked.push(0);

    let mut a = 0usize;
    for i in 0..(threshold - 2) {
        let start = (1.0 + (i as f64) * bucket_size).floor() as usize;
        let end = ((1.0 + ((i + 1) as f64) * bucket_size).floor() as usize).min(n - 1);

        // centroid of the following bucket
        let next_end = ((1.0 + ((i + 2) as f64) * bucket_size).floor() as usize).min(n - 1);
        let rs = end.max(1);
        let re = next_end.max(rs + 1).min(n);
        let (mut cx, mut cy) = (0.0f64, 0.0f64);
        for k in rs..re {
            let (x, y) = xy(k);
            cx += x;
            cy += y;
        }
        let cnt = (re - rs).max(1) as f64;
        cx /= cnt;
        cy /= cnt;

        let (ax, ay) = xy(a);
        let mut best = start;
        let mut best_area = -1.0f64;
        for k in start..end.max(start + 1) {
            let (x, y) = xy(k);
            let area = ((ax - x) * (cy - ay) - (ax - cx) * (y - ay)).abs();
            if area > best_area {
                best_area = area;
                best = k;
            }
        }
        picked.push(best);
        a = best;
    }

    picked.push(n - 1);
    picked
}

/// Thin `samples` to at most `max_points`, cloning the survivors.
pub fn lttb(samples: &[Sample], max_points: usize) -> Vec<Sample> {
    lttb_indices(samples, max_points)
        .into_iter()
        .map(|i| samples[i].clone())
        .collect()
}
