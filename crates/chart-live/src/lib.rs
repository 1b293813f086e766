// File: crates/chart-live/src/lib.rs
// Summary: Arms a repeating tick timer for a streaming chart and hands back a cancel handle.
// Notes:
// - Ticks run one at a time on a single task; late ticks are skipped, never queued.
// - Dropping the handle aborts the task so no timer outlives its chart.

use std::path::Path;

use chart_core::feed;
use chart_core::{
    pull_history, ChartError, ChartOptions, Frame, LineChart, MountPoint, SampleSource, SlidingWindow, StaticChart,
    TickOutcome, TickParams,
};
use thiserror::Error;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug, Error)]
pub enum LiveError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("tick task ended abnormally: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Running totals for one live chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub advanced: u64,
    pub skipped: u64,
}

/// Disposable handle to a live chart. `stop` cancels the timer and returns
/// the chart; dropping the handle cancels it too.
pub struct LiveHandle {
    mount_id: String,
    stop_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<LineChart>>,
    stats: watch::Receiver<TickStats>,
}

impl LiveHandle {
    pub fn mount_id(&self) -> &str { &self.mount_id }

    pub fn stats(&self) -> TickStats { *self.stats.borrow() }

    /// Whether the timer is still armed.
    pub fn is_live(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel the timer and wait for the in-flight tick, if any, to finish.
    pub async fn stop(mut self) -> Result<LineChart, LiveError> {
        if let Some(tx) = self.stop_tx.take() {
            // receiver gone means the task already ended; join below reports why
            let _ = tx.send(());
        }
        let task = self
            .task
            .take()
            .ok_or_else(|| ChartError::Config("live chart already stopped".into()))?;
        let chart = task.await?;
        tracing::info!(mount = %self.mount_id, stats = ?self.stats(), "live chart stopped");
        Ok(chart)
    }
}

impl Drop for LiveHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            tracing::debug!(mount = %self.mount_id, "live handle dropped; aborting tick task");
            task.abort();
        }
    }
}

/// Arm the tick timer for `chart`. The first tick fires one `frequency` from now.
/// Must be called from within a tokio runtime.
pub fn spawn<S>(mut chart: LineChart, mut source: S, params: TickParams) -> LiveHandle
where
    S: SampleSource + 'static,
{
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
    let (stats_tx, stats_rx) = watch::channel(TickStats::default());
    let mount_id = chart.mount().id().to_string();
    let period = params.frequency();

    let task = tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                biased;
                _ = &mut stop_rx => break,
                _ = ticker.tick() => {
                    let started = Instant::now();
                    let outcome = chart.tick(&mut source, params.label());
                    stats_tx.send_modify(|s| match outcome {
                        TickOutcome::Advanced(_) => s.advanced += 1,
                        TickOutcome::Skipped => s.skipped += 1,
                    });
                    let took = started.elapsed();
                    if took > period {
                        tracing::warn!(mount = chart.mount().id(), ?took, ?period, "tick overran its period; later ticks coalesce");
                    }
                }
            }
        }
        chart
    });

    tracing::info!(mount = %mount_id, ?period, "live chart armed");
    LiveHandle { mount_id, stop_tx: Some(stop_tx), task: Some(task), stats: stats_rx }
}

/// Backfill, draw and arm a streaming chart (Initialized, then Live at once).
pub fn start<S>(
    mount: MountPoint,
    frame: Frame,
    mut source: S,
    params: TickParams,
    options: ChartOptions,
) -> Result<LiveHandle, LiveError>
where
    S: SampleSource + 'static,
{
    let history = pull_history(&mut source, &params)?;
    let window = SlidingWindow::init(history)?;
    let chart = LineChart::create(mount, frame, window, options)?;
    Ok(spawn(chart, source, params))
}

/// Load a static feed asynchronously, then draw it once.
pub async fn open_static(
    mount: MountPoint,
    frame: Frame,
    path: impl AsRef<Path>,
    options: &ChartOptions,
) -> Result<StaticChart, LiveError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ChartError::load_path(path, e.to_string()))?;
    let samples = feed::parse_csv(&feed::feed_label(path), bytes.as_slice())?;
    Ok(StaticChart::create(mount, frame, samples, options)?)
}
