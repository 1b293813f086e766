// File: crates/demo/src/main.rs
// Summary: Demo renders a static CSV feed or a live random-walk chart into a dashboard page.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chart_core::{config, Page, TickParams, TicklineConfig};
use chart_render_skia::SkiaRenderer;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tickline-demo", about = "Render live and static line charts")]
struct Cli {
    /// TOML config file (defaults to $XDG_CONFIG_HOME/tickline/tickline.toml).
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output directory for SVG/HTML/PNG files.
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Also rasterise the final chart to PNG.
    #[arg(long)]
    png: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a `date,value` CSV once.
    Static {
        path: PathBuf,
    },
    /// Stream synthetic samples into a sliding window.
    Live {
        #[arg(long)]
        ticker: Option<String>,
        /// Seconds between ticks.
        #[arg(long)]
        frequency: Option<u64>,
        /// Seconds of history kept in the window.
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many ticks (runs until Ctrl-C otherwise).
        #[arg(long)]
        ticks: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg_path = cli.config.clone().unwrap_or_else(config::default_path);
    let mut cfg = config::load(&cfg_path).with_context(|| format!("loading {}", cfg_path.display()))?;
    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;

    match cli.command {
        Command::Static { ref path } => run_static(&cli, &cfg, path).await,
        Command::Live { ref ticker, frequency, interval, ticks } => {
            if let Some(t) = ticker {
                cfg.live.ticker = t.clone();
            }
            if let Some(f) = frequency {
                cfg.live.frequency_secs = f;
            }
            if let Some(i) = interval {
                cfg.live.interval_secs = i;
            }
            run_live(&cli, &cfg, ticks).await
        }
    }
}

async fn run_static(cli: &Cli, cfg: &TicklineConfig, path: &Path) -> Result<()> {
    let page = Page::new(&cfg.page.title).with_container(&cfg.page.mount);
    let mount = page.mount(&cfg.page.mount)?;
    let chart = chart_live::open_static(mount, cfg.frame(), path, &cfg.chart_options())
        .await
        .with_context(|| format!("failed to chart '{}'", path.display()))?;
    println!("Loaded {} rows from {}", chart.samples().len(), path.display());

    let svg = cli.out.join("static_chart.svg");
    std::fs::write(&svg, chart.to_svg())?;
    println!("Wrote {}", svg.display());
    write_page(&cli.out, &page)?;
    if cli.png {
        write_png(&cli.out.join("static_chart.png"), chart.scene())?;
    }
    Ok(())
}

async fn run_live(cli: &Cli, cfg: &TicklineConfig, ticks: Option<u64>) -> Result<()> {
    let params: TickParams = cfg.tick_params()?;
    let page = Page::new(&cfg.page.title).with_container(&cfg.page.mount);
    let mount = page.mount(&cfg.page.mount)?;
    let svg = cli.out.join("live_chart.svg");

    let handle = chart_live::start(mount.clone(), cfg.frame(), cfg.source(), params.clone(), cfg.chart_options())?;
    println!(
        "Streaming {} every {:?} over {:?} ({} samples); writing {}",
        params.label(),
        params.frequency(),
        params.interval(),
        params.capacity(),
        svg.display()
    );

    let deadline = ticks.map(|n| run_deadline(params.frequency(), n)).transpose()?;
    let run_for = async {
        match deadline {
            Some(d) => tokio::time::sleep(d).await,
            None => std::future::pending::<()>().await,
        }
    };
    tokio::pin!(run_for);

    let mut flush = tokio::time::interval(params.frequency().max(Duration::from_millis(100)));
    loop {
        tokio::select! {
            _ = &mut run_for => break,
            res = tokio::signal::ctrl_c() => {
                res.context("listening for Ctrl-C")?;
                println!("Interrupted");
                break;
            }
            _ = flush.tick() => {
                if let Some(doc) = mount.snapshot() {
                    std::fs::write(&svg, doc)?;
                }
            }
        }
    }

    let chart = handle.stop().await?;
    std::fs::write(&svg, chart.to_svg())?;
    let b = chart.bounds();
    println!("Stopped; window holds {} samples in [{:.3}, {:.3}]", chart.window().len(), b.min, b.max);
    write_page(&cli.out, &page)?;
    if cli.png {
        write_png(&cli.out.join("live_chart.png"), chart.scene())?;
    }
    Ok(())
}

/// How long to stream for `ticks` ticks: half a period past the last one.
fn run_deadline(frequency: Duration, ticks: u64) -> Result<Duration> {
    u32::try_from(ticks)
        .ok()
        .and_then(|n| frequency.checked_mul(n))
        .and_then(|d| d.checked_add(frequency / 2))
        .with_context(|| format!("--ticks {ticks} at {frequency:?} per tick is too long to schedule"))
}

fn write_page(out: &Path, page: &Page) -> Result<()> {
    let html = out.join("dashboard.html");
    std::fs::write(&html, page.to_html()).with_context(|| format!("writing {}", html.display()))?;
    println!("Wrote {}", html.display());
    Ok(())
}

fn write_png(path: &Path, scene: &chart_core::Scene) -> Result<()> {
    SkiaRenderer::default().render_to_png(scene, path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_lands_between_ticks() {
        assert_eq!(run_deadline(Duration::from_secs(2), 3).unwrap(), Duration::from_secs(7));
    }

    #[test]
    fn oversized_tick_counts_are_rejected() {
        assert!(run_deadline(Duration::from_secs(1), u64::from(u32::MAX) + 1).is_err());
        assert!(run_deadline(Duration::from_secs(u64::MAX / 2), 4).is_err());
    }
}
