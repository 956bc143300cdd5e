//! Sends synthetic metric snapshots through a reporter on a fixed period.
//!
//! Useful for watching a collectd (or any line-oriented UDP listener) pick
//! up samples without wiring the reporter into a real application.

use std::env;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use collectd_metrics::{Distribution, MetricBatch, Snapshot};
use collectd_reporter::{ReporterConfig, TextProtocol};
use rand::Rng;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Options {
    config_path: String,
    /// 0 means run until interrupted.
    cycles: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config_path: "config/reporter.toml".to_string(),
            cycles: 0,
        }
    }
}

fn parse_options() -> Result<Options> {
    let mut options = Options::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                options.config_path = args.next().context("--config requires a path")?;
            }
            "--cycles" => {
                let value = args.next().context("--cycles requires a number")?;
                options.cycles = value.parse().context("--cycles requires a number")?;
            }
            "--help" | "-h" => {
                println!("Usage: mock-report [--config <path>] [--cycles <n>]");
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(options)
}

fn synthetic_batch(interval_secs: u64, cycle: u64) -> MetricBatch {
    let mut rng = rand::thread_rng();
    MetricBatch {
        interval_secs,
        metrics: vec![
            Snapshot::Counter {
                name: "app.requests".to_string(),
                count: cycle * 100 + rng.gen_range(0..100),
            },
            Snapshot::GaugeDouble {
                name: "app.cpu_load".to_string(),
                value: rng.gen_range(0.0..4.0),
            },
            Snapshot::GaugeLong {
                name: "app.open_files".to_string(),
                value: rng.gen_range(10..200),
            },
            Snapshot::Timed(Distribution {
                name: "app.request_time".to_string(),
                count: rng.gen_range(1..50),
                max: rng.gen_range(5..500),
                mean: rng.gen_range(1.0..100.0),
                total: rng.gen_range(100.0..5000.0),
            }),
        ],
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("collectd_reporter=info".parse()?),
        )
        .init();

    let options = parse_options()?;
    let config = ReporterConfig::load(&options.config_path)
        .with_context(|| format!("loading {}", options.config_path))?;
    let reporter = config.builder().protocol(TextProtocol).build()?;

    tracing::info!(
        host = reporter.host(),
        interval_secs = config.interval_secs,
        "mock reporter starting"
    );

    let mut cycle = 0u64;
    loop {
        cycle += 1;
        let batch = synthetic_batch(config.interval_secs, cycle);
        reporter.report(&batch);
        if options.cycles != 0 && cycle >= options.cycles {
            break;
        }
        thread::sleep(Duration::from_secs(config.interval_secs));
    }
    reporter.cleanup();
    Ok(())
}
