//! Metric snapshot types shared between metric producers and the reporter.
//!
//! A snapshot is an immutable point-in-time read of one metric's current
//! statistics, produced fresh for every reporting cycle by whatever owns the
//! metric computation. The reporter only consumes the fields exposed here;
//! how they are computed is the producer's business.

use serde::{Deserialize, Serialize};

/// Aggregated statistics of a value-recording metric.
///
/// Timers report the same shape: their samples are treated as a plain value
/// distribution of elapsed times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub name: String,
    pub count: u64,
    pub max: i64,
    pub mean: f64,
    pub total: f64,
}

/// A point-in-time read of one metric, tagged by kind.
///
/// The set of kinds is closed on purpose: the reporter matches on it
/// exhaustively, so adding a kind forces a deliberate update to the sample
/// mapping.
///
/// # Examples
///
/// ```
/// use collectd_metrics::Snapshot;
///
/// let snapshot = Snapshot::Counter { name: "app.requests".into(), count: 42 };
/// assert_eq!(snapshot.name(), "app.requests");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Snapshot {
    /// Monotonic event counter.
    Counter { name: String, count: u64 },
    /// Integer gauge reading.
    GaugeLong { name: String, value: i64 },
    /// Floating-point gauge reading.
    GaugeDouble { name: String, value: f64 },
    /// Distribution of recorded values.
    ValueDistribution(Distribution),
    /// Timer statistics, reported as the distribution of elapsed times.
    Timed(Distribution),
}

impl Snapshot {
    /// The metric name, used as the collectd plugin name when reported.
    pub fn name(&self) -> &str {
        match self {
            Snapshot::Counter { name, .. }
            | Snapshot::GaugeLong { name, .. }
            | Snapshot::GaugeDouble { name, .. } => name,
            Snapshot::ValueDistribution(d) | Snapshot::Timed(d) => &d.name,
        }
    }
}

/// One reporting cycle's worth of snapshots plus the period they cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricBatch {
    /// The reporting period in seconds; stamped onto every sample.
    pub interval_secs: u64,
    /// Snapshots in the order they should be reported.
    pub metrics: Vec<Snapshot>,
}
