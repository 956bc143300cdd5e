//! Periodic metric export to a collectd server.
//!
//! On every reporting tick the [`Reporter`] takes a batch of metric
//! snapshots, opens the collector connection, translates each snapshot into
//! one or more plugin/type-instance addressed samples, and hands each sample
//! to the configured [`PacketWriter`]. Failures never reach the scheduler:
//! a failed connect drops the whole cycle, a failed write drops that one
//! sample, a failed disconnect is swallowed, and all of them are reported
//! through `tracing` only. Each cycle is independent, so a lossy cycle
//! self-heals on the next tick.
//!
//! ```no_run
//! use collectd_metrics::{MetricBatch, Snapshot};
//! use collectd_reporter::{Reporter, TextProtocol};
//!
//! let reporter = Reporter::builder()
//!     .collector_host("collectd.internal")
//!     .source_host("web-01")
//!     .protocol(TextProtocol)
//!     .build()
//!     .unwrap();
//!
//! let batch = MetricBatch {
//!     interval_secs: 60,
//!     metrics: vec![Snapshot::Counter { name: "app.requests".into(), count: 42 }],
//! };
//! reporter.report(&batch);
//! ```

pub mod clock;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod meta;
pub mod reporter;
pub mod security;
pub mod text;
pub mod transport;
pub mod writer;


pub use clock::{Clock, SystemClock};
pub use config::ReporterConfig;
pub use dispatch::{Sample, SampleValue};
pub use error::{ConfigError, WriteError};
pub use meta::MetaData;
pub use reporter::{Reporter, ReporterBuilder, DEFAULT_PORT};
pub use security::SecurityLevel;
pub use text::{TextProtocol, TextWriter};
pub use transport::{Transport, UdpTransport};
pub use writer::{Endpoint, PacketWriter, ProtocolPlugin, WriterAuth};
