use std::sync::Mutex;

use collectd_metrics::MetricBatch;
use sysinfo::System;
use tracing::{debug, error, warn};

use crate::clock::{Clock, SystemClock};
use crate::dispatch;
use crate::error::{ConfigError, WriteError};
use crate::meta::MetaData;
use crate::security::SecurityLevel;
use crate::transport::Transport;
use crate::writer::{Endpoint, PacketWriter, ProtocolPlugin, WriterAuth};

/// Default collectd network port.
pub const DEFAULT_PORT: u16 = 25826;

const FALLBACK_HOST_NAME: &str = "localhost";

/// Reports metric snapshot batches to a collectd server, one connection per
/// cycle.
///
/// Built via [`Reporter::builder`]. [`Reporter::report`] is best effort: a
/// connect failure drops the whole cycle, a write failure drops that one
/// sample, a disconnect failure is swallowed, and every failure is visible
/// through `tracing` only. Misconfiguration is the one thing callers see,
/// and only at build time.
pub struct Reporter {
    host: String,
    clock: Box<dyn Clock>,
    pipeline: Mutex<Pipeline>,
}

struct Pipeline {
    transport: Box<dyn Transport>,
    writer: Box<dyn PacketWriter>,
}

impl Reporter {
    pub fn builder() -> ReporterBuilder {
        ReporterBuilder::default()
    }

    /// Runs one reporting cycle for `batch`.
    ///
    /// The transport and writer are guarded by a mutex: if a scheduler
    /// invokes this again while a previous cycle is still running, the new
    /// call logs a warning and returns without touching the connection.
    pub fn report(&self, batch: &MetricBatch) {
        let Ok(mut pipeline) = self.pipeline.try_lock() else {
            warn!("previous reporting cycle still running, skipping this one");
            return;
        };

        let epoch_secs = self.clock.now_millis() / 1000;
        debug!(metrics = batch.metrics.len(), "reporting metrics");

        if !pipeline.transport.is_connected() {
            if let Err(e) = pipeline.transport.connect() {
                warn!(error = %e, "failed to connect to collectd, dropping this cycle");
                Self::disconnect(pipeline.transport.as_mut());
                return;
            }
        }

        let Pipeline { transport, writer } = &mut *pipeline;
        for snapshot in &batch.metrics {
            let plugin = snapshot.name();
            for sample in dispatch::samples(snapshot) {
                let meta = MetaData {
                    host: &self.host,
                    timestamp_secs: epoch_secs,
                    interval_secs: batch.interval_secs,
                    plugin,
                    type_instance: sample.type_instance,
                };
                if let Err(e) = writer.write(transport.as_mut(), &meta, sample.value) {
                    match e {
                        WriteError::Validation(_) => {
                            warn!(plugin, error = %e, "failed to process metric");
                        }
                        WriteError::Io(_) => {
                            error!(plugin, error = %e, "failed to send metric to collectd");
                        }
                    }
                }
            }
        }

        Self::disconnect(pipeline.transport.as_mut());
    }

    /// Releases long-lived resources at scheduler shutdown. The connection
    /// is managed per cycle, so there is nothing to do.
    pub fn cleanup(&self) {}

    /// The source host samples are attributed to.
    pub fn host(&self) -> &str {
        &self.host
    }

    fn disconnect(transport: &mut dyn Transport) {
        if let Err(e) = transport.disconnect() {
            warn!(error = %e, "error disconnecting from collectd");
        }
    }

    fn resolve_host_name() -> String {
        host_or_fallback(System::host_name())
    }
}

/// Picks the resolved local host name, or the fixed fallback when
/// resolution fails or comes back empty. Called once at build time; a
/// transient failure here is not retried on later cycles.
pub(crate) fn host_or_fallback(resolved: Option<String>) -> String {
    match resolved {
        Some(name) if !name.is_empty() => name,
        _ => {
            error!("failed to look up local host name, falling back to '{FALLBACK_HOST_NAME}'");
            FALLBACK_HOST_NAME.to_string()
        }
    }
}

/// Accumulates reporter settings and validates them on [`build`].
///
/// Defaults: port 25826, security level `none`, empty credentials, the
/// system clock, and the local host name as the source host.
///
/// [`build`]: ReporterBuilder::build
pub struct ReporterBuilder {
    collector_host: Option<String>,
    collector_port: u16,
    source_host: Option<String>,
    security_level: SecurityLevel,
    username: String,
    password: String,
    clock: Box<dyn Clock>,
    protocol: Option<Box<dyn ProtocolPlugin>>,
}

impl Default for ReporterBuilder {
    fn default() -> Self {
        Self {
            collector_host: None,
            collector_port: DEFAULT_PORT,
            source_host: None,
            security_level: SecurityLevel::None,
            username: String::new(),
            password: String::new(),
            clock: Box::new(SystemClock),
            protocol: None,
        }
    }
}

impl ReporterBuilder {
    /// Sets the collectd host to send metrics to.
    pub fn collector_host(mut self, host: impl Into<String>) -> Self {
        self.collector_host = Some(host.into());
        self
    }

    /// Sets the collectd port. Defaults to 25826.
    pub fn collector_port(mut self, port: u16) -> Self {
        self.collector_port = port;
        self
    }

    /// Sets the host name samples are attributed to. Defaults to the local
    /// host name.
    pub fn source_host(mut self, host: impl Into<String>) -> Self {
        self.source_host = Some(host.into());
        self
    }

    /// Sets the security level for the connection to collectd.
    pub fn security_level(mut self, level: SecurityLevel) -> Self {
        self.security_level = level;
        self
    }

    /// Sets the username used when signing or encrypting.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the password used when signing or encrypting.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the clock cycle timestamps are read from. Defaults to the
    /// system clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Sets the protocol plugin that supplies the transport and packet
    /// writer.
    pub fn protocol(mut self, plugin: impl ProtocolPlugin + 'static) -> Self {
        self.protocol = Some(Box::new(plugin));
        self
    }

    /// Validates the configuration and constructs the reporter.
    ///
    /// Credentials are checked before anything else is created; no network
    /// I/O happens here. The transport comes back unconnected and is first
    /// used by the next reporting cycle.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingUsername`] or [`ConfigError::MissingPassword`]
    /// if a signing or encrypting security level lacks credentials,
    /// [`ConfigError::MissingProtocol`] if no protocol plugin was
    /// configured, and [`ConfigError::Protocol`] if the plugin rejects the
    /// configuration.
    pub fn build(self) -> Result<Reporter, ConfigError> {
        if self.security_level != SecurityLevel::None {
            if self.username.is_empty() {
                return Err(ConfigError::MissingUsername(self.security_level));
            }
            if self.password.is_empty() {
                return Err(ConfigError::MissingPassword(self.security_level));
            }
        }
        let plugin = self.protocol.ok_or(ConfigError::MissingProtocol)?;

        let endpoint = Endpoint {
            host: self.collector_host,
            port: self.collector_port,
        };
        let transport = plugin
            .create_transport(&endpoint)
            .map_err(ConfigError::Protocol)?;
        let writer = plugin
            .create_writer(WriterAuth {
                username: &self.username,
                password: &self.password,
                security_level: self.security_level,
            })
            .map_err(ConfigError::Protocol)?;

        let host = self.source_host.unwrap_or_else(Reporter::resolve_host_name);
        Ok(Reporter {
            host,
            clock: self.clock,
            pipeline: Mutex::new(Pipeline { transport, writer }),
        })
    }
}
