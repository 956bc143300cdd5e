use serde::Deserialize;

use crate::reporter::{ReporterBuilder, DEFAULT_PORT};
use crate::security::SecurityLevel;

/// File-backed reporter settings.
///
/// ```toml
/// collector_host = "collectd.internal"
/// collector_port = 25826
/// source_host = "web-01"
/// security_level = "sign"
/// username = "agent"
/// password = "secret"
/// interval_secs = 60
/// ```
#[derive(Debug, Deserialize)]
pub struct ReporterConfig {
    pub collector_host: Option<String>,
    #[serde(default = "default_collector_port")]
    pub collector_port: u16,
    pub source_host: Option<String>,
    #[serde(default)]
    pub security_level: SecurityLevel,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Reporting period handed to each cycle's batch by the scheduler.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_collector_port() -> u16 {
    DEFAULT_PORT
}

fn default_interval_secs() -> u64 {
    60
}

impl ReporterConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Seeds a [`ReporterBuilder`] with these settings. The protocol plugin
    /// and clock still come from the caller.
    pub fn builder(&self) -> ReporterBuilder {
        let mut builder = ReporterBuilder::default()
            .collector_port(self.collector_port)
            .security_level(self.security_level)
            .username(self.username.clone())
            .password(self.password.clone());
        if let Some(host) = &self.collector_host {
            builder = builder.collector_host(host.clone());
        }
        if let Some(host) = &self.source_host {
            builder = builder.source_host(host.clone());
        }
        builder
    }
}
