use crate::dispatch::SampleValue;
use crate::error::WriteError;
use crate::meta::MetaData;
use crate::security::SecurityLevel;
use crate::transport::{Transport, UdpTransport};
use crate::writer::{Endpoint, PacketWriter, ProtocolPlugin, WriterAuth};

/// Packet writer emitting collectd's plaintext `PUTVAL` form, one line per
/// sample:
///
/// ```text
/// PUTVAL web-01/app.requests/counter-count interval=60 1700000000:42
/// ```
///
/// Useful against line-oriented consumers and in demos. The plaintext form
/// carries no authentication, so [`TextProtocol`] only accepts security
/// level `none`.
#[derive(Debug, Default)]
pub struct TextWriter;

impl TextWriter {
    pub(crate) fn render(meta: &MetaData<'_>, value: SampleValue) -> Result<String, WriteError> {
        let (type_name, rendered) = match value {
            SampleValue::Counter(v) => ("counter", v.to_string()),
            SampleValue::GaugeLong(v) => ("gauge", v.to_string()),
            SampleValue::Gauge(v) => {
                if !v.is_finite() {
                    return Err(WriteError::Validation(format!(
                        "non-finite gauge value for '{}/{}'",
                        meta.plugin, meta.type_instance
                    )));
                }
                ("gauge", v.to_string())
            }
        };
        Ok(format!(
            "PUTVAL {}/{}/{}-{} interval={} {}:{}\n",
            meta.host,
            meta.plugin,
            type_name,
            meta.type_instance,
            meta.interval_secs,
            meta.timestamp_secs,
            rendered
        ))
    }
}

impl PacketWriter for TextWriter {
    fn write(
        &mut self,
        transport: &mut dyn Transport,
        meta: &MetaData<'_>,
        value: SampleValue,
    ) -> Result<(), WriteError> {
        let line = Self::render(meta, value)?;
        transport.send(line.as_bytes())?;
        Ok(())
    }
}

/// Plugin wiring [`UdpTransport`] and [`TextWriter`] together.
pub struct TextProtocol;

impl ProtocolPlugin for TextProtocol {
    fn create_transport(&self, endpoint: &Endpoint) -> anyhow::Result<Box<dyn Transport>> {
        Ok(Box::new(UdpTransport::new(
            endpoint.host.clone(),
            endpoint.port,
        )))
    }

    fn create_writer(&self, auth: WriterAuth<'_>) -> anyhow::Result<Box<dyn PacketWriter>> {
        if auth.security_level != SecurityLevel::None {
            anyhow::bail!(
                "the plaintext protocol cannot sign or encrypt (requested security level '{}')",
                auth.security_level
            );
        }
        Ok(Box::new(TextWriter))
    }
}
