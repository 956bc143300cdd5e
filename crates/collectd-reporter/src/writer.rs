use crate::dispatch::SampleValue;
use crate::error::WriteError;
use crate::meta::MetaData;
use crate::security::SecurityLevel;
use crate::transport::Transport;

/// Encodes one addressed sample and pushes it through the transport.
///
/// Implementations own the packet layout and any signing or encryption the
/// security level they were created with demands; the reporter never
/// inspects either.
pub trait PacketWriter: Send {
    /// Writes one sample.
    ///
    /// # Errors
    ///
    /// [`WriteError::Validation`] if the sample cannot be encoded,
    /// [`WriteError::Io`] if the transport fails.
    fn write(
        &mut self,
        transport: &mut dyn Transport,
        meta: &MetaData<'_>,
        value: SampleValue,
    ) -> Result<(), WriteError>;
}

/// Collector address handed to [`ProtocolPlugin::create_transport`].
///
/// The host may be absent; transports surface that at connect time.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub host: Option<String>,
    pub port: u16,
}

/// Credentials a packet writer is bound to when it is created.
#[derive(Debug, Clone, Copy)]
pub struct WriterAuth<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub security_level: SecurityLevel,
}

/// Factory for a protocol's transport/writer pair.
///
/// Registered on the builder, which validates credentials first and only
/// then asks the plugin for the collaborators. Nothing here may open a
/// network connection.
pub trait ProtocolPlugin {
    /// Creates the transport for the collector endpoint, unconnected.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be used with this protocol.
    fn create_transport(&self, endpoint: &Endpoint) -> anyhow::Result<Box<dyn Transport>>;

    /// Creates the packet writer bound to the given credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if this protocol cannot honor the requested
    /// security level.
    fn create_writer(&self, auth: WriterAuth<'_>) -> anyhow::Result<Box<dyn PacketWriter>>;
}
