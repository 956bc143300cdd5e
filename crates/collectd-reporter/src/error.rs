use crate::security::SecurityLevel;

/// Errors raised while building a reporter.
///
/// This is the crate's only visible error surface: once a
/// [`crate::Reporter`] exists, reporting cycles never return errors and
/// failures are observable through logs alone.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A signing or encrypting security level was requested without a
    /// username.
    #[error("Reporter: username is required for security level '{0}'")]
    MissingUsername(SecurityLevel),

    /// A signing or encrypting security level was requested without a
    /// password.
    #[error("Reporter: password is required for security level '{0}'")]
    MissingPassword(SecurityLevel),

    /// No protocol plugin was configured on the builder.
    #[error("Reporter: a protocol plugin is required")]
    MissingProtocol,

    /// The protocol plugin rejected the configuration while creating the
    /// transport or the packet writer.
    #[error("Reporter: protocol setup failed: {0}")]
    Protocol(anyhow::Error),
}

/// A failed sample write, logged by the reporter and isolated to the one
/// sample that caused it.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The sample could not be encoded (for example a non-finite gauge
    /// value).
    #[error("Reporter: invalid sample: {0}")]
    Validation(String),

    /// The transport failed while sending the encoded sample.
    #[error("Reporter: I/O error: {0}")]
    Io(#[from] std::io::Error),
}
