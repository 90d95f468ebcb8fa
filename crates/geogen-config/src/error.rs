//! Errors raised while persisting planet settings.

/// Failures of [`Config`](crate::Config) load, save and reload.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// The config directory or `config.ron` could not be written.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// `config.ron` is not valid RON for [`Config`](crate::Config).
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// The in-memory settings could not be turned into RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
