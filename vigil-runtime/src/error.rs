//! Error types for the display runtime

use vigil_core::ConfigError;

/// Errors surfaced by the runtime
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The command queue was full and the command was dropped
    #[error("Command queue full - command dropped")]
    QueueFull,

    /// The configuration failed validation
    #[error("Invalid configuration: {0}")]
    Config(ConfigError),

    /// The configuration file could not be parsed
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for RuntimeError {
    fn from(e: ConfigError) -> Self {
        RuntimeError::Config(e)
    }
}
