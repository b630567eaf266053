use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Failures while loading a [`WindowManagerConfig`](crate::config::WindowManagerConfig).
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The config body is not valid TOML for the expected shape.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path (or `<inline>`) of the body that failed.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },
    /// The config parsed but a value is unusable.
    #[error("invalid window manager config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
