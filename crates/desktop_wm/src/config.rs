//! Typed configuration for the window registry and its input helpers.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::model::DEFAULT_BASE_Z_INDEX;

/// Default window (in milliseconds) within which a second click counts as a double click.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 300;

/// Tunables for a [`WindowManager`](crate::runtime::WindowManager) session.
///
/// Every field is optional in the TOML body:
///
/// ```toml
/// base_z_index = 100
/// double_click_ms = 300
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowManagerConfig {
    /// Seed for the z-index high-water mark; the first focused window gets `base_z_index + 1`.
    pub base_z_index: u64,
    /// Double-click window used by the desktop shell.
    pub double_click_ms: u64,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            base_z_index: DEFAULT_BASE_Z_INDEX,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
        }
    }
}

impl WindowManagerConfig {
    /// Parses and validates a TOML body.
    pub fn from_toml_str(body: &str) -> ConfigResult<Self> {
        Self::parse(body, PathBuf::from("<inline>"))
    }

    /// Reads, parses and validates the TOML file at `path`.
    ///
    /// Missing files, unreadable files and parse failures are all reported as [`ConfigError`].
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let body = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&body, path.to_path_buf())
    }

    /// Like [`load`](Self::load), but falls back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "no window manager config, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }

    fn parse(body: &str, path: PathBuf) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(body).map_err(|source| ConfigError::Parse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.base_z_index == u64::MAX {
            return Err(ConfigError::Invalid(
                "base_z_index leaves no room to allocate stacking values".to_string(),
            ));
        }
        if self.double_click_ms == 0 {
            return Err(ConfigError::Invalid(
                "double_click_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
