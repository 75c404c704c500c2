//! Host configuration loading.
//!
//! The host configuration is a TOML file read into a nested
//! [`serde_json::Value`] so it can be handed straight to
//! [`fabryk_auth_widget::logout::resolve`]. An `[auth]` table carries the
//! logout keys:
//!
//! ```toml
//! rootURL = "/app"
//!
//! [auth]
//! logoutReturnToPath = "/signed-out"
//! ```

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};

/// Directory name under the platform config dir.
pub const PROJECT_NAME: &str = "fabryk-auth";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "FABRYK_AUTH_CONFIG";

/// Default config file path (`<config dir>/fabryk-auth/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
}

/// Resolve the config path: explicit argument, then env var, then default.
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    default_config_path()
}

/// Parse TOML text into a host configuration mapping.
pub fn parse_host_config(content: &str) -> std::result::Result<Value, toml::de::Error> {
    toml::from_str(content)
}

/// Load the host configuration from `path`.
pub fn load_host_config(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    parse_host_config(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
}

/// Load the host configuration, tolerating a missing implicit file.
///
/// An explicitly named file must exist. When no file is named and the
/// resolved default does not exist, an empty mapping is returned so the
/// logout URL falls back to its default.
pub fn load(explicit: Option<&str>) -> Result<Value> {
    let path = resolve_config_path(explicit)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;

    if explicit.is_none() && !path.exists() {
        log::debug!("No config at {}, using empty configuration", path.display());
        return Ok(Value::Object(Default::default()));
    }

    log::debug!("Loading host configuration from {}", path.display());
    load_host_config(&path)
}
