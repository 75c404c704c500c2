//! Handler functions for CLI commands.
//!
//! Each handler returns the text to print so it can be tested without
//! capturing stdout.

use fabryk_auth_widget::{AuthenticationResult, Profile, SessionRecord, logout};

use crate::cli::Command;
use crate::config;
use crate::error::{Error, Result};

/// Dispatch a parsed command.
pub fn handle_command(config_path: Option<&str>, command: Command) -> Result<String> {
    match command {
        Command::LogoutUrl { origin } => cmd_logout_url(config_path, &origin),
        Command::SessionRecord { auth, profile } => {
            cmd_session_record(&auth, profile.as_deref())
        }
        Command::ConfigPath => cmd_config_path(config_path),
    }
}

/// Resolve the post-logout URL for `origin` from the host configuration.
pub fn cmd_logout_url(config_path: Option<&str>, origin: &str) -> Result<String> {
    let host_config = config::load(config_path)?;
    Ok(logout::resolve(&host_config, origin))
}

/// Build a session record from JSON-encoded widget data.
pub fn cmd_session_record(auth_json: &str, profile_json: Option<&str>) -> Result<String> {
    let auth: AuthenticationResult = serde_json::from_str(auth_json)?;
    let profile: Option<Profile> = profile_json.map(serde_json::from_str).transpose()?;

    if auth.usable_token().is_none() {
        log::warn!("Authentication data carries no usable idToken");
    }

    let record = SessionRecord::build(profile.as_ref(), &auth);
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<String> {
    config::resolve_config_path(config_path)
        .map(|p| p.display().to_string())
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
}
