//! Post-logout redirect URL resolution.
//!
//! The host configuration is a read-only nested mapping. Two keys under
//! `auth` are recognized:
//!
//! - `logoutReturnToURL`: absolute URL, used verbatim
//! - `logoutReturnToPath`: root-relative path, appended to the current origin
//!
//! When neither is set, the URL falls back to the origin plus the host's
//! top-level `rootURL`, or the bare origin when that is also unset.

use serde::Deserialize;
use serde_json::Value;

/// Source of the current page origin (`scheme://host[:port]`, no trailing slash).
pub trait OriginProvider {
    /// Return the current origin.
    fn current_origin(&self) -> String;
}

impl<F> OriginProvider for F
where
    F: Fn() -> String,
{
    fn current_origin(&self) -> String {
        self()
    }
}

/// A fixed origin, for hosts that know it up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticOrigin(pub String);

impl OriginProvider for StaticOrigin {
    fn current_origin(&self) -> String {
        self.0.clone()
    }
}

/// Logout settings extracted from the host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutConfig {
    /// Absolute URL to return to after logout.
    #[serde(default, rename = "logoutReturnToURL")]
    pub logout_return_to_url: Option<String>,
    /// Path on the current origin to return to after logout.
    #[serde(default)]
    pub logout_return_to_path: Option<String>,
    /// Application root path, used when neither of the above is set.
    #[serde(default, rename = "rootURL")]
    pub root_url: Option<String>,
}

impl LogoutConfig {
    /// Extract logout settings from a host configuration mapping.
    ///
    /// Values that are missing or not strings are treated as unset.
    pub fn from_value(config: &Value) -> Self {
        let string_at = |pointer: &str| {
            config
                .pointer(pointer)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            logout_return_to_url: string_at("/auth/logoutReturnToURL"),
            logout_return_to_path: string_at("/auth/logoutReturnToPath"),
            root_url: string_at("/rootURL"),
        }
    }

    /// Resolve the logout URL for the given origin.
    ///
    /// Checked in order:
    /// 1. `logoutReturnToURL`, returned unchanged
    /// 2. `logoutReturnToPath`, appended to `origin`
    /// 3. `rootURL` appended to `origin`, else `origin` alone
    pub fn resolve(&self, origin: &str) -> String {
        if let Some(url) = non_empty(&self.logout_return_to_url) {
            log::debug!("Logout URL from logoutReturnToURL");
            return url.to_string();
        }

        if let Some(path) = non_empty(&self.logout_return_to_path) {
            log::debug!("Logout URL from logoutReturnToPath '{path}'");
            return format!("{origin}{path}");
        }

        if let Some(root) = non_empty(&self.root_url) {
            log::debug!("Logout URL defaulting to rootURL '{root}'");
            return format!("{origin}{root}");
        }

        log::debug!("Logout URL defaulting to origin");
        origin.to_string()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Resolve the post-logout redirect URL from host configuration.
pub fn resolve(config: &Value, current_origin: &str) -> String {
    LogoutConfig::from_value(config).resolve(current_origin)
}
