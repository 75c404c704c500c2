//! Host-facing facade over the widget session and logout configuration.

use std::time::Duration;

use serde_json::Value;

use crate::error::Result;
use crate::logout::{LogoutConfig, OriginProvider};
use crate::record::SessionRecord;
use crate::session::WidgetSession;
use crate::state::SessionState;
use crate::widget::WidgetFactory;

/// Entry point for host applications.
///
/// The logout return URL is computed once, at construction, from the host
/// configuration and the current origin.
#[derive(Debug)]
pub struct WidgetAuth {
    session: WidgetSession,
    logout_config: LogoutConfig,
    logout_return_to_url: String,
}

impl WidgetAuth {
    /// Create the facade from a widget factory, host configuration and origin.
    pub fn new(
        factory: impl WidgetFactory,
        config: &Value,
        origin: &impl OriginProvider,
    ) -> Self {
        let logout_config = LogoutConfig::from_value(config);
        let logout_return_to_url = logout_config.resolve(&origin.current_origin());
        log::debug!("Logout return URL resolved to {logout_return_to_url}");

        Self {
            session: WidgetSession::with_name("auth", factory),
            logout_config,
            logout_return_to_url,
        }
    }

    /// Present the widget and wait for a session record.
    pub async fn present_and_await(&self) -> Result<SessionRecord> {
        self.session.present_and_await().await
    }

    /// Present the widget, giving up after `timeout`.
    pub async fn present_and_await_with_timeout(
        &self,
        timeout: Duration,
    ) -> Result<SessionRecord> {
        self.session.present_and_await_with_timeout(timeout).await
    }

    /// Where to send the user after logout.
    pub fn logout_return_to_url(&self) -> &str {
        &self.logout_return_to_url
    }

    /// Logout settings read from the host configuration.
    pub fn logout_config(&self) -> &LogoutConfig {
        &self.logout_config
    }

    /// State of the most recent presentation cycle.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// The underlying session.
    pub fn session(&self) -> &WidgetSession {
        &self.session
    }
}
