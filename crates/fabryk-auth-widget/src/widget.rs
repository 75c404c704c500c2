//! The identity widget boundary.
//!
//! The widget is an opaque third-party component. This crate only relies on
//! three capabilities: presenting it, listening for its `authenticated`
//! event, and asking it for the profile behind an identity token.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BoxError, Result};

/// Profile attributes returned by the identity provider.
pub type Profile = Map<String, Value>;

/// Listener invoked each time the widget emits `authenticated`.
///
/// The payload is `None` when the widget completes without authentication
/// data.
pub type AuthenticatedListener = Box<dyn FnMut(Option<AuthenticationResult>) + Send>;

/// Callback handed to [`Widget::get_user_info`].
///
/// `Ok(None)` means the provider answered without a profile.
pub type UserInfoCallback =
    Box<dyn FnOnce(std::result::Result<Option<Profile>, BoxError>) + Send>;

/// Data the widget emits alongside a successful `authenticated` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationResult {
    /// The identity token, if the widget supplied one.
    #[serde(rename = "idToken", default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    /// Any other fields the widget attached (access token, expiry, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthenticationResult {
    /// Create a result carrying only an identity token.
    pub fn with_id_token(id_token: impl Into<String>) -> Self {
        Self {
            id_token: Some(id_token.into()),
            extra: Map::new(),
        }
    }

    /// The identity token, if present and non-empty.
    pub fn usable_token(&self) -> Option<&str> {
        self.id_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Capability set of the third-party identity widget.
pub trait Widget: Send + Sync + 'static {
    /// Present the widget UI.
    fn show(&self);

    /// Register a listener for the `authenticated` event.
    ///
    /// The widget may fire the listener any number of times. Dropping the
    /// listener without firing it signals that the widget has gone away.
    fn on_authenticated(&self, listener: AuthenticatedListener);

    /// Look up the profile for `id_token`, reporting through `callback`.
    fn get_user_info(&self, id_token: &str, callback: UserInfoCallback);
}

/// Async source of widget instances.
///
/// Whether instances are cached or built fresh is up to the implementation.
/// Any `Fn() -> Future<Output = Result<Arc<dyn Widget>>>` closure is a factory.
pub trait WidgetFactory: Send + Sync + 'static {
    /// Obtain a widget instance.
    fn create(&self) -> Pin<Box<dyn Future<Output = Result<Arc<dyn Widget>>> + Send + '_>>;
}

impl<F, Fut> WidgetFactory for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Arc<dyn Widget>>> + Send + 'static,
{
    fn create(&self) -> Pin<Box<dyn Future<Output = Result<Arc<dyn Widget>>> + Send + '_>> {
        Box::pin(self())
    }
}
