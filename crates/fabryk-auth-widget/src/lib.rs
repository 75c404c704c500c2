//! Client-side authentication adapter for a third-party identity widget.
//!
//! Provides:
//! - [`Widget`] / [`WidgetFactory`] - The widget boundary (show, `authenticated`, user info)
//! - [`WidgetSession`] - Turns one widget presentation into an awaitable [`SessionRecord`]
//! - [`SessionRecord`] - Profile fields merged with the identity token
//! - [`logout::resolve`] - Post-logout redirect URL from host configuration
//! - [`WidgetAuth`] - Facade combining the above for host applications
//! - [`AuthError`] - Failure outcomes of a presentation cycle

mod auth;
mod error;
pub mod logout;
mod record;
mod session;
pub mod state;
mod widget;

#[cfg(test)]
mod proptests;

pub use auth::WidgetAuth;
pub use error::{AuthError, BoxError, Result};
pub use logout::{LogoutConfig, OriginProvider, StaticOrigin};
pub use record::{ID_TOKEN_KEY, SessionRecord};
pub use session::{CANCELLED, WidgetSession};
pub use state::{SessionState, StateHandle};
pub use widget::{
    AuthenticatedListener, AuthenticationResult, Profile, UserInfoCallback, Widget, WidgetFactory,
};
