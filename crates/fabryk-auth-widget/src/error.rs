//! Auth-specific error types.

/// Boxed error produced by a widget (profile lookup, factory failure).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for widget authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while presenting the widget and building a session.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AuthError {
    /// The widget reported completion without a usable identity token.
    #[error("authentication incomplete: widget completed without an identity token")]
    AuthenticationIncomplete,

    /// A token was obtained but the profile lookup failed.
    #[error("identity lookup failed: {source}")]
    IdentityLookupFailed {
        /// Error reported by the widget's user-info callback.
        #[source]
        source: BoxError,
    },

    /// The caller-imposed deadline expired before the cycle settled.
    #[error("widget presentation timed out after {millis}ms")]
    Timeout {
        /// Deadline in milliseconds.
        millis: u64,
    },

    /// The widget factory could not produce an instance.
    #[error("widget unavailable: {message}")]
    WidgetUnavailable {
        /// What went wrong.
        message: String,
        /// Source error if available.
        #[source]
        source: Option<BoxError>,
    },

    /// The widget released the `authenticated` listener without firing it.
    #[error("widget detached before emitting an authenticated event")]
    WidgetDetached,

    /// A presentation cycle is already outstanding on this session.
    #[error("a widget presentation is already in flight")]
    PresentationInFlight,
}

impl AuthError {
    /// Build an [`AuthError::IdentityLookupFailed`] from any error.
    pub fn identity_lookup(source: impl Into<BoxError>) -> Self {
        AuthError::IdentityLookupFailed {
            source: source.into(),
        }
    }

    /// Build an [`AuthError::WidgetUnavailable`] with no underlying source.
    pub fn unavailable(message: impl Into<String>) -> Self {
        AuthError::WidgetUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Whether the caller may reasonably start a fresh cycle after this error.
    ///
    /// None of these are retried by the session itself.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            AuthError::IdentityLookupFailed { .. }
                | AuthError::Timeout { .. }
                | AuthError::WidgetUnavailable { .. }
                | AuthError::WidgetDetached
        )
    }
}
