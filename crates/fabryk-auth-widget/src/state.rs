//! Presentation cycle state tracking.
//!
//! Provides [`SessionState`] and [`StateHandle`] for observing where a
//! [`WidgetSession`](crate::WidgetSession) is in its current cycle.
//!
//! # Usage
//!
//! ```rust
//! use fabryk_auth_widget::state::{SessionState, StateHandle};
//!
//! let handle = StateHandle::new("login");
//! assert_eq!(handle.state(), SessionState::Idle);
//!
//! handle.set_state(SessionState::Presented);
//! handle.set_state(SessionState::Resolved);
//! assert!(handle.state().is_settled());
//! ```

use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

// ============================================================================
// SessionState
// ============================================================================

/// State of one presentation cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing presented yet.
    Idle,
    /// The widget has been shown and the cycle is waiting on it.
    Presented,
    /// A session record was produced.
    Resolved,
    /// The cycle failed.
    Rejected(String),
}

impl SessionState {
    /// Returns `true` while the widget is on screen and unsettled.
    pub fn is_presented(&self) -> bool {
        matches!(self, Self::Presented)
    }

    /// Returns `true` once the cycle has resolved or rejected.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected(_))
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Presented => write!(f, "presented"),
            Self::Resolved => write!(f, "resolved"),
            Self::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}

// ============================================================================
// StateHandle
// ============================================================================

/// Thread-safe handle for observing and updating cycle state.
///
/// Cheap to clone. Changes are broadcast to subscribers via a watch channel.
#[derive(Clone)]
pub struct StateHandle {
    inner: Arc<StateHandleInner>,
}

struct StateHandleInner {
    name: String,
    tx: watch::Sender<SessionState>,
}

impl StateHandle {
    /// Create a new handle. Initial state is [`SessionState::Idle`].
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(SessionState::Idle);
        Self {
            inner: Arc::new(StateHandleInner {
                name: name.into(),
                tx,
            }),
        }
    }

    /// Get the session name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the current state.
    pub fn state(&self) -> SessionState {
        self.inner.tx.borrow().clone()
    }

    /// Update the state and notify subscribers.
    pub fn set_state(&self, state: SessionState) {
        log::info!("Widget session '{}' -> {state}", self.inner.name);
        self.inner.tx.send_replace(state);
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.tx.subscribe()
    }

    /// Wait until the state satisfies `predicate`.
    ///
    /// Returns the matching state. Returns `None` if the handle is dropped
    /// first.
    pub async fn wait_for(
        &self,
        predicate: impl Fn(&SessionState) -> bool,
    ) -> Option<SessionState> {
        let mut rx = self.subscribe();
        let state = rx.wait_for(|s| predicate(s)).await.ok()?.clone();
        Some(state)
    }
}

impl fmt::Debug for StateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHandle")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
