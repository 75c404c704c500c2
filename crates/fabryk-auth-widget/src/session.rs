//! One presentation cycle of the identity widget, exposed as a future.
//!
//! [`WidgetSession::present_and_await`] obtains a widget from the factory,
//! shows it, subscribes to `authenticated`, exchanges the identity token for
//! a profile and resolves with a [`SessionRecord`]. The widget's callbacks
//! are bridged into the future through oneshot channels, so the first
//! `authenticated` event is the only one that counts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::oneshot;

use crate::error::{AuthError, BoxError, Result};
use crate::record::SessionRecord;
use crate::state::{SessionState, StateHandle};
use crate::widget::{
    AuthenticatedListener, AuthenticationResult, Profile, Widget, WidgetFactory,
};

type EventPayload = Option<AuthenticationResult>;
type UserInfoResult = std::result::Result<Option<Profile>, BoxError>;
type EventSender = oneshot::Sender<EventPayload>;

/// Rejection reason recorded when a cycle's future is dropped mid-flight.
pub const CANCELLED: &str = "cancelled";

/// Drives presentation cycles of a widget obtained from a [`WidgetFactory`].
///
/// Only one cycle may be outstanding at a time; a concurrent call fails with
/// [`AuthError::PresentationInFlight`]. If the widget is dismissed without
/// ever emitting `authenticated`, [`present_and_await`](Self::present_and_await)
/// never completes. Use
/// [`present_and_await_with_timeout`](Self::present_and_await_with_timeout)
/// to bound the wait. Dropping the future of a presented cycle settles it as
/// `Rejected("cancelled")`.
pub struct WidgetSession {
    factory: Arc<dyn WidgetFactory>,
    state: StateHandle,
    in_flight: AtomicBool,
}

impl WidgetSession {
    /// Create a session backed by `factory`.
    pub fn new(factory: impl WidgetFactory) -> Self {
        Self::with_name("widget", factory)
    }

    /// Create a session with a name used in log output.
    pub fn with_name(name: impl Into<String>, factory: impl WidgetFactory) -> Self {
        Self {
            factory: Arc::new(factory),
            state: StateHandle::new(name),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Current state of the latest cycle.
    pub fn state(&self) -> SessionState {
        self.state.state()
    }

    /// Handle for observing state transitions.
    pub fn state_handle(&self) -> &StateHandle {
        &self.state
    }

    /// Present the widget and wait for a normalized session record.
    pub async fn present_and_await(&self) -> Result<SessionRecord> {
        let _guard = self.begin()?;
        let (listener, _handle, events) = event_channel();
        self.run(listener, events).await
    }

    /// Like [`present_and_await`](Self::present_and_await), bounded by `timeout`.
    ///
    /// On expiry the `authenticated` subscription is closed, so a late event
    /// is ignored, and [`AuthError::Timeout`] is returned.
    pub async fn present_and_await_with_timeout(
        &self,
        timeout: Duration,
    ) -> Result<SessionRecord> {
        let _guard = self.begin()?;
        let (listener, handle, events) = event_channel();

        match tokio::time::timeout(timeout, self.run(listener, events)).await {
            Ok(result) => result,
            Err(_) => {
                handle.close();
                let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                self.settle(Err(AuthError::Timeout { millis }))
            }
        }
    }

    fn begin(&self) -> Result<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AuthError::PresentationInFlight)?;
        self.state.set_state(SessionState::Idle);
        Ok(InFlight {
            flag: &self.in_flight,
            state: &self.state,
        })
    }

    async fn run(
        &self,
        listener: AuthenticatedListener,
        events: oneshot::Receiver<EventPayload>,
    ) -> Result<SessionRecord> {
        let widget = self.factory.create().await.inspect_err(|e| {
            log::warn!("Widget factory failed: {e}");
        })?;

        widget.show();
        self.state.set_state(SessionState::Presented);
        widget.on_authenticated(listener);

        let outcome = self.complete(widget.as_ref(), events).await;
        self.settle(outcome)
    }

    async fn complete(
        &self,
        widget: &dyn Widget,
        events: oneshot::Receiver<EventPayload>,
    ) -> Result<SessionRecord> {
        let payload = events.await.map_err(|_| AuthError::WidgetDetached)?;

        let auth = payload.ok_or(AuthError::AuthenticationIncomplete)?;
        let token = auth
            .usable_token()
            .ok_or(AuthError::AuthenticationIncomplete)?;

        log::debug!("Authenticated event received, fetching user info");

        let (tx, rx) = oneshot::channel();
        widget.get_user_info(
            token,
            Box::new(move |result: UserInfoResult| {
                // Receiver is gone only if the cycle was abandoned
                let _ = tx.send(result);
            }),
        );

        let profile = rx
            .await
            .map_err(|_| {
                AuthError::identity_lookup("user info callback dropped without a response")
            })?
            .map_err(|source| AuthError::IdentityLookupFailed { source })?;

        if profile.is_none() {
            log::debug!("User info returned no profile, record carries token only");
        }

        Ok(SessionRecord::build(profile.as_ref(), &auth))
    }

    fn settle(&self, outcome: Result<SessionRecord>) -> Result<SessionRecord> {
        match &outcome {
            Ok(_) => self.state.set_state(SessionState::Resolved),
            Err(e) => {
                log::warn!("Widget session rejected: {e}");
                self.state.set_state(SessionState::Rejected(e.to_string()));
            }
        }
        outcome
    }
}

impl std::fmt::Debug for WidgetSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetSession")
            .field("state", &self.state)
            .field("in_flight", &self.in_flight.load(Ordering::Acquire))
            .finish()
    }
}

/// Clears the in-flight flag when the cycle ends or its future is dropped.
///
/// A cycle dropped while the widget is presented is marked rejected, so
/// observers waiting for settlement are released.
struct InFlight<'a> {
    flag: &'a AtomicBool,
    state: &'a StateHandle,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.state.state().is_presented() {
            log::warn!("Widget session dropped before settling");
            self.state.set_state(SessionState::Rejected(CANCELLED.to_string()));
        }
        self.flag.store(false, Ordering::Release);
    }
}

/// Weak handle on the single-fire listener slot, used to unsubscribe.
struct ListenerHandle(Weak<Mutex<Option<EventSender>>>);

impl ListenerHandle {
    fn close(&self) {
        if let Some(slot) = self.0.upgrade()
            && let Ok(mut sender) = slot.lock()
        {
            sender.take();
        }
    }
}

/// Build a single-fire `authenticated` listener.
///
/// The listener owns the only strong reference to the sender slot, so a
/// widget that drops it without firing closes the receiver.
fn event_channel() -> (
    AuthenticatedListener,
    ListenerHandle,
    oneshot::Receiver<EventPayload>,
) {
    let (tx, rx) = oneshot::channel();
    let slot = Arc::new(Mutex::new(Some(tx)));
    let handle = ListenerHandle(Arc::downgrade(&slot));

    let listener: AuthenticatedListener = Box::new(move |payload: EventPayload| {
        let sender = slot.lock().ok().and_then(|mut s| s.take());
        match sender {
            Some(tx) => {
                if tx.send(payload).is_err() {
                    log::debug!("Authenticated event arrived after the cycle was abandoned");
                }
            }
            None => log::debug!("Ignoring repeated authenticated event"),
        }
    });

    (listener, handle, rx)
}
