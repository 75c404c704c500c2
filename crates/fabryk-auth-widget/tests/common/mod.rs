//! Stub widget and factory helpers for widget session integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use fabryk_auth_widget::{
    AuthError, AuthenticatedListener, AuthenticationResult, Profile, UserInfoCallback, Widget,
    WidgetFactory,
};
use serde_json::Value;

/// Shared, ordered log of calls made against the stub.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// In-memory widget whose behaviour is scripted per test.
///
/// With `fire_on_subscribe` set, the stub emits `authenticated` as soon as a
/// listener is registered; otherwise tests call
/// [`StubWidget::trigger_authenticated`] themselves.
pub struct StubWidget {
    profile: Option<Profile>,
    lookup_error: Option<String>,
    fire_on_subscribe: Option<Option<AuthenticationResult>>,
    drop_listener: bool,
    drop_callback: bool,
    hold_callback: bool,
    held_callbacks: Mutex<Vec<UserInfoCallback>>,
    listeners: Mutex<Vec<AuthenticatedListener>>,
    calls: CallLog,
}

impl StubWidget {
    /// A stub that never fires on its own and returns no profile.
    pub fn new() -> Self {
        Self {
            profile: None,
            lookup_error: None,
            fire_on_subscribe: None,
            drop_listener: false,
            drop_callback: false,
            hold_callback: false,
            held_callbacks: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Profile returned by `get_user_info`.
    pub fn with_profile(mut self, profile: Value) -> Self {
        self.profile = match profile {
            Value::Object(map) => Some(map),
            _ => None,
        };
        self
    }

    /// Make `get_user_info` report an error.
    pub fn failing_lookup(mut self, message: &str) -> Self {
        self.lookup_error = Some(message.to_string());
        self
    }

    /// Emit `authenticated` with `payload` whenever a listener subscribes.
    pub fn firing(mut self, payload: Option<AuthenticationResult>) -> Self {
        self.fire_on_subscribe = Some(payload);
        self
    }

    /// Drop listeners instead of keeping them.
    pub fn dropping_listener(mut self) -> Self {
        self.drop_listener = true;
        self
    }

    /// Drop user-info callbacks without calling them.
    pub fn dropping_callback(mut self) -> Self {
        self.drop_callback = true;
        self
    }

    /// Keep user-info callbacks without ever calling them.
    pub fn holding_callback(mut self) -> Self {
        self.hold_callback = true;
        self
    }

    /// Number of user-info callbacks held unanswered.
    pub fn held_callback_count(&self) -> usize {
        self.held_callbacks.lock().unwrap().len()
    }

    /// Emit `authenticated` to every registered listener.
    pub fn trigger_authenticated(&self, payload: Option<AuthenticationResult>) {
        let mut listeners = self.listeners.lock().unwrap();
        for listener in listeners.iter_mut() {
            listener(payload.clone());
        }
    }

    /// Number of listeners registered so far.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// Snapshot of the call log.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

impl Default for StubWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for StubWidget {
    fn show(&self) {
        self.record("show");
    }

    fn on_authenticated(&self, mut listener: AuthenticatedListener) {
        self.record("subscribe");
        if self.drop_listener {
            return;
        }
        if let Some(payload) = &self.fire_on_subscribe {
            listener(payload.clone());
        }
        self.listeners.lock().unwrap().push(listener);
    }

    fn get_user_info(&self, id_token: &str, callback: UserInfoCallback) {
        self.record(format!("get_user_info:{id_token}"));
        if self.drop_callback {
            return;
        }
        if self.hold_callback {
            self.held_callbacks.lock().unwrap().push(callback);
            return;
        }
        match &self.lookup_error {
            Some(message) => callback(Err(message.clone().into())),
            None => callback(Ok(self.profile.clone())),
        }
    }
}

/// Factory that hands out the same stub and logs each call as `create`.
pub fn factory_for(widget: &Arc<StubWidget>) -> impl WidgetFactory + use<> {
    let widget = Arc::clone(widget);
    move || {
        widget.record("create");
        let widget: Arc<dyn Widget> = widget.clone();
        async move { Ok::<_, AuthError>(widget) }
    }
}

/// Factory whose widget never arrives.
pub fn pending_factory() -> impl WidgetFactory {
    || std::future::pending::<Result<Arc<dyn Widget>, AuthError>>()
}

/// Wait until the stub has `count` listeners registered.
pub async fn wait_for_listeners(widget: &StubWidget, count: usize) {
    while widget.listener_count() < count {
        tokio::task::yield_now().await;
    }
}
