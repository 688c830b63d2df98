//! In-memory collaborators for native unit tests.

use crate::api::analytics::AnalyticsApi;
use crate::config::Config;
use crate::dashboard::MountGuard;
use crate::session::{decode_stored_session, SessionStore};
use async_trait::async_trait;
use gcdl_shared::{DashboardStats, Result, Session};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use yew::Callback;

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_raw_session(raw: &str) -> Self {
        let store = Self::default();
        store.set(Config::SESSION_KEY, raw);
        store
    }

    pub fn with_session(session: &Session) -> Self {
        let store = Self::default();
        let raw = serde_json::to_string(session).expect("session serializes");
        store.set(Config::SESSION_KEY, &raw);
        store.set(Config::TOKEN_KEY, "test-token");
        store
    }

    pub fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Result<Option<Session>> {
        decode_stored_session(self.entries.borrow().get(Config::SESSION_KEY).map(String::as_str))
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// Analytics double returning a fixed result and counting calls.
pub struct MockAnalytics {
    result: Result<DashboardStats>,
    calls: Cell<usize>,
    cancel_on_call: Option<MountGuard>,
}

impl MockAnalytics {
    pub fn succeeding(stats: DashboardStats) -> Self {
        Self {
            result: Ok(stats),
            calls: Cell::new(0),
            cancel_on_call: None,
        }
    }

    pub fn failing(error: gcdl_shared::SharedError) -> Self {
        Self {
            result: Err(error),
            calls: Cell::new(0),
            cancel_on_call: None,
        }
    }

    /// Cancels `guard` while the request is in flight, as an unmount would.
    pub fn cancelling(mut self, guard: MountGuard) -> Self {
        self.cancel_on_call = Some(guard);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl AnalyticsApi for MockAnalytics {
    async fn dashboard(&self) -> Result<DashboardStats> {
        self.calls.set(self.calls.get() + 1);
        if let Some(guard) = &self.cancel_on_call {
            guard.cancel();
        }
        self.result.clone()
    }
}

/// Collects everything emitted through its callbacks.
pub struct Recorder<T> {
    events: Rc<RefCell<Vec<T>>>,
}

impl<T: 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn callback(&self) -> Callback<T> {
        let events = self.events.clone();
        Callback::from(move |event: T| events.borrow_mut().push(event))
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn take(&self) -> Vec<T> {
        self.events.borrow_mut().drain(..).collect()
    }
}
