use crate::config::Config;
use gcdl_shared::{Result, Session, SharedError};
use gloo_storage::{LocalStorage, Storage};
use log::{debug, warn};

/// Persisted session state. Reading and clearing are the only operations the
/// dashboard needs.
pub trait SessionStore {
    /// `Ok(None)` when no session is stored.
    fn read(&self) -> Result<Option<Session>>;

    /// Removes every persisted entry, not only the session record.
    fn clear(&self);
}

/// Parses the raw stored value. An empty value counts as no session.
pub fn decode_stored_session(raw: Option<&str>) -> Result<Option<Session>> {
    match raw {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => Session::from_json(raw).map(Some),
    }
}

/// Returns the stored session, treating a malformed record like a missing one.
pub fn restore_session(store: &dyn SessionStore) -> Option<Session> {
    match store.read() {
        Ok(Some(session)) => {
            debug!("Restored session for {}", session.full_name);
            Some(session)
        }
        Ok(None) => {
            debug!("No stored session");
            None
        }
        Err(e) => {
            warn!("Ignoring unusable stored session: {}", e);
            None
        }
    }
}

/// Browser local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn read(&self) -> Result<Option<Session>> {
        let raw = LocalStorage::raw()
            .get_item(Config::SESSION_KEY)
            .map_err(|e| SharedError::Storage(format!("Failed to read session: {:?}", e)))?;
        decode_stored_session(raw.as_deref())
    }

    fn clear(&self) {
        LocalStorage::clear();
    }
}
