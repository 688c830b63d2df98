use crate::de::null_as_default;
use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The signed-in user's identity as persisted by the login flow.
///
/// Only the name and role are read by the dashboard. Every other stored field
/// is kept in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(full_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            role: role.into(),
            extra: Map::new(),
        }
    }

    /// Parses a stored session record. Anything other than a JSON object is
    /// rejected as malformed.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| SharedError::MalformedSession(e.to_string()))
    }
}
