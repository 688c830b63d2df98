use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SharedError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Malformed session record: {0}")]
    MalformedSession(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Decode(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
