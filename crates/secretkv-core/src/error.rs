//! Backend error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;
use crate::types::Operation;

/// Hard failures of a backend request
///
/// "Not found" is deliberately absent: it is a soft outcome carried by
/// [`Response::error`](crate::types::Response::error).
#[derive(Error, Debug)]
pub enum BackendError {
    /// Caller identity missing; nothing was touched
    #[error("client token is empty")]
    Unauthenticated,

    /// Empty or malformed path/payload; nothing was touched
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation is routable but has no handler
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(Operation),

    /// Persisted bytes could not be decoded
    #[error("json decoding failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// Payload could not be encoded
    #[error("json encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// Failure from the persistence layer, passed through unchanged
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Backend configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BackendError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// True if the request was cancelled while talking to storage
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Storage(StorageError::Cancelled))
    }
}

pub type BackendResult<T> = Result<T, BackendError>;
