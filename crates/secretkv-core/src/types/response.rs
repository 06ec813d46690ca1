//! Responses returned to the host

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SecretRecord;

/// Field that carries the message of a soft error response
pub const ERROR_FIELD: &str = "error";

/// Successful payload or soft error returned to the host
///
/// A soft error is an expected negative outcome ("No value found") that the
/// caller can inspect. It is not a propagated failure: hard failures are
/// returned as `Err(BackendError)` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub data: SecretRecord,
}

impl Response {
    pub fn new(data: SecretRecord) -> Self {
        Self { data }
    }

    /// Build a soft error response
    pub fn error(message: impl Into<String>) -> Self {
        let mut data = SecretRecord::new();
        data.insert(ERROR_FIELD.to_string(), Value::String(message.into()));
        Self { data }
    }

    /// True if this is a soft error response
    pub fn is_error(&self) -> bool {
        self.data.len() == 1 && self.error_message().is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.data.get(ERROR_FIELD).and_then(Value::as_str)
    }
}
