//! Core request/response types shared by the validator, handlers and storage.

mod context;
mod entry;
mod operation;
mod request;
mod response;

pub use context::RequestContext;
pub use entry::StorageEntry;
pub use operation::Operation;
pub use request::Request;
pub use response::{Response, ERROR_FIELD};

/// A secret payload: string field names mapped to arbitrary JSON values.
pub type SecretRecord = serde_json::Map<String, serde_json::Value>;
