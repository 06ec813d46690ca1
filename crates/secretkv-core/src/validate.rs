//! Request validation
//!
//! Raw host requests are checked once here. Handlers receive a
//! [`ValidatedRequest`] and never inspect raw request fields themselves.

use crate::error::{BackendError, BackendResult};
use crate::types::{Operation, Request, RequestContext, SecretRecord};

/// What a validated request asks the backend to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Read,
    /// Create or update; both are plain overwrites
    Write,
}

/// A request that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub kind: RequestKind,
    /// Non-empty caller identity
    pub identity: String,
    /// Non-empty logical path
    pub path: String,
    pub mount_point: String,
    /// Non-empty for writes
    pub data: SecretRecord,
    pub context: RequestContext,
}

/// Check `request` and convert it into a [`ValidatedRequest`]
///
/// Checks run in order, and the first failure wins:
/// 1. empty client token → `Unauthenticated`
/// 2. operation without a handler (delete) → `UnsupportedOperation`
/// 3. missing or empty path → `InvalidArgument`
/// 4. write with empty data → `InvalidArgument`
pub fn validate(request: &Request) -> BackendResult<ValidatedRequest> {
    if request.client_token.is_empty() {
        return Err(BackendError::Unauthenticated);
    }

    let kind = match request.operation {
        Operation::Read => RequestKind::Read,
        op if op.is_write() => RequestKind::Write,
        op => return Err(BackendError::UnsupportedOperation(op)),
    };

    let path = match request.path.as_deref() {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => return Err(BackendError::invalid_argument("path cannot be empty")),
    };

    if kind == RequestKind::Write && request.data.is_empty() {
        return Err(BackendError::invalid_argument("data cannot be nil"));
    }

    Ok(ValidatedRequest {
        kind,
        identity: request.client_token.clone(),
        path,
        mount_point: request.mount_point.clone(),
        data: request.data.clone(),
        context: request.context.clone(),
    })
}
