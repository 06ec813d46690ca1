//! Requests delivered by the host

use super::{Operation, RequestContext, SecretRecord};

/// A request as received from the host, before validation
///
/// `path` is the trailing segment the host's catch-all route matched, with
/// the mount point already stripped. `client_token` is the caller identity the
/// host authenticated; it is trusted as-is.
#[derive(Debug, Clone)]
pub struct Request {
    pub operation: Operation,
    pub path: Option<String>,
    pub client_token: String,
    pub data: SecretRecord,
    pub mount_point: String,
    pub context: RequestContext,
}

impl Request {
    /// Create a request with no token, data or mount point
    pub fn new(operation: Operation, path: impl Into<String>) -> Self {
        Self {
            operation,
            path: Some(path.into()),
            client_token: String::new(),
            data: SecretRecord::new(),
            mount_point: String::new(),
            context: RequestContext::new(),
        }
    }

    /// A read of `path`
    pub fn read(path: impl Into<String>) -> Self {
        Self::new(Operation::Read, path)
    }

    /// A create of `path` carrying `data`
    pub fn write(path: impl Into<String>, data: SecretRecord) -> Self {
        Self::new(Operation::Create, path).with_data(data)
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = token.into();
        self
    }

    pub fn with_data(mut self, data: SecretRecord) -> Self {
        self.data = data;
        self
    }

    pub fn with_mount_point(mut self, mount_point: impl Into<String>) -> Self {
        self.mount_point = mount_point.into();
        self
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }

    /// Drop the matched path, as if the route captured nothing
    pub fn without_path(mut self) -> Self {
        self.path = None;
        self
    }
}
