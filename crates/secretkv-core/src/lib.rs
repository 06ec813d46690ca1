//! SecretKV Core
//!
//! Host-agnostic secret storage backend. The host authenticates callers,
//! routes requests under a mount and supplies the storage; this crate turns
//! each request into an identity-scoped read or write.
//!
//! ## Request flow
//!
//! 1. `validate` checks the raw request (token, operation, path, payload)
//! 2. `key::build_key` derives `identity/path`
//! 3. reads decode the stored JSON; writes encode, persist and re-read
//!
//! ```rust,ignore
//! use secretkv_core::{Backend, FileStorage, FileConfigProvider, Request};
//!
//! let backend = Backend::new(Arc::new(FileStorage::new("/var/lib/secretkv")))
//!     .with_config_provider(Arc::new(FileConfigProvider::user()));
//!
//! let resp = backend.handle_request(Request::read("db/creds").with_token(token)).await?;
//! if resp.is_error() {
//!     // soft "No value found": create the secret first
//! }
//!
//! // on configuration change
//! backend.invalidate("config");
//! ```

pub mod types;
pub mod error;
pub mod key;
pub mod codec;
pub mod validate;
pub mod storage;
pub mod config;
pub mod invalidation;
pub mod logging;
pub mod backend;

// Re-export commonly used types
pub use types::{
    Operation, Request, RequestContext, Response,
    SecretRecord, StorageEntry,
};

pub use error::{BackendError, BackendResult};

pub use key::{build_key, StorageKey};

pub use validate::{validate, RequestKind, ValidatedRequest};

pub use storage::{Storage, StorageError, StorageResult, MemoryStorage, FileStorage};

pub use config::{
    BackendConfig, ConfigCell, ConfigError, ConfigProvider, ConfigResult,
    FileConfigProvider, MemoryConfigProvider,
};

pub use invalidation::{InvalidationController, InvalidationState, CONFIG_KEY};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger, TracingLogger};

pub use backend::{Backend, RouteOperation, PATH_PATTERN, NOT_FOUND_MESSAGE};
