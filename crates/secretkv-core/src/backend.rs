//! Request handling for the secret backend
//!
//! The host routes every request under the mount to [`Backend::handle_request`]
//! through a single catch-all pattern. Reads and writes are scoped to the
//! caller's identity; see [`crate::key`].

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::codec;
use crate::config::{BackendConfig, ConfigCell, ConfigProvider, MemoryConfigProvider};
use crate::error::{BackendError, BackendResult};
use crate::invalidation::InvalidationController;
use crate::key::build_key;
use crate::logging::{SharedLogger, TracingLogger};
use crate::storage::{Storage, StorageError};
use crate::types::{Operation, Request, Response, SecretRecord, StorageEntry};
use crate::validate::{validate, RequestKind, ValidatedRequest};
use crate::{log_debug, log_error, log_info};

/// Route pattern the backend registers: matches any trailing path
pub const PATH_PATTERN: &str = "(?P<path>.*)";

/// Soft error message for a key with no entry
pub const NOT_FOUND_MESSAGE: &str = "No value found";

/// One operation declared on the catch-all route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOperation {
    pub operation: Operation,
    pub summary: &'static str,
    /// False for operations that are routable but have no handler
    pub handled: bool,
}

static ROUTES: [RouteOperation; 4] = [
    RouteOperation {
        operation: Operation::Read,
        summary: "Read secrets",
        handled: true,
    },
    RouteOperation {
        operation: Operation::Create,
        summary: "Write secret on path",
        handled: true,
    },
    RouteOperation {
        operation: Operation::Update,
        summary: "Update secret on path",
        handled: true,
    },
    RouteOperation {
        operation: Operation::Delete,
        summary: "Delete secret from path",
        handled: false,
    },
];

/// Identity-scoped secret backend
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use secretkv_core::{Backend, MemoryStorage, Request, SecretRecord};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let backend = Backend::new(Arc::new(MemoryStorage::new()));
///
/// let mut data = SecretRecord::new();
/// data.insert("bar".into(), "baz".into());
/// backend
///     .handle_request(Request::write("data/foo", data.clone()).with_token("root"))
///     .await
///     .unwrap();
///
/// let resp = backend
///     .handle_request(Request::read("data/foo").with_token("root"))
///     .await
///     .unwrap();
/// assert_eq!(resp.data, data);
/// # }
/// ```
pub struct Backend {
    storage: Arc<dyn Storage>,
    config_provider: Arc<dyn ConfigProvider>,
    config: Arc<ConfigCell>,
    invalidation: InvalidationController,
    logger: SharedLogger,
}

impl Backend {
    /// Create a backend over `storage` with default configuration
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let config = Arc::new(ConfigCell::new());
        Self {
            storage,
            config_provider: Arc::new(MemoryConfigProvider::new()),
            invalidation: InvalidationController::new(Arc::clone(&config)),
            config,
            logger: Arc::new(TracingLogger::new()),
        }
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Load configuration from `provider`; dropped from cache on invalidation
    pub fn with_config_provider(mut self, provider: Arc<dyn ConfigProvider>) -> Self {
        self.config_provider = provider;
        self
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Cached configuration handle
    pub fn config_cell(&self) -> &Arc<ConfigCell> {
        &self.config
    }

    pub fn invalidation(&self) -> &InvalidationController {
        &self.invalidation
    }

    /// Operations declared on [`PATH_PATTERN`]
    pub fn routes() -> &'static [RouteOperation] {
        &ROUTES
    }

    /// Help text for the mount
    pub async fn help(&self) -> BackendResult<String> {
        Ok(self.current_config().await?.help_text().to_string())
    }

    /// Host signal that cached state may be stale
    ///
    /// Only `"config"` has an effect.
    pub fn invalidate(&self, key: &str) {
        if self.invalidation.invalidate(key) {
            log_debug!(self.logger, "configuration cache reset");
        }
    }

    /// Handle one request routed to this backend
    ///
    /// Soft outcomes such as "not found" come back as `Ok` error responses;
    /// `Err` means the request failed.
    pub async fn handle_request(&self, request: Request) -> BackendResult<Response> {
        let request = validate(&request)?;
        let config = self.current_config().await?;

        match request.kind {
            RequestKind::Read => self.handle_read(request).await,
            RequestKind::Write => self.handle_write(request, &config).await,
        }
    }

    async fn current_config(&self) -> BackendResult<Arc<BackendConfig>> {
        Ok(self.config.get_or_load(self.config_provider.as_ref()).await?)
    }

    async fn handle_read(&self, request: ValidatedRequest) -> BackendResult<Response> {
        let key = build_key(&request.identity, &request.path)?;

        let entry = match request.context.run(self.storage.get(key.as_str())).await? {
            Some(entry) => entry,
            None => return Ok(Response::error(NOT_FOUND_MESSAGE)),
        };

        if entry.value.is_empty() {
            return Ok(Response::error(format!(
                "{} at {}{}",
                NOT_FOUND_MESSAGE, request.mount_point, request.path
            )));
        }

        let data = codec::decode(&entry.value).map_err(|e| {
            log_error!(
                self.logger,
                "undecodable entry at {}{}: {}",
                request.mount_point,
                request.path,
                e
            );
            e
        })?;

        Ok(Response::new(data))
    }

    async fn handle_write(&self, request: ValidatedRequest, config: &BackendConfig) -> BackendResult<Response> {
        let key = build_key(&request.identity, &request.path)?;
        let value = codec::encode(&request.data)?;

        let entry = StorageEntry::new(key.as_str(), value).with_seal_wrap(config.seal_wrap);
        request.context.run(self.storage.put(entry.clone())).await?;

        let stored = request
            .context
            .run(self.storage.get(key.as_str()))
            .await?
            .ok_or_else(|| StorageError::Other(format!("entry at {}{} missing after write", request.mount_point, request.path)))?;

        // Metadata only; the value and the caller's token stay out of logs.
        log_info!(
            self.logger,
            "stored {}{} ({} bytes) at {}",
            request.mount_point,
            request.path,
            stored.value.len(),
            unix_timestamp()
        );

        let entry_json = serde_json::to_value(&entry).map_err(BackendError::Encode)?;
        let mut data = SecretRecord::new();
        data.insert(key.into_string(), entry_json);
        Ok(Response::new(data))
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("storage", &self.storage.name())
            .field("config", &self.config)
            .field("invalidation", &self.invalidation)
            .finish()
    }
}
