//! Core trait and errors for persistence

use async_trait::async_trait;
use thiserror::Error;

use crate::types::StorageEntry;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Request cancelled")]
    Cancelled,

    #[error("Storage not available: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Ordered key-value persistence used by the backend
///
/// Implementations must give at least read-your-writes consistency: a `get`
/// issued after a successful `put` of the same key observes that entry.
/// Durability and write ordering are the implementation's business.
///
/// # Example
///
/// ```
/// use secretkv_core::storage::{Storage, MemoryStorage};
/// use secretkv_core::types::StorageEntry;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let storage = MemoryStorage::new();
/// storage.put(StorageEntry::new("root/db", b"{}".to_vec())).await.unwrap();
/// assert!(storage.get("root/db").await.unwrap().is_some());
/// # }
/// ```
#[async_trait]
pub trait Storage: Send + Sync {
    /// Human-readable name of this storage
    fn name(&self) -> &str;

    /// Fetch the entry stored at `key`, or `None` if there is none
    async fn get(&self, key: &str) -> StorageResult<Option<StorageEntry>>;

    /// Create or overwrite the entry at `entry.key`
    async fn put(&self, entry: StorageEntry) -> StorageResult<()>;
}
