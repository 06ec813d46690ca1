//! In-memory storage

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::traits::{Storage, StorageResult};
use crate::types::StorageEntry;

/// In-memory storage for tests and ephemeral mounts
///
/// Entries are kept in key order and lost when the storage is dropped.
///
/// # Thread Safety
///
/// The map sits behind a `RwLock`; the storage is safe to share across tasks.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<String, StorageEntry>>,
}

impl MemoryStorage {
    /// Create a new empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage with initial entries
    pub fn with_entries(initial: impl IntoIterator<Item = StorageEntry>) -> Self {
        let entries = initial
            .into_iter()
            .map(|entry| (entry.key.clone(), entry))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keys, in order
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> StorageResult<Option<StorageEntry>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn put(&self, entry: StorageEntry) -> StorageResult<()> {
        self.entries.write().insert(entry.key.clone(), entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_get_put() {
        let storage = MemoryStorage::new();

        assert!(storage.is_empty());
        assert_eq!(storage.get("root/a").await.unwrap(), None);

        storage.put(StorageEntry::new("root/a", b"one".to_vec())).await.unwrap();
        assert_eq!(storage.len(), 1);
        let entry = storage.get("root/a").await.unwrap().unwrap();
        assert_eq!(entry.value, b"one");
        assert!(!entry.seal_wrap);

        // Overwrite replaces the whole entry
        storage
            .put(StorageEntry::new("root/a", b"two".to_vec()).with_seal_wrap(true))
            .await
            .unwrap();
        let entry = storage.get("root/a").await.unwrap().unwrap();
        assert_eq!(entry.value, b"two");
        assert!(entry.seal_wrap);
        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_storage_keys_are_ordered() {
        let storage = MemoryStorage::with_entries(vec![
            StorageEntry::new("bob/x", Vec::new()),
            StorageEntry::new("alice/z", Vec::new()),
            StorageEntry::new("alice/a", Vec::new()),
        ]);

        assert_eq!(storage.keys(), vec!["alice/a", "alice/z", "bob/x"]);

        storage.clear();
        assert!(storage.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_memory_storage_concurrent_writers() {
        use std::sync::Arc;

        let storage = Arc::new(MemoryStorage::new());
        let mut handles = vec![];

        for i in 0..10 {
            let storage = Arc::clone(&storage);
            handles.push(tokio::spawn(async move {
                let key = format!("user_{}/secret", i);
                storage.put(StorageEntry::new(key.clone(), vec![i as u8])).await.unwrap();
                let entry = storage.get(&key).await.unwrap().unwrap();
                assert_eq!(entry.value, vec![i as u8]);
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(storage.len(), 10);
    }
}
