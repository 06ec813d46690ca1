//! File-backed storage
//!
//! One JSON document per entry under a root directory. File names are the
//! hex SHA-256 digest of the key: fixed length whatever the key, and keys
//! containing `/` or `..` can never escape the root. The key itself is kept
//! inside the document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use super::traits::{Storage, StorageError, StorageResult};
use crate::types::StorageEntry;

const ENTRY_EXTENSION: &str = "json";

/// Storage persisting each entry as a file on local disk
///
/// # Example
///
/// ```no_run
/// use secretkv_core::storage::FileStorage;
///
/// let storage = FileStorage::new("/var/lib/secretkv");
/// ```
pub struct FileStorage {
    root: PathBuf,
    tmp_counter: AtomicU64,
}

impl FileStorage {
    /// Create a storage rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            tmp_counter: AtomicU64::new(0),
        }
    }

    /// Root directory holding the entry files
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", encode_file_name(key), ENTRY_EXTENSION))
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        let n = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        self.root
            .join(format!(".{}.{}.{}.tmp", encode_file_name(key), std::process::id(), n))
    }
}

fn encode_file_name(key: &str) -> String {
    hex::encode(Sha256::digest(key.as_bytes()))
}

#[async_trait]
impl Storage for FileStorage {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> StorageResult<Option<StorageEntry>> {
        let content = match fs::read(self.entry_path(key)) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entry: StorageEntry = serde_json::from_slice(&content)?;
        if entry.key != key {
            return Err(StorageError::Other(format!(
                "entry file for {} holds key {}",
                key, entry.key
            )));
        }
        Ok(Some(entry))
    }

    async fn put(&self, entry: StorageEntry) -> StorageResult<()> {
        fs::create_dir_all(&self.root)?;

        let content = serde_json::to_vec(&entry)?;
        let tmp = self.tmp_path(&entry.key);

        // Rename is atomic on the same filesystem; readers see old or new, never half.
        let result = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, self.entry_path(&entry.key)));
        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStorage")
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn dir_names(root: &Path) -> Vec<String> {
        fs::read_dir(root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[tokio::test]
    async fn test_file_storage_roundtrip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("entries"));

        assert_eq!(storage.get("root/data/foo").await.unwrap(), None);

        let entry = StorageEntry::new("root/data/foo", br#"{"bar":"baz"}"#.to_vec());
        storage.put(entry.clone()).await.unwrap();
        assert_eq!(storage.get("root/data/foo").await.unwrap(), Some(entry));

        // Survives a fresh handle on the same directory
        let reopened = FileStorage::new(dir.path().join("entries"));
        assert!(reopened.get("root/data/foo").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_file_storage_keys_stay_under_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("entries");
        let storage = FileStorage::new(&root);

        storage
            .put(StorageEntry::new("evil/../../escape", b"x".to_vec()))
            .await
            .unwrap();

        let files: Vec<_> = fs::read_dir(&root).unwrap().map(|e| e.unwrap().path()).collect();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].parent(), Some(root.as_path()));
        assert!(storage.get("evil/../../escape").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_file_storage_overwrite() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.put(StorageEntry::new("k/v", b"1".to_vec())).await.unwrap();
        storage.put(StorageEntry::new("k/v", b"2".to_vec())).await.unwrap();

        let entry = storage.get("k/v").await.unwrap().unwrap();
        assert_eq!(entry.value, b"2");
    }

    #[tokio::test]
    async fn test_file_storage_corrupt_entry() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        fs::write(storage.entry_path("k/v"), b"garbage").unwrap();

        assert!(matches!(
            storage.get("k/v").await,
            Err(StorageError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_file_storage_long_keys() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        let token = format!("hvs.{}", "A".repeat(200));
        let key = format!("{}/team/app/database/credentials", token);
        assert!(key.len() > 200);

        let entry = StorageEntry::new(key.clone(), b"{}".to_vec());
        storage.put(entry.clone()).await.unwrap();
        assert_eq!(storage.get(&key).await.unwrap(), Some(entry));

        // Name length does not grow with the key
        let short = FileStorage::new(dir.path()).entry_path("a/b");
        let long = storage.entry_path(&key);
        assert_eq!(
            short.file_name().unwrap().len(),
            long.file_name().unwrap().len()
        );
    }

    #[tokio::test]
    async fn test_file_storage_failed_put_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        // A non-empty directory where the entry file should go makes the rename fail
        let blocker = storage.entry_path("k/v");
        fs::create_dir_all(blocker.join("occupied")).unwrap();

        let result = storage.put(StorageEntry::new("k/v", b"1".to_vec())).await;
        assert!(matches!(result, Err(StorageError::Io(_))));

        let names = dir_names(dir.path());
        assert_eq!(names.len(), 1);
        assert!(!names[0].ends_with(".tmp"));
    }

    #[tokio::test]
    async fn test_file_storage_rejects_mismatched_key() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        let foreign = serde_json::to_vec(&StorageEntry::new("other/key", b"x".to_vec())).unwrap();
        fs::write(storage.entry_path("k/v"), foreign).unwrap();

        assert!(matches!(storage.get("k/v").await, Err(StorageError::Other(_))));
    }
}
