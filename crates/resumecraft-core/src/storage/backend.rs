//! Key-value storage media
//!
//! The persistence adapter only needs "read a string by key" and "overwrite a
//! string by key". Two media implement that:
//!
//! - [`FileStorage`]: one `<key>.json` file per key under the data directory,
//!   written atomically (temp file, fsync, rename)
//! - [`MemoryStorage`]: a shared in-memory map, used by tests and for
//!   simulating a restart over the same medium

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::error::{Access, StorageError, StorageResult};

/// A medium that stores string values under string keys
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove the value stored under `key` (no-op if absent)
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Copy the raw value under `from` to `to`, byte for byte
    ///
    /// Used to keep unreadable state before it is overwritten, so it must
    /// work even when the value is not valid text. No-op if `from` is absent.
    fn copy(&self, from: &str, to: &str) -> StorageResult<()> {
        match self.read(from)? {
            Some(value) => self.write(to, &value),
            None => Ok(()),
        }
    }
}

/// Check that `key` names a single entry of the medium
///
/// Keys become file names, so separators and `..` would escape the data
/// directory.
pub fn validate_key(key: &str) -> StorageResult<()> {
    let reason = if key.is_empty() {
        "must not be empty"
    } else if key.contains(['/', '\\']) {
        "must not contain path separators"
    } else if key.contains("..") {
        "must not contain '..'"
    } else if key.contains('\0') {
        "must not contain NUL"
    } else {
        return Ok(());
    };
    Err(StorageError::InvalidKey {
        key: key.to_string(),
        reason,
    })
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn copy(&self, from: &str, to: &str) -> StorageResult<()> {
        (**self).copy(from, to)
    }
}

/// File-backed storage rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    ///
    /// Does not check the key; reads and writes go through [`validate_key`].
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn checked_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.path_for(key))
    }

    /// Size in bytes of the file backing `key`, if it exists
    pub fn size_of(&self, key: &str) -> Option<u64> {
        let path = self.checked_path(key).ok()?;
        fs::metadata(path).ok().map(|m| m.len())
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.checked_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(e, Access::Read, path)),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StorageError::InvalidFormat {
                key: key.to_string(),
                details: format!("not valid UTF-8 ({})", e.utf8_error()),
            })
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        atomic_write(&self.checked_path(key)?, value.as_bytes())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.checked_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(e, Access::Write, path)),
        }
    }

    fn copy(&self, from: &str, to: &str) -> StorageResult<()> {
        let source = self.checked_path(from)?;
        let target = self.checked_path(to)?;
        match fs::read(&source) {
            Ok(bytes) => atomic_write(&target, &bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(e, Access::Read, source)),
        }
    }
}

/// In-memory storage
///
/// Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// The target file is never left partially written.
pub(crate) fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = path.with_extension("tmp");

    let write_err = |e: io::Error| StorageError::io(e, Access::Write, &temp_path);
    let mut file = File::create(&temp_path).map_err(write_err)?;
    file.write_all(data).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::Rename {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_read_missing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(storage.read("resume-storage").unwrap().is_none());
        assert!(storage.size_of("resume-storage").is_none());
    }

    #[test]
    fn test_file_storage_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.write("resume-storage", r#"{"a":1}"#).unwrap();
        assert!(temp_dir.path().join("resume-storage.json").exists());
        assert_eq!(
            storage.read("resume-storage").unwrap().as_deref(),
            Some(r#"{"a":1}"#)
        );

        // Overwrite
        storage.write("resume-storage", r#"{"a":2}"#).unwrap();
        assert_eq!(
            storage.read("resume-storage").unwrap().as_deref(),
            Some(r#"{"a":2}"#)
        );
        assert_eq!(storage.size_of("resume-storage"), Some(7));
    }

    #[test]
    fn test_file_storage_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.write("resume-storage", "{}").unwrap();
        assert!(!temp_dir.path().join("resume-storage.tmp").exists());
    }

    #[test]
    fn test_file_storage_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.write("k", "v").unwrap();
        storage.remove("k").unwrap();
        assert!(storage.read("k").unwrap().is_none());

        // Removing again is fine
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir
            .path()
            .join("a")
            .join("b")
            .join("c")
            .join("file.json");

        atomic_write(&nested_path, b"test data").unwrap();

        assert!(nested_path.exists());
        let content = fs::read_to_string(&nested_path).unwrap();
        assert_eq!(content, "test data");
    }

    #[test]
    fn test_memory_storage_clones_share_state() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        assert!(storage.is_empty());

        storage.write("k", "v").unwrap();
        assert_eq!(other.read("k").unwrap().as_deref(), Some("v"));
        assert_eq!(other.len(), 1);

        other.remove("k").unwrap();
        assert!(storage.read("k").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_invalid_utf8_is_invalid_format() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        fs::write(temp_dir.path().join("resume-storage.json"), [0xff, 0xfe, b'{']).unwrap();

        assert!(matches!(
            storage.read("resume-storage"),
            Err(StorageError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_file_storage_copy_is_byte_exact() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        let raw = [0xff, 0xfe, b'{'];
        fs::write(temp_dir.path().join("resume-storage.json"), raw).unwrap();

        storage
            .copy("resume-storage", "resume-storage.corrupt")
            .unwrap();
        assert_eq!(
            fs::read(temp_dir.path().join("resume-storage.corrupt.json")).unwrap(),
            raw
        );

        // Missing source is a no-op
        storage.copy("missing", "missing.corrupt").unwrap();
        assert!(!temp_dir.path().join("missing.corrupt.json").exists());
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("resume-storage").is_ok());
        assert!(validate_key("resume-storage.corrupt").is_ok());

        for key in ["", "../escaped", "a/b", "a\\b", "..", "x..y", "nul\0"] {
            assert!(
                matches!(validate_key(key), Err(StorageError::InvalidKey { .. })),
                "{:?}",
                key
            );
        }
    }

    #[test]
    fn test_file_storage_rejects_escaping_keys() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        let storage = FileStorage::new(&data_dir);

        assert!(storage.write("../escaped", "{}").is_err());
        assert!(storage.read("../escaped").is_err());
        assert!(storage.remove("a/b").is_err());
        assert!(storage.size_of("../escaped").is_none());
        assert!(!temp_dir.path().join("escaped.json").exists());
    }

    #[test]
    fn test_memory_storage_default_copy() {
        let storage = MemoryStorage::new();
        storage.write("k", "v").unwrap();

        storage.copy("k", "k.bak").unwrap();
        assert_eq!(storage.read("k.bak").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_boxed_storage_delegates() {
        let memory = MemoryStorage::new();
        let boxed: Box<dyn KeyValueStorage> = Box::new(memory.clone());

        boxed.write("k", "v").unwrap();
        assert_eq!(memory.read("k").unwrap().as_deref(), Some("v"));
    }
}
