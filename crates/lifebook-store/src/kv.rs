use crate::error::KvError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The synchronous string-keyed persistence primitive.
///
/// Modeled on origin-scoped browser storage: get/set/remove, bounded
/// capacity, writes may fail. Reads are infallible; a backend that cannot
/// read a key reports it as absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;
    fn remove(&mut self, key: &str);
}

/// In-memory backend, optionally capacity-bounded so tests can exercise the
/// quota-exceeded path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    capacity_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes once the total stored bytes would exceed
    /// `capacity_bytes`.
    pub fn with_capacity_bytes(capacity_bytes: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            capacity_bytes: Some(capacity_bytes),
        }
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        if let Some(cap) = self.capacity_bytes {
            let projected = self.used_bytes_excluding(key) + key.len() + value.len();
            if projected > cap {
                return Err(KvError::CapacityExceeded {
                    key: key.to_string(),
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-backed store: one JSON object (key -> string value) per store file.
///
/// Every successful `set`/`remove` rewrites the file; a failed write leaves
/// the in-memory map updated and returns the error, matching the "session
/// keeps working, reload may lose the change" degradation contract.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store file, creating parent directories on first write. A
    /// missing file is an empty store; an unreadable or corrupt file is
    /// logged and treated as empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::error!(path = %path.display(), %err, "corrupt store file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "unreadable store file, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), KvError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| KvError::Io(std::io::Error::other(err)))?;
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        if let Err(err) = self.flush() {
            tracing::warn!(key, %err, "failed to flush store after remove");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryStore::new();
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        store.remove("a");
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn bounded_memory_store_rejects_oversized_writes() {
        let mut store = MemoryStore::with_capacity_bytes(8);
        store.set("k", "1234").unwrap();
        let err = store.set("k2", "too large to fit").unwrap_err();
        assert!(matches!(err, KvError::CapacityExceeded { .. }));
        // The rejected write must not clobber existing data.
        assert_eq!(store.get("k").as_deref(), Some("1234"));
    }

    #[test]
    fn overwriting_a_key_does_not_double_count_capacity() {
        let mut store = MemoryStore::with_capacity_bytes(10);
        store.set("key", "12345").unwrap();
        store.set("key", "54321").unwrap();
        assert_eq!(store.get("key").as_deref(), Some("54321"));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        {
            let mut store = FileStore::open(&path);
            store.set("lifebook.sort-order", "oldest-first").unwrap();
        }
        let store = FileStore::open(&path);
        assert_eq!(
            store.get("lifebook.sort-order").as_deref(),
            Some("oldest-first")
        );
    }

    #[test]
    fn corrupt_file_store_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get("anything"), None);
    }
}
