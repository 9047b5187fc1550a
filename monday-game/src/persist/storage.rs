//! Where the encrypted blob lives.
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::constants::BRIDGE_KEY;

/// Trait for platform-specific blob storage
pub trait StorageBackend {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the stored blob
    ///
    /// # Errors
    ///
    /// Returns an error if the blob exists but cannot be read.
    fn read(&self) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Replace the stored blob
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be written.
    fn write(&self, blob: &[u8]) -> Result<(), Self::Error>;

    /// Remove the stored blob; erasing nothing is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if an existing blob cannot be removed.
    fn erase(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("host bridge failed: {0}")]
    Bridge(String),
    #[error("stored value for '{0}' is not text")]
    NotText(String),
}

/// One opaque blob in a file, replaced atomically.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("monday_save.dat");
        self.path.with_file_name(format!("{name}.tmp"))
    }
}

impl StorageBackend for FileStorage {
    type Error = StorageError;

    fn read(&self) -> Result<Option<Vec<u8>>, Self::Error> {
        match fs::read(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&self, blob: &[u8]) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, blob)?;
        if let Err(error) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(error.into());
        }
        Ok(())
    }

    fn erase(&self) -> Result<(), Self::Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// String key/value store offered by an embedding host (browser storage,
/// a settings service, ...).
pub trait KeyValueBridge {
    /// # Errors
    ///
    /// Returns an error if the host refuses the write.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the host cannot be queried.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the host refuses the removal.
    fn clear(&self, key: &str) -> Result<(), StorageError>;
}

/// Stores the token text under a single bridge key.
#[derive(Debug, Clone)]
pub struct BridgeStorage<B: KeyValueBridge> {
    bridge: B,
    key: String,
}

impl<B: KeyValueBridge> BridgeStorage<B> {
    pub fn new(bridge: B) -> Self {
        Self::with_key(bridge, BRIDGE_KEY)
    }

    pub fn with_key(bridge: B, key: impl Into<String>) -> Self {
        Self {
            bridge,
            key: key.into(),
        }
    }

    pub const fn bridge(&self) -> &B {
        &self.bridge
    }
}

impl<B: KeyValueBridge> StorageBackend for BridgeStorage<B> {
    type Error = StorageError;

    fn read(&self) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self.bridge.load(&self.key)?.map(String::into_bytes))
    }

    fn write(&self, blob: &[u8]) -> Result<(), Self::Error> {
        let text =
            std::str::from_utf8(blob).map_err(|_| StorageError::NotText(self.key.clone()))?;
        self.bridge.save(&self.key, text)
    }

    fn erase(&self) -> Result<(), Self::Error> {
        self.bridge.clear(&self.key)
    }
}

/// In-process bridge. Clones share the same map, so a test can keep a
/// handle and inspect what the engine wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryBridge {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBridge {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: impl Into<String>) {
        self.values.borrow_mut().insert(key.to_string(), value.into());
    }
}

impl KeyValueBridge for MemoryBridge {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("monday-storage-{}-{name}", std::process::id()))
    }

    #[test]
    fn file_storage_round_trip() {
        let path = temp_path("round-trip.dat");
        let storage = FileStorage::new(&path);
        assert!(storage.read().unwrap().is_none());
        storage.write(b"first").unwrap();
        storage.write(b"second").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some(&b"second"[..]));
        assert!(!storage.temp_path().exists());
        storage.erase().unwrap();
        storage.erase().unwrap();
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn bridge_storage_uses_stats_key() {
        let bridge = MemoryBridge::default();
        let storage = BridgeStorage::new(bridge.clone());
        storage.write(b"gAAAAAtoken").unwrap();
        assert_eq!(bridge.get(BRIDGE_KEY).as_deref(), Some("gAAAAAtoken"));
        assert_eq!(storage.read().unwrap().unwrap(), b"gAAAAAtoken");
        storage.erase().unwrap();
        assert!(bridge.get(BRIDGE_KEY).is_none());
    }

    #[test]
    fn bridge_rejects_binary_blobs() {
        let storage = BridgeStorage::with_key(MemoryBridge::default(), "other");
        assert!(matches!(
            storage.write(&[0xff, 0x00]),
            Err(StorageError::NotText(key)) if key == "other"
        ));
    }
}
