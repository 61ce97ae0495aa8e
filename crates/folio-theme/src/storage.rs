use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::StorageError;

/// Durable key-value surface the theme store persists into.
///
/// Reads are infallible (a missing or unreadable value is simply `None`);
/// writes are best-effort and synchronous. Implementations hold two scalar
/// values in practice, so nothing here is tuned for volume.
pub trait Storage: 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage; preferences last for the session only.
/// Also the standard test double.
#[derive(Default)]
pub struct MemoryStorage {
    map: RefCell<HashMap<String, String>>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}

/// File-backed storage: one flat JSON object of string pairs.
///
/// The whole document is read once at open and rewritten on every set.
/// A corrupt or missing file degrades to an empty map rather than failing
/// construction.
pub struct FileStorage {
    path: PathBuf,
    cache: RefCell<HashMap<String, String>>,
}

impl FileStorage {
    pub fn open(path: PathBuf) -> Self {
        let cache = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self {
            path,
            cache: RefCell::new(cache),
        }
    }

    /// Opens the per-user preference file, if a data directory exists.
    pub fn open_default() -> Option<Self> {
        let path = dirs::data_dir()?.join("folio").join("preferences.json");
        Some(Self::open(path))
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&*self.cache.borrow())?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.cache
            .borrow_mut()
            .insert(key.into(), value.into());
        self.flush()
    }
}
