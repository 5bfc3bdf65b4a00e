use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;

use cutlayout::error::WorkshopError;

/// Synchronous key-value storage for saved progress.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, `None` if nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>, WorkshopError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), WorkshopError>;
}

/// In-memory store which lives as long as the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WorkshopError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), WorkshopError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store which keeps every key in its own file inside a folder.
#[derive(Debug, Clone)]
pub struct FileStore {
    folder: PathBuf,
}

impl FileStore {
    /// Opens a store in `folder`, creating the folder if needed.
    pub fn new(folder: impl Into<PathBuf>) -> Result<Self> {
        let folder = folder.into();
        fs::create_dir_all(&folder)
            .with_context(|| format!("could not create store folder: {}", folder.display()))?;
        Ok(FileStore { folder })
    }

    fn path(&self, key: &str) -> Result<PathBuf, WorkshopError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        match valid {
            true => Ok(self.folder.join(format!("{key}.json"))),
            false => Err(WorkshopError::Store(format!("invalid key: {key:?}"))),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WorkshopError> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WorkshopError::Store(format!(
                "could not read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), WorkshopError> {
        let path = self.path(key)?;
        fs::write(&path, value).map_err(|e| {
            WorkshopError::Store(format!("could not write {}: {e}", path.display()))
        })?;
        debug!("stored {} bytes under {key:?} in {}", value.len(), path.display());
        Ok(())
    }
}
