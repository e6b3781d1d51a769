//! Persisted preferences (the browser's local storage).

use crate::error::{DashboardError, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key under which the active language code is persisted.
pub const LANGUAGE_KEY: &str = "digipay_language";

/// String key/value storage that survives restarts.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, for tests and one-shot runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file.
///
/// A missing file reads as empty; the file and its parent directory are
/// created on first save.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_content(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            debug!("Preference file {} does not exist yet", self.path.display());
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| DashboardError::Storage(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(content).filter(|c| !c.trim().is_empty()))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match self.read_content()? {
            Some(content) => serde_json::from_str(&content)
                .map_err(|e| DashboardError::Storage(format!("{}: {}", self.path.display(), e))),
            None => Ok(BTreeMap::new()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values: BTreeMap<String, String> = match self.read_content()? {
            Some(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(
                    "Preference file {} is corrupt ({}), overwriting it",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }),
            None => BTreeMap::new(),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| DashboardError::Storage(format!("{}: {}", parent.display(), e)))?;
        }
        let json = serde_json::to_string_pretty(&values)
            .map_err(|e| DashboardError::Storage(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| DashboardError::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(LANGUAGE_KEY).unwrap(), None);

        store.save(LANGUAGE_KEY, "fr").unwrap();
        assert_eq!(store.load(LANGUAGE_KEY).unwrap().as_deref(), Some("fr"));
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load(LANGUAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = FileStore::new(&path);
        store.save(LANGUAGE_KEY, "de").unwrap();
        store.save("other", "value").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load(LANGUAGE_KEY).unwrap().as_deref(), Some("de"));
        assert_eq!(reopened.load("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_overwrites_value() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("prefs.json"));
        store.save(LANGUAGE_KEY, "de").unwrap();
        store.save(LANGUAGE_KEY, "it").unwrap();

        assert_eq!(store.load(LANGUAGE_KEY).unwrap().as_deref(), Some("it"));
    }

    #[test]
    fn test_file_store_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).load(LANGUAGE_KEY).unwrap_err();
        assert!(matches!(err, DashboardError::Storage(_)));
    }

    #[test]
    fn test_file_store_save_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ truncated").unwrap();

        let mut store = FileStore::new(&path);
        store.save(LANGUAGE_KEY, "pt").unwrap();

        assert_eq!(store.load(LANGUAGE_KEY).unwrap().as_deref(), Some("pt"));
    }
}
