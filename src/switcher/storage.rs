//! Language preference persistence.
//!
//! The stored preference is a single string under [`PREFERENCE_KEY`]. The
//! store is deliberately forgiving: internally every access returns a typed
//! [`StorageError`], but the public helpers collapse failures to the default
//! locale (reads) or a silent no-op (writes). The switcher must keep working
//! with storage disabled, missing or corrupt.

use crate::locale::{DEFAULT_LOCALE, Locale};
use serde_json::{Map, Value};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Key the language preference is persisted under.
pub const PREFERENCE_KEY: &str = "preferredLanguage";

/// Storage-access errors. Never escape the public helpers below.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("preference store is not valid JSON")]
    Corrupt(#[from] serde_json::Error),
}

/// Key-value store holding the language preference.
///
/// Kept minimal so hosts can plug in whatever persistence they have; tests
/// inject an in-memory or failing store.
pub trait PreferenceStore {
    /// Raw value under [`PREFERENCE_KEY`], if any.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Persist a raw value under [`PREFERENCE_KEY`].
    fn write(&mut self, value: &str) -> Result<(), StorageError>;
}

// ============================================================================
// Public Boundary
// ============================================================================

/// Stored preference, collapsed to [`DEFAULT_LOCALE`] when the store fails,
/// is empty, or holds an unrecognized code.
pub fn stored_language(store: &impl PreferenceStore) -> Locale {
    store
        .read()
        .ok()
        .flatten()
        .and_then(|code| Locale::parse(&code))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Persist a preference, swallowing storage failures.
pub fn store_language(store: &mut impl PreferenceStore, lang: Locale) {
    let _ = store.write(lang.code());
}

// ============================================================================
// File Store
// ============================================================================

/// JSON-file-backed store, the CLI host's stand-in for browser storage.
///
/// The file holds one JSON object; keys other than [`PREFERENCE_KEY`] are
/// preserved across writes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_map(&self) -> Result<Map<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|err| StorageError::Io(self.path.clone(), err))?;
        let map = serde_json::from_str(&content)?;
        Ok(map)
    }
}

impl PreferenceStore for FileStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let map = self.load_map()?;
        Ok(map
            .get(PREFERENCE_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned))
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        let mut map = self.load_map().unwrap_or_default();
        map.insert(PREFERENCE_KEY.to_owned(), Value::from(value));

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| StorageError::Io(self.path.clone(), err))?;
        }

        let content = serde_json::to_string_pretty(&map)?;
        fs::write(&self.path, content).map_err(|err| StorageError::Io(self.path.clone(), err))
    }
}

// ============================================================================
// Memory Store
// ============================================================================

/// Volatile store for hosts without a filesystem, and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<String>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}
