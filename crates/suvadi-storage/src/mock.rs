//! In-memory storage for testing.
//!
//! [`MockStorage`] holds files in a `BTreeMap`, so listing order is
//! deterministic (lexicographic by name). Directories exist implicitly
//! wherever a file path has intermediate components.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::storage::{Entry, EntryKind, Storage, StorageError};

/// Backend identifier used in error messages.
const BACKEND: &str = "Mock";

/// In-memory storage backend for tests.
#[derive(Debug, Default)]
pub struct MockStorage {
    files: BTreeMap<PathBuf, String>,
}

impl MockStorage {
    /// Create an empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Add a file.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// True if any stored file lives under `dir`.
    fn dir_exists(&self, dir: &Path) -> bool {
        dir.as_os_str().is_empty() || self.files.keys().any(|p| p.starts_with(dir))
    }
}

impl Storage for MockStorage {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, StorageError> {
        if !self.dir_exists(dir) {
            return Err(StorageError::not_found(dir).with_backend(BACKEND));
        }

        let mut names: BTreeSet<Entry> = BTreeSet::new();
        let mut entries = Vec::new();
        for path in self.files.keys() {
            let Ok(rest) = path.strip_prefix(dir) else {
                continue;
            };
            let mut components = rest.components();
            let Some(first) = components.next() else {
                continue;
            };
            let name = first.as_os_str().to_string_lossy().into_owned();
            let kind = if components.next().is_some() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            let entry = Entry { name, kind };
            if names.insert(entry.clone()) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}
