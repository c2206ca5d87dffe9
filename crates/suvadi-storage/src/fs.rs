//! Filesystem storage backend.
//!
//! [`FsStorage`] serves content from a directory on disk. All paths are
//! resolved against the content root; paths that would escape it (absolute
//! paths, `..` components) are rejected with `InvalidPath`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::storage::{Entry, EntryKind, Storage, StorageError};

/// Backend identifier used in error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage rooted at a content directory.
///
/// Read-only: every call opens, reads, and releases its file handles before
/// returning. Nothing is cached across calls.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage.
    ///
    /// # Arguments
    ///
    /// * `root` - Content root directory (e.g., `contents/`)
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path against the root.
    ///
    /// Rejects absolute paths and any `..` component.
    fn full_path(&self, rel: &Path) -> Result<PathBuf, StorageError> {
        if rel.is_absolute() {
            return Err(StorageError::invalid_path(rel).with_backend(BACKEND));
        }
        for component in rel.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => return Err(StorageError::invalid_path(rel).with_backend(BACKEND)),
            }
        }
        Ok(self.root.join(rel))
    }
}

impl Storage for FsStorage {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, StorageError> {
        let full = self.full_path(dir)?;
        let read_dir = fs::read_dir(&full)
            .map_err(|e| StorageError::io(e, Some(full.clone())).with_backend(BACKEND))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry =
                entry.map_err(|e| StorageError::io(e, Some(full.clone())).with_backend(BACKEND))?;
            let file_type = entry
                .file_type()
                .map_err(|e| StorageError::io(e, Some(entry.path())).with_backend(BACKEND))?;
            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            entries.push(Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(entries)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        let full = self.full_path(path)?;
        fs::read_to_string(&full).map_err(|e| StorageError::io(e, Some(full)).with_backend(BACKEND))
    }

    fn exists(&self, path: &Path) -> bool {
        self.full_path(path).is_ok_and(|full| full.is_file())
    }
}
