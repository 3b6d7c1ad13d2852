//! In-memory filesystem adapter for dry runs, layout checks and tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sprout_core::{application::ports::Filesystem, domain::FsFailure};

/// In-memory filesystem with single-level directory semantics.
///
/// Clones share state, so a caller can hand one clone to a service and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, usize>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory filesystem where `base` and all of its ancestors exist.
    pub fn with_base(base: impl AsRef<Path>) -> Self {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            let mut current = PathBuf::new();
            for component in base.as_ref().components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        fs
    }

    /// Record `path` as an existing directory without checking its parent.
    pub fn add_directory(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.directories.insert(path.as_ref().to_path_buf());
        }
    }

    /// Size of a file, if it exists (testing helper).
    pub fn file_len(&self, path: &Path) -> Option<usize> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).copied()
    }

    /// Check if a directory exists.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl MemoryFilesystemInner {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

fn lock_failure() -> FsFailure {
    FsFailure::Other {
        reason: "memory filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> Result<(), FsFailure> {
        let mut inner = self.inner.write().map_err(|_| lock_failure())?;

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(FsFailure::AlreadyExists);
        }
        if !inner.parent_exists(path) {
            return Err(FsFailure::ParentMissing);
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_empty_file(&self, path: &Path) -> Result<(), FsFailure> {
        let mut inner = self.inner.write().map_err(|_| lock_failure())?;

        if inner.directories.contains(path) {
            return Err(FsFailure::Other {
                reason: format!("{} is a directory", path.display()),
            });
        }
        if !inner.parent_exists(path) {
            return Err(FsFailure::ParentMissing);
        }

        inner.files.insert(path.to_path_buf(), 0);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
