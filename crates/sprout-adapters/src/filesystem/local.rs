//! Local filesystem adapter using std::fs.

use std::fs::{DirBuilder, File};
use std::io;
use std::path::Path;

use sprout_core::{application::ports::Filesystem, domain::FsFailure};

/// Mode requested for new directories; the process umask still applies.
pub const DIRECTORY_MODE: u32 = 0o777;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> Result<(), FsFailure> {
        let mut builder = DirBuilder::new();
        builder.recursive(false);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIRECTORY_MODE);
        }
        builder
            .create(path)
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_empty_file(&self, path: &Path) -> Result<(), FsFailure> {
        File::create(path)
            .map(drop)
            .map_err(|e| map_io_error(path, e, "create file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> FsFailure {
    match e.kind() {
        io::ErrorKind::AlreadyExists => FsFailure::AlreadyExists,
        io::ErrorKind::NotFound => FsFailure::ParentMissing,
        _ => FsFailure::Other {
            reason: format!("Failed to {} {}: {}", operation, path.display(), e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_is_single_level() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        assert_eq!(
            fs.create_dir(&temp.path().join("a/b")),
            Err(FsFailure::ParentMissing)
        );
        assert_eq!(fs.create_dir(&temp.path().join("a")), Ok(()));
        assert_eq!(fs.create_dir(&temp.path().join("a/b")), Ok(()));
    }

    #[test]
    fn create_dir_twice_reports_existing() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("foo");

        fs.create_dir(&dir).unwrap();
        assert_eq!(fs.create_dir(&dir), Err(FsFailure::AlreadyExists));
    }

    #[test]
    fn create_empty_file_truncates() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("main.tf");
        std::fs::write(&file, "provider \"aws\" {}").unwrap();

        fs.create_empty_file(&file).unwrap();
        assert_eq!(std::fs::metadata(&file).unwrap().len(), 0);
    }

    #[test]
    fn create_empty_file_without_parent() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert_eq!(
            fs.create_empty_file(&temp.path().join("static/css/main.css")),
            Err(FsFailure::ParentMissing)
        );
    }

    #[test]
    fn file_over_directory_is_other_failure() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("static");
        fs.create_dir(&dir).unwrap();

        assert!(matches!(
            fs.create_empty_file(&dir),
            Err(FsFailure::Other { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn directory_mode_is_requested_before_umask() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("foo");
        fs.create_dir(&dir).unwrap();

        let mode = std::fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        // The owner bits survive any sane umask.
        assert_eq!(mode & 0o700, 0o700);
    }
}
