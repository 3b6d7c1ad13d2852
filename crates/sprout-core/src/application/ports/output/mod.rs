//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sprout-adapters` crate provides implementations.

use std::path::Path;

use thiserror::Error;

use crate::domain::{Blueprint, FsFailure};
use crate::error::SproutResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
/// - `sprout_adapters::filesystem::MemoryFilesystem` (dry runs, checks, tests)
///
/// ## Design Notes
///
/// - Every path is absolute or relative to the caller's base, never to the
///   process working directory of a previous call
/// - Creation is single-level; implementations must not create parents
pub trait Filesystem: Send + Sync {
    /// Create exactly one directory level.
    fn create_dir(&self, path: &Path) -> Result<(), FsFailure>;

    /// Create an empty file, truncating it if it already exists.
    fn create_empty_file(&self, path: &Path) -> Result<(), FsFailure>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// A repository initialisation that did not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{command}` failed: {message}")]
pub struct VcsFailure {
    pub command: String,
    pub message: String,
}

/// Port for version-control initialisation.
///
/// Implemented by:
/// - `sprout_adapters::vcs::GitCli` (runs `git init`)
/// - `sprout_adapters::vcs::RecordingVcs` (dry runs, tests)
pub trait VersionControl: Send + Sync {
    /// Short name of the tool, for logs.
    fn name(&self) -> &str;

    /// Initialise a repository in `dir`.
    fn init(&self, dir: &Path) -> Result<(), VcsFailure>;
}

/// Port for blueprint lookup.
///
/// Implemented by:
/// - `sprout_adapters::catalog::InMemoryCatalog` (built-ins + config layouts)
pub trait BlueprintCatalog: Send + Sync {
    /// Get a blueprint by name.
    fn get(&self, name: &str) -> SproutResult<Blueprint>;

    /// List all blueprints, built-ins first.
    fn list(&self) -> SproutResult<Vec<Blueprint>>;

    /// Register a custom layout.
    fn insert(&self, blueprint: Blueprint) -> SproutResult<()>;
}
