use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Why the filesystem refused to create a single path.
///
/// Returned by the `Filesystem` port; the scaffold service turns it into a
/// [`PathOutcome`] instead of propagating it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsFailure {
    #[error("already exists")]
    AlreadyExists,

    #[error("parent directory does not exist")]
    ParentMissing,

    #[error("{reason}")]
    Other { reason: String },
}

/// Result of creating one directory or file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum PathOutcome {
    Created,
    AlreadyExists,
    ParentMissing,
    Failed { reason: String },
}

impl PathOutcome {
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created)
    }

    /// Anything other than `Created` or `AlreadyExists`.
    ///
    /// A pre-existing entry is what a re-run produces, so it is not counted
    /// as a failure.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::ParentMissing | Self::Failed { .. })
    }
}

impl From<Result<(), FsFailure>> for PathOutcome {
    fn from(result: Result<(), FsFailure>) -> Self {
        match result {
            Ok(()) => Self::Created,
            Err(FsFailure::AlreadyExists) => Self::AlreadyExists,
            Err(FsFailure::ParentMissing) => Self::ParentMissing,
            Err(FsFailure::Other { reason }) => Self::Failed { reason },
        }
    }
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::AlreadyExists => f.write_str("already exists"),
            Self::ParentMissing => f.write_str("parent missing"),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => f.write_str("dir"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Outcome for one relative path of a blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: PathOutcome,
}

impl PathReport {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind, outcome: PathOutcome) -> Self {
        Self {
            path: path.into(),
            kind,
            outcome,
        }
    }
}

/// What happened when the repository was initialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum VcsOutcome {
    Skipped,
    Initialized,
    Failed { message: String },
}

impl VcsOutcome {
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Everything a scaffold run did, step by step.
///
/// Steps never abort one another, so every list is always populated even
/// when the root directory itself could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub blueprint: String,
    pub root: PathBuf,
    pub root_outcome: PathOutcome,
    pub directories: Vec<PathReport>,
    pub files: Vec<PathReport>,
    pub vcs: VcsOutcome,
    pub baseline_files: Vec<PathReport>,
}

impl ScaffoldReport {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every per-path report, in creation order.
    pub fn entries(&self) -> impl Iterator<Item = &PathReport> {
        self.directories
            .iter()
            .chain(self.files.iter())
            .chain(self.baseline_files.iter())
    }

    /// Per-path reports that count as failures.
    pub fn failures(&self) -> impl Iterator<Item = &PathReport> {
        self.entries().filter(|r| r.outcome.is_failure())
    }

    pub fn created_count(&self) -> usize {
        self.entries().filter(|r| r.outcome.is_created()).count()
    }

    pub fn existing_count(&self) -> usize {
        self.entries()
            .filter(|r| r.outcome == PathOutcome::AlreadyExists)
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count() + usize::from(self.root_outcome.is_failure())
    }

    /// No path failed and version control did not fail.
    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0 && !self.vcs.is_failure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(files: Vec<PathReport>, vcs: VcsOutcome) -> ScaffoldReport {
        ScaffoldReport {
            blueprint: "terraform".into(),
            root: PathBuf::from("/tmp/foo"),
            root_outcome: PathOutcome::Created,
            directories: Vec::new(),
            files,
            vcs,
            baseline_files: Vec::new(),
        }
    }

    #[test]
    fn outcome_from_result() {
        assert_eq!(PathOutcome::from(Ok(())), PathOutcome::Created);
        assert_eq!(
            PathOutcome::from(Err(FsFailure::AlreadyExists)),
            PathOutcome::AlreadyExists
        );
        assert_eq!(
            PathOutcome::from(Err(FsFailure::Other {
                reason: "denied".into()
            })),
            PathOutcome::Failed {
                reason: "denied".into()
            }
        );
    }

    #[test]
    fn already_exists_is_not_a_failure() {
        assert!(!PathOutcome::AlreadyExists.is_failure());
        assert!(PathOutcome::ParentMissing.is_failure());
    }

    #[test]
    fn clean_report_counts() {
        let r = report(
            vec![
                PathReport::new("main.tf", EntryKind::File, PathOutcome::Created),
                PathReport::new("outputs.tf", EntryKind::File, PathOutcome::AlreadyExists),
            ],
            VcsOutcome::Initialized,
        );
        assert!(r.is_clean());
        assert_eq!(r.created_count(), 1);
        assert_eq!(r.existing_count(), 1);
    }

    #[test]
    fn vcs_failure_makes_report_unclean() {
        let r = report(
            Vec::new(),
            VcsOutcome::Failed {
                message: "git: not found".into(),
            },
        );
        assert_eq!(r.failure_count(), 0);
        assert!(!r.is_clean());
    }

    #[test]
    fn serialises_outcomes_with_status_tag() {
        let json = serde_json::to_value(PathReport::new(
            "static/js/main.js",
            EntryKind::File,
            PathOutcome::ParentMissing,
        ))
        .unwrap();
        assert_eq!(json["outcome"]["status"], "parent-missing");
        assert_eq!(json["kind"], "file");
    }
}
