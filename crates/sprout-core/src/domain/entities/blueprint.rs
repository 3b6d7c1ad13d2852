use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    error::{DomainError, LayoutIssue},
    value_objects::ScaffoldKind,
};

/// The ordered directory and file lists a scaffold run materialises.
///
/// Directories are created one level at a time, in order, so a directory's
/// parent must be the project root or appear earlier in the list. Files are
/// created after every directory and are always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blueprint {
    name: String,
    description: String,
    kind: Option<ScaffoldKind>,
    directories: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl Blueprint {
    /// An empty blueprint with no built-in kind (a custom layout).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind: None,
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// The built-in blueprint for `kind`.
    pub fn builtin(kind: ScaffoldKind) -> Self {
        Self {
            name: kind.as_str().to_string(),
            description: kind.description().to_string(),
            kind: Some(kind),
            directories: kind.directories().iter().map(PathBuf::from).collect(),
            files: kind.files().iter().map(PathBuf::from).collect(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_directories<I, P>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.directories.extend(directories.into_iter().map(Into::into));
        self
    }

    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn kind(&self) -> Option<ScaffoldKind> {
        self.kind
    }

    pub fn is_builtin(&self) -> bool {
        self.kind.is_some()
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Every structural issue in this blueprint, in list order.
    pub fn issues(&self) -> Vec<LayoutIssue> {
        let mut issues = Vec::new();

        if self.directories.is_empty() && self.files.is_empty() {
            issues.push(LayoutIssue::Empty);
            return issues;
        }

        let mut seen = HashSet::new();
        let mut created_dirs: HashSet<&Path> = HashSet::new();

        for dir in &self.directories {
            if let Some(issue) = path_shape_issue(dir) {
                issues.push(issue);
                continue;
            }
            if !seen.insert(dir.as_path()) {
                issues.push(LayoutIssue::DuplicatePath { path: dir.clone() });
                continue;
            }
            if let Some(parent) = non_root_parent(dir) {
                if !created_dirs.contains(parent) {
                    issues.push(LayoutIssue::DirectoryBeforeParent {
                        path: dir.clone(),
                        parent: parent.to_path_buf(),
                    });
                }
            }
            created_dirs.insert(dir.as_path());
        }

        for file in &self.files {
            if let Some(issue) = path_shape_issue(file) {
                issues.push(issue);
                continue;
            }
            if !seen.insert(file.as_path()) {
                issues.push(LayoutIssue::DuplicatePath { path: file.clone() });
                continue;
            }
            if let Some(parent) = non_root_parent(file) {
                if !created_dirs.contains(parent) {
                    issues.push(LayoutIssue::FileWithoutDirectory {
                        path: file.clone(),
                        parent: parent.to_path_buf(),
                    });
                }
            }
        }

        issues
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidBlueprint {
                name: self.name.clone(),
                issues,
            })
        }
    }
}

fn path_shape_issue(path: &Path) -> Option<LayoutIssue> {
    if path.as_os_str().is_empty() {
        return Some(LayoutIssue::EmptyPath);
    }
    if path.is_absolute() || path.has_root() {
        return Some(LayoutIssue::AbsolutePath {
            path: path.to_path_buf(),
        });
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Some(LayoutIssue::ParentTraversal {
            path: path.to_path_buf(),
        });
    }
    None
}

/// The parent directory of `path`, or `None` when it sits directly in the root.
fn non_root_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
