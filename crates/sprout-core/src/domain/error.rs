// ============================================================================
// domain/error.rs - DOMAIN ERRORS AND LAYOUT ISSUES
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown scaffold kind '{0}'")]
    UnknownScaffoldKind(String),

    #[error("invalid root name '{name}': {reason}")]
    InvalidRootName { name: String, reason: String },

    #[error("blueprint '{name}' has {} issue(s)", issues.len())]
    InvalidBlueprint {
        name: String,
        issues: Vec<LayoutIssue>,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownScaffoldKind(kind) => vec![
                format!("'{}' is not a built-in scaffold kind", kind),
                "Built-in kinds: terraform (tf), python (py), html (web)".into(),
                "Custom layouts are selected with --layout instead".into(),
            ],
            Self::InvalidRootName { name, reason } => vec![
                format!("Root name '{}' is invalid: {}", name, reason),
                "Use a single directory name such as 'foo' or 'my-infra'".into(),
            ],
            Self::InvalidBlueprint { issues, .. } => issues
                .iter()
                .map(|issue| format!("  • {issue}"))
                .chain(std::iter::once(
                    "Run 'sprout check' to validate every layout".to_string(),
                ))
                .collect(),
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownScaffoldKind(_) => ErrorCategory::NotFound,
            Self::InvalidRootName { .. } | Self::InvalidBlueprint { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

/// A structural problem in a blueprint's path lists.
///
/// These are collected rather than short-circuited so that `sprout check`
/// can report every problem in one pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutIssue {
    #[error("layout creates nothing (both 'dirs' and 'files' are empty)")]
    Empty,

    #[error("empty path entry")]
    EmptyPath,

    #[error("absolute paths not allowed: {path}")]
    AbsolutePath { path: PathBuf },

    #[error("path escapes the project root: {path}")]
    ParentTraversal { path: PathBuf },

    #[error("duplicate path: {path}")]
    DuplicatePath { path: PathBuf },

    #[error("directory '{path}' is listed before its parent '{parent}'")]
    DirectoryBeforeParent { path: PathBuf, parent: PathBuf },

    #[error("file '{path}' lives in '{parent}', which is not a listed directory")]
    FileWithoutDirectory { path: PathBuf, parent: PathBuf },
}
