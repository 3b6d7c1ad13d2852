//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.
//!
//! Per-path filesystem failures and version-control failures are *not*
//! errors at this level: they are recorded in the `ScaffoldReport`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No blueprint is registered under the requested name.
    #[error("No layout named '{name}'")]
    LayoutNotFound {
        name: String,
        available: Vec<String>,
    },

    /// A custom layout tried to reuse an existing name. `builtin` is set
    /// when the name (or alias) belongs to a built-in kind.
    #[error("Layout '{name}' is already defined")]
    LayoutConflict { name: String, builtin: bool },

    /// Catalog access failed (lock poisoned).
    #[error("Blueprint catalog is unavailable")]
    CatalogLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LayoutNotFound { name, available } => {
                let mut suggestions = vec![format!("'{}' is not a known layout", name)];
                if !available.is_empty() {
                    suggestions.push(format!("Available layouts: {}", available.join(", ")));
                }
                suggestions.push("Try: sprout list".into());
                suggestions
            }
            Self::LayoutConflict { name, builtin: true } => vec![
                format!("'{}' is a built-in kind and cannot be redefined", name),
                "Rename the [layouts] table in your configuration file".into(),
            ],
            Self::LayoutConflict {
                name,
                builtin: false,
            } => vec![
                format!("A layout named '{}' is already registered", name),
                "Give each [layouts] table a unique name".into(),
            ],
            Self::CatalogLockError => vec![
                "The blueprint catalog is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LayoutNotFound { .. } => ErrorCategory::NotFound,
            Self::LayoutConflict { .. } => ErrorCategory::Configuration,
            Self::CatalogLockError => ErrorCategory::Internal,
        }
    }
}
