// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sprout.
//!
//! This module contains pure logic with no I/O. Directory creation, file
//! creation and repository initialisation are reached through ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or network calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    blueprint::Blueprint,
    report::{EntryKind, FsFailure, PathOutcome, PathReport, ScaffoldReport, VcsOutcome},
};

pub use error::{DomainError, ErrorCategory, LayoutIssue};

pub use value_objects::ScaffoldKind;

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn scaffold_kind_parses_correctly() {
        assert_eq!(
            ScaffoldKind::from_str("terraform").unwrap(),
            ScaffoldKind::Terraform
        );
        assert_eq!(ScaffoldKind::from_str("TF").unwrap(), ScaffoldKind::Terraform);
        assert_eq!(ScaffoldKind::from_str("py").unwrap(), ScaffoldKind::Python);
        assert_eq!(ScaffoldKind::from_str(" Html ").unwrap(), ScaffoldKind::Html);
    }

    #[test]
    fn adoc_is_not_a_kind() {
        assert_eq!(
            ScaffoldKind::from_str("adoc"),
            Err(DomainError::UnknownScaffoldKind("adoc".into()))
        );
    }

    #[test]
    fn scaffold_kind_display_round_trips() {
        for kind in ScaffoldKind::ALL {
            assert_eq!(ScaffoldKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn terraform_files_are_the_five_conventional_files() {
        assert!(ScaffoldKind::Terraform.directories().is_empty());
        assert_eq!(
            ScaffoldKind::Terraform.files(),
            &[
                "main.tf",
                "outputs.tf",
                "providers.tf",
                "variables.tf",
                "versions.tf"
            ]
        );
    }

    #[test]
    fn html_directories_precede_their_children() {
        let dirs = ScaffoldKind::Html.directories();
        let pos = |p: &str| dirs.iter().position(|d| *d == p).unwrap();
        assert!(pos("static") < pos("static/css"));
        assert!(pos("static") < pos("static/js"));
        assert!(pos("assets") < pos("assets/images"));
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn root_name_accepts_plain_names() {
        for name in ["foo", "my-infra", "site_2", ".dotfiles"] {
            assert!(
                DomainValidator::validate_root_name(name).is_ok(),
                "failed for: {name}"
            );
        }
    }

    #[test]
    fn root_name_rejects_paths_and_specials() {
        for name in ["", "  ", "a/b", "a\\b", ".", ".."] {
            assert!(
                matches!(
                    DomainValidator::validate_root_name(name),
                    Err(DomainError::InvalidRootName { .. })
                ),
                "accepted: {name:?}"
            );
        }
    }

    #[test]
    fn invalid_blueprint_suggests_check() {
        let err = DomainValidator::validate_blueprint(&Blueprint::new("empty")).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("sprout check")));
    }
}
