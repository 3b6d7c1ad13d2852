use std::path::{Component, Path};

use crate::domain::{entities::Blueprint, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_blueprint(blueprint: &Blueprint) -> Result<(), DomainError> {
        blueprint.validate()
    }

    /// A root name must be exactly one normal path component.
    pub fn validate_root_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidRootName {
            name: name.into(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators (use --path)"));
        }

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(invalid("name must be a plain directory name")),
        }
    }
}
