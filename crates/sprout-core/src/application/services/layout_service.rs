//! Layout Service - blueprint catalog queries and structural checks.
//!
//! Separated from ScaffoldService for single responsibility: nothing here
//! touches the filesystem.

use serde::Serialize;

use crate::{
    application::ports::BlueprintCatalog,
    domain::{Blueprint, DomainValidator as validator, LayoutIssue},
    error::SproutResult,
};

/// Information about a blueprint for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutInfo {
    pub name: String,
    pub description: String,
    pub builtin: bool,
    pub directories: usize,
    pub files: usize,
}

impl From<&Blueprint> for LayoutInfo {
    fn from(blueprint: &Blueprint) -> Self {
        Self {
            name: blueprint.name().to_string(),
            description: blueprint.description().to_string(),
            builtin: blueprint.is_builtin(),
            directories: blueprint.directories().len(),
            files: blueprint.files().len(),
        }
    }
}

/// Service for blueprint lookup.
pub struct LayoutService {
    catalog: Box<dyn BlueprintCatalog>,
}

impl LayoutService {
    /// Create a new layout service.
    pub fn new(catalog: Box<dyn BlueprintCatalog>) -> Self {
        Self { catalog }
    }

    /// Get a blueprint by name, refusing structurally invalid ones.
    pub fn resolve(&self, name: &str) -> SproutResult<Blueprint> {
        let blueprint = self.catalog.get(name)?;
        validator::validate_blueprint(&blueprint)?;
        Ok(blueprint)
    }

    /// Display metadata for every blueprint.
    pub fn list_info(&self) -> SproutResult<Vec<LayoutInfo>> {
        Ok(self.catalog.list()?.iter().map(LayoutInfo::from).collect())
    }

    /// Structural issues of every blueprint, or only of `name` when given.
    pub fn check(&self, name: Option<&str>) -> SproutResult<Vec<(Blueprint, Vec<LayoutIssue>)>> {
        let blueprints = match name {
            Some(name) => vec![self.catalog.get(name)?],
            None => self.catalog.list()?,
        };

        Ok(blueprints
            .into_iter()
            .map(|b| {
                let issues = b.issues();
                (b, issues)
            })
            .collect())
    }
}
