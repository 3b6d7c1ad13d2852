//! In-memory blueprint catalog with built-in kinds.

use std::{
    str::FromStr,
    sync::{Arc, RwLock},
};

use tracing::debug;

use sprout_core::{
    application::{ApplicationError, ports::BlueprintCatalog},
    domain::{Blueprint, ScaffoldKind},
    error::SproutResult,
};

/// Thread-safe in-memory catalog.
///
/// Blueprints keep their insertion order, so built-ins registered by
/// [`InMemoryCatalog::with_builtin`] always list first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Vec<Blueprint>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with every built-in kind registered.
    pub fn with_builtin() -> Self {
        let blueprints = ScaffoldKind::ALL.into_iter().map(Blueprint::builtin).collect();
        Self {
            inner: Arc::new(RwLock::new(blueprints)),
        }
    }
}

impl BlueprintCatalog for InMemoryCatalog {
    fn get(&self, name: &str) -> SproutResult<Blueprint> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        if let Some(found) = inner.iter().find(|b| b.name() == name) {
            return Ok(found.clone());
        }

        // Built-in aliases such as `tf` or `py`.
        if let Ok(kind) = ScaffoldKind::from_str(name) {
            if let Some(found) = inner.iter().find(|b| b.kind() == Some(kind)) {
                return Ok(found.clone());
            }
        }

        Err(ApplicationError::LayoutNotFound {
            name: name.to_string(),
            available: inner.iter().map(|b| b.name().to_string()).collect(),
        }
        .into())
    }

    fn list(&self) -> SproutResult<Vec<Blueprint>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        Ok(inner.clone())
    }

    fn insert(&self, blueprint: Blueprint) -> SproutResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        let builtin = ScaffoldKind::from_str(blueprint.name()).is_ok();
        if builtin || inner.iter().any(|b| b.name() == blueprint.name()) {
            return Err(ApplicationError::LayoutConflict {
                name: blueprint.name().to_string(),
                builtin,
            }
            .into());
        }

        debug!(layout = blueprint.name(), "Layout registered");
        inner.push(blueprint);
        Ok(())
    }
}
