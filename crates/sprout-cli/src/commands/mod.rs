//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;

use sprout_adapters::InMemoryCatalog;
use sprout_core::application::{BlueprintCatalog, LayoutService};
use tracing::debug;

use crate::{config::AppConfig, error::CliResult};

/// Catalog of the built-in kinds plus every `[layouts.<name>]` table.
///
/// A layout that reuses a kind name or alias is a configuration error.
pub(crate) fn layout_service(config: &AppConfig) -> CliResult<LayoutService> {
    let catalog = InMemoryCatalog::with_builtin();
    for blueprint in config.layout_blueprints() {
        debug!(layout = blueprint.name(), "Registering custom layout");
        catalog.insert(blueprint)?;
    }
    Ok(LayoutService::new(Box::new(catalog)))
}
