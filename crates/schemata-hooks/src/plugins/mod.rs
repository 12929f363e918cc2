//! The two deployable hook sets.
//!
//! Both register a button on [`EXTRA_BUTTONS`](crate::registry::EXTRA_BUTTONS)
//! and a modal on [`MODALS`](crate::registry::MODALS). They differ only in how
//! the modal decides which validation links to show.

mod button;
mod catalog;
mod simple;

use std::sync::Arc;

use schemata_catalog::CatalogSource;
use schemata_config::{PluginVariant, SchemataConfig};

pub use button::SchemaButton;
pub use catalog::{CatalogModal, CatalogPlugin};
pub use simple::{SimpleModal, SimplePlugin};

use crate::registry::HookRegistry;

/// Register the hooks of the configured variant.
///
/// Only one variant is installed per registry. The catalog source is ignored
/// by the simple variant.
pub fn install(
    registry: &mut HookRegistry,
    config: &SchemataConfig,
    catalog: Arc<dyn CatalogSource>,
) {
    let urls = config.url_builder();
    match config.plugin.variant {
        PluginVariant::Simple => SimplePlugin::new(urls).install(registry),
        PluginVariant::Catalog => CatalogPlugin::new(urls, catalog).install(registry),
    }
    tracing::info!(variant = ?config.plugin.variant, "schema hooks installed");
}
