use anyhow::bail;
use schemata_catalog::find_entry;
use schemata_config::SchemataConfig;

use crate::cli::{CatalogCommands, GlobalFlags};
use crate::context::build_catalog;
use crate::output::output;

/// Handle `schemata catalog`.
pub async fn handle(
    action: &CatalogCommands,
    config: &SchemataConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let catalog = build_catalog(config)?;
    let schemas = catalog.load().await?;

    match action {
        CatalogCommands::List => output(&*schemas, flags.format),
        CatalogCommands::Show { name } => match find_entry(&schemas, name) {
            Some(entry) => output(entry, flags.format),
            None => bail!("schema '{name}' is not in the catalog at {}", catalog.url()),
        },
    }
}
