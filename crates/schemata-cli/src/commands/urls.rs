use schemata_config::{PluginVariant, SchemataConfig};
use schemata_hooks::ModalLinks;

use crate::cli::{GlobalFlags, UrlsArgs};
use crate::context::{build_catalog, read_dataset};
use crate::output::output;

/// Handle `schemata urls`.
pub async fn handle(
    args: &UrlsArgs,
    config: &SchemataConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dataset = read_dataset(&args.dataset)?;
    let urls = config.url_builder();

    let links = match config.plugin.variant {
        PluginVariant::Simple => ModalLinks::simple(&dataset, &urls),
        PluginVariant::Catalog => {
            let schemas = build_catalog(config)?.load().await?;
            ModalLinks::from_catalog(&dataset, &urls, &schemas)
        }
    };

    output(&links, flags.format)
}
