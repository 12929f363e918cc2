mod catalog;
mod config;
mod render;
mod urls;

use schemata_config::SchemataConfig;

use crate::cli::{Commands, GlobalFlags};

pub async fn dispatch(
    command: Commands,
    config: &SchemataConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Render(args) => render::handle(&args, config, flags).await,
        Commands::Urls(args) => urls::handle(&args, config, flags).await,
        Commands::Catalog { action } => catalog::handle(&action, config, flags).await,
        Commands::Config { action } => config::handle(&action, config, flags),
    }
}
