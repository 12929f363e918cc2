use schemata_config::SchemataConfig;

use crate::cli::{ConfigCommands, GlobalFlags};
use crate::output::output;

/// Handle `schemata config`.
pub fn handle(
    action: &ConfigCommands,
    config: &SchemataConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Show => output(config, flags.format),
    }
}
