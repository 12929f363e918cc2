use serde::Serialize;

use schemata_config::SchemataConfig;
use schemata_hooks::HookContext;

use crate::cli::{GlobalFlags, RenderArgs};
use crate::context::{AppContext, read_dataset};
use crate::output::output;

#[derive(Debug, Serialize)]
struct RenderResponse {
    point: String,
    hooks: usize,
    fragments: Vec<String>,
}

/// Handle `schemata render`.
pub async fn handle(
    args: &RenderArgs,
    config: &SchemataConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let app = AppContext::init(config)?;
    let dataset = read_dataset(&args.dataset)?;

    let mut ctx = HookContext::for_dataset(dataset);
    if let Some(id) = &args.resource {
        let resource = ctx
            .dataset
            .as_ref()
            .map(|d| d.resource(id).cloned())
            .transpose()?;
        ctx.resource = resource;
    }

    let fragments = app.registry.render(&args.point, &ctx, &app.theme).await?;
    output(
        &RenderResponse {
            point: args.point.clone(),
            hooks: app.registry.hooks(&args.point).len(),
            fragments,
        },
        flags.format,
    )
}
