use futures::future::BoxFuture;
use minijinja::context;

use crate::context::HookContext;
use crate::error::HookError;
use crate::registry::HookRenderer;
use crate::theme::{BUTTON_TEMPLATE, TemplateRenderer};

/// "Schema" button on a resource card.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaButton;

impl HookRenderer for SchemaButton {
    fn render<'a>(
        &'a self,
        ctx: &'a HookContext,
        templates: &'a dyn TemplateRenderer,
    ) -> BoxFuture<'a, Result<String, HookError>> {
        Box::pin(async move {
            let resource = ctx.resource.as_ref().ok_or(HookError::MissingContext {
                hook: "schema-button",
                missing: "resource",
            })?;
            templates.render(
                BUTTON_TEMPLATE,
                context! {
                    resource => resource,
                    id => resource.dom_id(),
                },
            )
        })
    }
}
