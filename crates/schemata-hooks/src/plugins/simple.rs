use std::sync::Arc;

use futures::future::BoxFuture;
use minijinja::context;
use schemata_core::urls::UrlBuilder;

use super::SchemaButton;
use crate::context::HookContext;
use crate::error::HookError;
use crate::links::ModalLinks;
use crate::predicates::{dataset_has_schema, resource_has_schema};
use crate::registry::{EXTRA_BUTTONS, HookRegistry, HookRenderer, MODALS};
use crate::theme::{MODAL_TEMPLATE, TemplateRenderer};

/// Hooks that offer validation for every declared schema.
#[derive(Debug, Clone)]
pub struct SimplePlugin {
    urls: UrlBuilder,
}

impl SimplePlugin {
    #[must_use]
    pub const fn new(urls: UrlBuilder) -> Self {
        Self { urls }
    }

    pub fn install(self, registry: &mut HookRegistry) {
        registry.register(
            EXTRA_BUTTONS,
            "schema-button",
            Some(resource_has_schema),
            Arc::new(SchemaButton),
        );
        registry.register(
            MODALS,
            "schema-modal",
            Some(dataset_has_schema),
            Arc::new(SimpleModal { urls: self.urls }),
        );
    }
}

#[derive(Debug, Clone)]
pub struct SimpleModal {
    urls: UrlBuilder,
}

impl HookRenderer for SimpleModal {
    fn render<'a>(
        &'a self,
        ctx: &'a HookContext,
        templates: &'a dyn TemplateRenderer,
    ) -> BoxFuture<'a, Result<String, HookError>> {
        Box::pin(async move {
            let dataset = ctx.dataset.as_ref().ok_or(HookError::MissingContext {
                hook: "schema-modal",
                missing: "dataset",
            })?;
            let links = ModalLinks::simple(dataset, &self.urls);
            templates.render(
                MODAL_TEMPLATE,
                context! {
                    dataset => dataset,
                    documentation_urls => links.documentation_urls,
                    validation_urls => links.validation_urls,
                },
            )
        })
    }
}
