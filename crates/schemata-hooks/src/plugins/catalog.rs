use std::sync::Arc;

use futures::future::BoxFuture;
use minijinja::context;
use schemata_catalog::CatalogSource;
use schemata_core::urls::UrlBuilder;

use super::SchemaButton;
use crate::context::HookContext;
use crate::error::HookError;
use crate::links::ModalLinks;
use crate::predicates::{dataset_has_schema, resource_has_schema};
use crate::registry::{EXTRA_BUTTONS, HookRegistry, HookRenderer, MODALS};
use crate::theme::{MODAL_TEMPLATE, TemplateRenderer};

/// Hooks that consult the schema catalog before offering validation.
#[derive(Clone)]
pub struct CatalogPlugin {
    urls: UrlBuilder,
    catalog: Arc<dyn CatalogSource>,
}

impl CatalogPlugin {
    #[must_use]
    pub fn new(urls: UrlBuilder, catalog: Arc<dyn CatalogSource>) -> Self {
        Self { urls, catalog }
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
            Arc::new(CatalogModal {
                urls: self.urls,
                catalog: self.catalog,
            }),
        );
    }
}

pub struct CatalogModal {
    urls: UrlBuilder,
    catalog: Arc<dyn CatalogSource>,
}

impl HookRenderer for CatalogModal {
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
            let schemas = self.catalog.schemas().await?;
            let links = ModalLinks::from_catalog(dataset, &self.urls, &schemas);
            templates.render(
                MODAL_TEMPLATE,
                context! {
                    dataset => dataset,
                    documentation_urls => links.documentation_urls,
                    validation_urls => links.validation_urls,
                    authorize_validation => links.authorize_validation,
                },
            )
        })
    }
}
