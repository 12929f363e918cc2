//! Per-resource link maps handed to the modal template.

use std::collections::BTreeMap;

use schemata_catalog::{is_table_schema, schema_url_for};
use schemata_core::entities::{CatalogEntry, Dataset};
use schemata_core::urls::UrlBuilder;
use serde::Serialize;

/// Links for every resource of a dataset that declares a schema, keyed by
/// resource id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModalLinks {
    pub documentation_urls: BTreeMap<String, String>,
    pub validation_urls: BTreeMap<String, String>,
    /// Only computed by the catalog-aware plugin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorize_validation: Option<BTreeMap<String, bool>>,
}

impl ModalLinks {
    /// Every schema gets a name-based validation link.
    #[must_use]
    pub fn simple(dataset: &Dataset, urls: &UrlBuilder) -> Self {
        let mut links = Self::default();
        for resource in dataset.resources_with_schema() {
            let name = resource.schema_name().unwrap_or_default();
            links
                .validation_urls
                .insert(resource.id.clone(), urls.simple_validation_url(resource));
            links
                .documentation_urls
                .insert(resource.id.clone(), urls.documentation_url(name));
        }
        links
    }

    /// Validation is only offered for catalog table schemas. A pinned version
    /// found in the catalog validates against that exact document; otherwise
    /// the link falls back to the schema name.
    #[must_use]
    pub fn from_catalog(dataset: &Dataset, urls: &UrlBuilder, catalog: &[CatalogEntry]) -> Self {
        let mut links = Self::default();
        let mut authorize = BTreeMap::new();
        for resource in dataset.resources_with_schema() {
            let Some(schema) = resource.schema.as_ref() else {
                continue;
            };
            let eligible = is_table_schema(catalog, schema.name());
            authorize.insert(resource.id.clone(), eligible);

            if eligible {
                let schema_url = schema
                    .version()
                    .and_then(|version| schema_url_for(catalog, schema.name(), version));
                if schema.version().is_some() && schema_url.is_none() {
                    tracing::debug!(
                        schema = schema.name(),
                        version = schema.version(),
                        "pinned version not in catalog, validating by name"
                    );
                }
                links.validation_urls.insert(
                    resource.id.clone(),
                    urls.validation_url(resource, schema_url),
                );
            }

            links
                .documentation_urls
                .insert(resource.id.clone(), urls.documentation_url(schema.name()));
        }
        links.authorize_validation = Some(authorize);
        links
    }
}
