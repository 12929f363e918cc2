//! Rendering both extension points the way a host page would.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use schemata_catalog::{CachedCatalog, CatalogClient, StaticCatalog};
use schemata_config::{PluginVariant, SchemataConfig};
use schemata_core::entities::{CatalogEntry, Dataset, SchemaVersion};
use schemata_hooks::{EXTRA_BUTTONS, HookContext, HookError, HookRegistry, MODALS, Theme, install};
use serde_json::json;

const DATASET: &str = r#"{
    "id": "ds-1",
    "title": "Electric vehicle charging",
    "resources": [
        {"id": "aaaa-1111", "url": "https://data.test/irve.csv", "title": "IRVE",
         "schema": {"name": "foo", "version": "1.0"}},
        {"id": "bbbb-2222", "url": "https://data.test/other.json",
         "schema": {"name": "geo"}},
        {"id": "cccc-3333", "url": "https://data.test/readme.txt"}
    ]
}"#;

/// Undo minijinja's HTML attribute escaping so assertions can use plain URLs.
fn unescape(html: &str) -> String {
    html.replace("&#x2f;", "/")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn catalog_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            name: "foo".into(),
            schema_type: "tableschema".into(),
            title: None,
            versions: vec![SchemaVersion {
                version_name: "1.0".into(),
                schema_url: "https://x/1.0.json".into(),
            }],
        },
        CatalogEntry {
            name: "geo".into(),
            schema_type: "jsonschema".into(),
            title: None,
            versions: vec![],
        },
    ]
}

fn registry(variant: PluginVariant, catalog: StaticCatalog) -> HookRegistry {
    let mut config = SchemataConfig::default();
    config.plugin.variant = variant;
    let mut registry = HookRegistry::new();
    install(&mut registry, &config, Arc::new(catalog));
    registry
}

fn dataset() -> Dataset {
    Dataset::from_json(DATASET).unwrap()
}

#[tokio::test]
async fn catalog_modal_pins_version_and_hides_ineligible_validation() {
    let registry = registry(PluginVariant::Catalog, StaticCatalog::new(catalog_entries()));
    let fragments = registry
        .render(MODALS, &HookContext::for_dataset(dataset()), &Theme::new())
        .await
        .unwrap();

    assert_eq!(fragments.len(), 1);
    let html = unescape(&fragments[0]);
    assert!(html.contains("id=\"schema-modal-aaaa1111\""));
    assert!(html.contains("id=\"schema-modal-bbbb2222\""));
    assert!(!html.contains("schema-modal-cccc3333"));
    assert!(html.contains("schema_url=https%3A%2F%2Fx%2F1.0.json"));
    assert!(html.contains("https://schema.data.gouv.fr/geo/latest.html"));
    assert_eq!(html.matches("class=\"schema-validation\"").count(), 1);
    assert_eq!(html.matches("class=\"schema-documentation\"").count(), 2);
}

#[tokio::test]
async fn simple_modal_offers_validation_for_every_schema() {
    let registry = registry(PluginVariant::Simple, StaticCatalog::empty());
    let fragments = registry
        .render(MODALS, &HookContext::for_dataset(dataset()), &Theme::new())
        .await
        .unwrap();

    let html = unescape(&fragments[0]);
    assert_eq!(html.matches("class=\"schema-validation\"").count(), 2);
    assert!(html.contains("schema_name=schema-datagouvfr.foo"));
    assert!(html.contains("schema_name=schema-datagouvfr.geo"));
    assert!(!html.contains("schema_url="));
}

#[tokio::test]
async fn empty_catalog_means_no_validation_links() {
    let registry = registry(PluginVariant::Catalog, StaticCatalog::empty());
    let fragments = registry
        .render(MODALS, &HookContext::for_dataset(dataset()), &Theme::new())
        .await
        .unwrap();
    let html = unescape(&fragments[0]);
    assert!(!html.contains("schema-validation"));
    assert_eq!(html.matches("class=\"schema-documentation\"").count(), 2);
}

#[tokio::test]
async fn button_renders_only_for_resources_with_schema() {
    let registry = registry(PluginVariant::Catalog, StaticCatalog::empty());
    let theme = Theme::new();
    let dataset = dataset();

    let with_schema = HookContext::for_dataset(dataset.clone())
        .with_resource(dataset.resources[0].clone());
    let fragments = registry
        .render(EXTRA_BUTTONS, &with_schema, &theme)
        .await
        .unwrap();
    assert_eq!(fragments.len(), 1);
    assert!(fragments[0].contains("id=\"schema-button-aaaa1111\""));
    assert!(fragments[0].contains("Schema: foo"));

    let without_schema =
        HookContext::for_dataset(dataset.clone()).with_resource(dataset.resources[2].clone());
    let fragments = registry
        .render(EXTRA_BUTTONS, &without_schema, &theme)
        .await
        .unwrap();
    assert!(fragments.is_empty());
}

#[tokio::test]
async fn dataset_without_schemas_renders_no_modal() {
    let registry = registry(PluginVariant::Catalog, StaticCatalog::empty());
    let dataset = Dataset::from_json(
        r#"{"id": "ds", "resources": [{"id": "a", "url": "https://data.test/a.csv"}]}"#,
    )
    .unwrap();
    let fragments = registry
        .render(MODALS, &HookContext::for_dataset(dataset), &Theme::new())
        .await
        .unwrap();
    assert!(fragments.is_empty());
}

#[tokio::test]
async fn catalog_is_fetched_once_across_page_renders() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/schemas.json");
            then.status(200).json_body(json!({
                "schemas": [{
                    "name": "foo",
                    "schema_type": "tableschema",
                    "versions": [{"version_name": "1.0", "schema_url": "https://x/1.0.json"}]
                }]
            }));
        })
        .await;

    let config = SchemataConfig::default();
    let client = CatalogClient::new(Duration::from_secs(5)).unwrap();
    let catalog = CachedCatalog::new(
        client,
        server.url("/schemas.json"),
        config.catalog.cache_ttl(),
    );
    let mut registry = HookRegistry::new();
    install(&mut registry, &config, Arc::new(catalog));

    let theme = Theme::new();
    let ctx = HookContext::for_dataset(dataset());
    let first = registry.render(MODALS, &ctx, &theme).await.unwrap();
    let second = registry.render(MODALS, &ctx, &theme).await.unwrap();

    mock.assert_hits_async(1).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn catalog_failure_reaches_the_host() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/schemas.json");
            then.status(502).body("bad gateway");
        })
        .await;

    let config = SchemataConfig::default();
    let client = CatalogClient::new(Duration::from_secs(5)).unwrap();
    let catalog = CachedCatalog::new(client, server.url("/schemas.json"), config.catalog.cache_ttl());
    let mut registry = HookRegistry::new();
    install(&mut registry, &config, Arc::new(catalog));

    let err = registry
        .render(MODALS, &HookContext::for_dataset(dataset()), &Theme::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HookError::Catalog(_)), "{err}");
}
