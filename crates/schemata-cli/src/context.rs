use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use schemata_catalog::{CachedCatalog, CatalogClient};
use schemata_config::SchemataConfig;
use schemata_core::entities::Dataset;
use schemata_hooks::{HookRegistry, Theme};

/// Everything a render needs, built once from configuration.
pub struct AppContext {
    pub registry: HookRegistry,
    pub theme: Theme,
}

impl AppContext {
    pub fn init(config: &SchemataConfig) -> anyhow::Result<Self> {
        let catalog = Arc::new(build_catalog(config)?);
        let mut registry = HookRegistry::new();
        schemata_hooks::install(&mut registry, config, catalog);
        let theme = Theme::from_config(&config.theme).context("failed to load theme")?;
        Ok(Self {
            registry,
            theme,
        })
    }
}

pub fn build_catalog(config: &SchemataConfig) -> anyhow::Result<CachedCatalog> {
    let client = CatalogClient::new(config.catalog.timeout())
        .context("failed to build catalog HTTP client")?;
    Ok(CachedCatalog::new(
        client,
        &config.catalog.url,
        config.catalog.cache_ttl(),
    ))
}

pub fn read_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file {}", path.display()))?;
    Ok(Dataset::from_json(&raw)?)
}
