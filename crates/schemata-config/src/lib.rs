//! # schemata-config
//!
//! Layered configuration loading for Schemata using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCHEMATA_*` prefix, `__` as separator)
//! 2. Project-level `.schemata/config.toml`
//! 3. User-level `~/.config/schemata/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SCHEMATA_CATALOG__URL` -> `catalog.url`,
//! `SCHEMATA_PLUGIN__VARIANT` -> `plugin.variant`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use schemata_config::SchemataConfig;
//!
//! let config = SchemataConfig::load_with_dotenv().expect("config");
//! println!("catalog: {}", config.catalog.url);
//! ```

mod catalog;
mod documentation;
mod error;
mod plugin;
mod theme;
mod validation;

pub use catalog::CatalogConfig;
pub use documentation::DocumentationConfig;
pub use error::ConfigError;
pub use plugin::{PluginConfig, PluginVariant};
pub use theme::ThemeConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use schemata_core::urls::{NAME_PLACEHOLDER, UrlBuilder};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchemataConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub documentation: DocumentationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub plugin: PluginConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SchemataConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::figment())
    }

    /// Extract and validate configuration from an explicit provider chain.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_from(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading the nearest `.env` file.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_user_config(Self::global_config_path())
    }

    /// Provider chain with an explicit user-level config file; `None` skips
    /// that layer entirely.
    #[must_use]
    pub fn figment_with_user_config(user_config: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = user_config {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".schemata/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SCHEMATA_").split("__"))
    }

    /// Reject values that would produce broken links or a useless cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.validation.base_url.trim().is_empty() {
            return Err(invalid("validation.base_url", "must not be empty"));
        }
        if !self.documentation.url_template.contains(NAME_PLACEHOLDER) {
            return Err(invalid(
                "documentation.url_template",
                "must contain the {name} placeholder",
            ));
        }
        if self.catalog.url.trim().is_empty() {
            return Err(invalid("catalog.url", "must not be empty"));
        }
        if self.catalog.cache_ttl_secs == 0 {
            return Err(invalid("catalog.cache_ttl_secs", "must be greater than zero"));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(invalid("catalog.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Link builder for the configured validator and documentation site.
    #[must_use]
    pub fn url_builder(&self) -> UrlBuilder {
        UrlBuilder::new(
            &self.validation.base_url,
            &self.validation.schema_name_prefix,
            &self.documentation.url_template,
        )
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("schemata").join("config.toml"))
    }

    /// Walks up from `CARGO_MANIFEST_DIR` (crate -> crates/ -> root) looking
    /// for a `.env`, then falls back to the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
