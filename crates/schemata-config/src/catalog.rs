//! Remote schema catalog configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    String::from("https://schema.data.gouv.fr/schemas.json")
}

const fn default_cache_ttl_secs() -> u64 {
    600
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Endpoint serving `{"schemas": [...]}`.
    #[serde(default = "default_url")]
    pub url: String,

    /// How long a successful catalog response is reused.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// HTTP timeout for the catalog request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
