//! Validation service configuration.

use schemata_core::urls::{DEFAULT_SCHEMA_NAME_PREFIX, DEFAULT_VALIDATION_BASE};
use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from(DEFAULT_VALIDATION_BASE)
}

fn default_schema_name_prefix() -> String {
    String::from(DEFAULT_SCHEMA_NAME_PREFIX)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Base URL of the validation service (`/table-schema` is appended).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Prefix added in front of schema names in `schema_name=` links.
    #[serde(default = "default_schema_name_prefix")]
    pub schema_name_prefix: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            schema_name_prefix: default_schema_name_prefix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_validator() {
        let config = ValidationConfig::default();
        assert_eq!(config.base_url, "https://validata.etalab.studio");
        assert_eq!(config.schema_name_prefix, "schema-datagouvfr.");
    }
}
