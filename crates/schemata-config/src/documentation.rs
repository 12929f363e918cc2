//! Schema documentation link configuration.

use schemata_core::urls::DEFAULT_DOCUMENTATION_TEMPLATE;
use serde::{Deserialize, Serialize};

fn default_url_template() -> String {
    String::from(DEFAULT_DOCUMENTATION_TEMPLATE)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentationConfig {
    /// Documentation page template; `{name}` is replaced by the schema name.
    #[serde(default = "default_url_template")]
    pub url_template: String,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
        }
    }
}
