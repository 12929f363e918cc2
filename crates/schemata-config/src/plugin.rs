//! Which hook set gets installed.

use serde::{Deserialize, Serialize};

/// The two deployable flavours of the schema hooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginVariant {
    /// Validation links for every schema, no catalog lookup.
    Simple,
    /// Validation gated on the remote catalog, with version pinning.
    #[default]
    Catalog,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub variant: PluginVariant,
}
