use serde::{Deserialize, Serialize};

/// `schema_type` of schemas that the tabular validator understands.
pub const TABLE_SCHEMA: &str = "tableschema";

/// One schema registered in the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub schema_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub versions: Vec<SchemaVersion>,
}

impl CatalogEntry {
    #[must_use]
    pub fn is_table_schema(&self) -> bool {
        self.schema_type == TABLE_SCHEMA
    }
}

/// A published version of a catalog schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaVersion {
    pub version_name: String,
    pub schema_url: String,
}
