//! Lookups over a loaded catalog.
//!
//! All functions accept an empty slice, which is what callers pass when the
//! catalog had no `schemas` key.

use schemata_core::entities::CatalogEntry;

/// True iff some entry is named `name` and is a table schema.
#[must_use]
pub fn is_table_schema(entries: &[CatalogEntry], name: &str) -> bool {
    entries
        .iter()
        .any(|entry| entry.name == name && entry.is_table_schema())
}

/// Concrete schema document URL for `name` at `version`.
///
/// Every entry named `name` is searched in catalog order; the first version
/// whose `version_name` matches wins.
#[must_use]
pub fn schema_url_for<'a>(
    entries: &'a [CatalogEntry],
    name: &str,
    version: &str,
) -> Option<&'a str> {
    entries
        .iter()
        .filter(|entry| entry.name == name)
        .flat_map(|entry| entry.versions.iter())
        .find(|v| v.version_name == version)
        .map(|v| v.schema_url.as_str())
}

/// First entry named `name`.
#[must_use]
pub fn find_entry<'a>(entries: &'a [CatalogEntry], name: &str) -> Option<&'a CatalogEntry> {
    entries.iter().find(|entry| entry.name == name)
}
