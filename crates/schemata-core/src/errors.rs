//! Cross-cutting error types for Schemata.
//!
//! Domain-specific errors (`CatalogError`, `HookError`, `ConfigError`) live in
//! their own crates. The binary converges everything on `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Schemata crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A host payload could not be decoded into a portal view.
    #[error("Invalid {entity_type} payload: {source}")]
    InvalidPayload {
        entity_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
