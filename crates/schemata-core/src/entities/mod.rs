//! Read-only views of the objects handed to us by the portal.
//!
//! Nothing in Schemata creates or mutates these. The host serializes its own
//! models into this shape and the hooks only read them.

mod catalog;
mod dataset;
mod resource;

pub use catalog::{CatalogEntry, SchemaVersion, TABLE_SCHEMA};
pub use dataset::Dataset;
pub use resource::{Resource, ResourceSchema};
