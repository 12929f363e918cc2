//! # schemata-core
//!
//! Core types shared across all Schemata crates:
//! - Read-only views of the portal objects supplied by the host (datasets,
//!   resources, the schema a resource declares)
//! - Catalog entry types for the remote schema registry
//! - Validation and documentation URL builders
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod urls;
