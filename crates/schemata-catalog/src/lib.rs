//! # schemata-catalog
//!
//! Access to the remote registry of known schemas.
//!
//! - [`CatalogClient`] fetches `{"schemas": [...]}` from the configured URL
//! - [`CachedCatalog`] memoizes the response for a fixed TTL, keyed by URL
//! - [`TtlCache`] and [`Clock`] implement the expiry with injectable time
//! - [`lookup`] answers eligibility and version questions over a loaded catalog

pub mod cache;
pub mod lookup;

mod cached;
mod client;
mod error;
mod http;

pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use cached::{CachedCatalog, CatalogSource, SharedCatalog, StaticCatalog};
pub use client::CatalogClient;
pub use error::CatalogError;
pub use lookup::{find_entry, is_table_schema, schema_url_for};
