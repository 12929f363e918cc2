//! HTTP client for the catalog endpoint.

use std::time::Duration;

use schemata_core::entities::CatalogEntry;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::http::check_response;

/// Catalog document as served by the endpoint. Any other top-level keys are
/// ignored.
#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    schemas: Option<Vec<CatalogEntry>>,
}

/// Fetches the schema catalog over HTTP.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
}

impl CatalogClient {
    /// Build a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("schemata/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Reuse an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_http(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// GET `url` and return its `schemas` array, or nothing if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure, non-success status, or a
    /// body that is not a catalog document.
    pub async fn fetch(&self, url: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
        let resp = check_response(self.http.get(url).send().await?).await?;
        let body = resp.text().await?;
        parse_catalog(&body)
    }
}

pub(crate) fn parse_catalog(body: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;
    Ok(document.schemas.unwrap_or_default())
}
