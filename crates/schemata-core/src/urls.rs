//! Outbound URL construction for the validation service and schema docs.
//!
//! No input checking happens here: a resource with an odd URL or schema name
//! simply yields an odd link.

use crate::entities::Resource;

/// Default base URL of the tabular validation service.
pub const DEFAULT_VALIDATION_BASE: &str = "https://validata.etalab.studio";

/// Prefix the validation service expects in front of catalog schema names.
pub const DEFAULT_SCHEMA_NAME_PREFIX: &str = "schema-datagouvfr.";

/// Default documentation page, `{name}` is replaced by the schema name.
pub const DEFAULT_DOCUMENTATION_TEMPLATE: &str = "https://schema.data.gouv.fr/{name}/latest.html";

/// Placeholder substituted in documentation templates.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Builds validation and documentation links for resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    validation_base: String,
    schema_name_prefix: String,
    documentation_template: String,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(
            DEFAULT_VALIDATION_BASE,
            DEFAULT_SCHEMA_NAME_PREFIX,
            DEFAULT_DOCUMENTATION_TEMPLATE,
        )
    }
}

impl UrlBuilder {
    #[must_use]
    pub fn new(
        validation_base: impl Into<String>,
        schema_name_prefix: impl Into<String>,
        documentation_template: impl Into<String>,
    ) -> Self {
        let validation_base: String = validation_base.into();
        Self {
            validation_base: validation_base.trim_end_matches('/').to_string(),
            schema_name_prefix: schema_name_prefix.into(),
            documentation_template: documentation_template.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/table-schema", self.validation_base)
    }

    fn schema_name_param(&self, resource: &Resource) -> String {
        format!(
            "{}{}",
            self.schema_name_prefix,
            resource.schema_name().unwrap_or_default()
        )
    }

    /// Validation link for deployments without a catalog: always validates
    /// by schema name.
    #[must_use]
    pub fn simple_validation_url(&self, resource: &Resource) -> String {
        let schema_name = self.schema_name_param(resource);
        let query = encode_query(&[
            ("input", "url"),
            ("schema_name", &schema_name),
            ("url", &resource.url),
        ]);
        format!("{}?{query}", self.endpoint())
    }

    /// Validation link for catalog-aware deployments.
    ///
    /// A resolved `schema_url` pins the exact schema version; without one the
    /// service is pointed at the schema by name.
    #[must_use]
    pub fn validation_url(&self, resource: &Resource, schema_url: Option<&str>) -> String {
        let schema_param = match schema_url {
            Some(url) => ("schema_url", url.to_string()),
            None => ("schema_name", self.schema_name_param(resource)),
        };
        let query = encode_query(&[
            ("input", "url"),
            ("url", &resource.url),
            (schema_param.0, &schema_param.1),
        ]);
        format!("{}?{query}", self.endpoint())
    }

    /// Human-readable documentation page for a schema.
    #[must_use]
    pub fn documentation_url(&self, schema_name: &str) -> String {
        self.documentation_template
            .replace(NAME_PLACEHOLDER, schema_name)
    }
}

/// Percent-encode `key=value` pairs and join them with `&`.
///
/// Everything outside the RFC 3986 unreserved set is escaped, so a space
/// becomes `%20` rather than the form-encoding `+`.
#[must_use]
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
