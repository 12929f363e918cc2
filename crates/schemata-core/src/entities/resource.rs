use serde::{Deserialize, Serialize};

/// The schema a resource declares.
///
/// Older portal deployments store a bare identifier (`"etalab/irve"`); newer
/// ones store a descriptor that may pin a version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ResourceSchema {
    Name(String),
    Descriptor {
        #[serde(default)]
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        version: Option<String>,
    },
}

impl ResourceSchema {
    /// Schema identifier, whichever shape was stored.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Descriptor { name, .. } => name,
        }
    }

    /// Pinned version, only ever present on descriptors.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Name(_) => None,
            Self::Descriptor { version, .. } => version.as_deref(),
        }
    }

    /// A schema without a name carries no information (`{}` or `""`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name().is_empty()
    }
}

impl From<&str> for ResourceSchema {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// A single downloadable file or API endpoint attached to a dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub schema: Option<ResourceSchema>,
}

impl Resource {
    /// True when the resource declares a non-empty schema.
    #[must_use]
    pub fn has_schema(&self) -> bool {
        self.schema.as_ref().is_some_and(|schema| !schema.is_empty())
    }

    /// Name of the declared schema, if any.
    #[must_use]
    pub fn schema_name(&self) -> Option<&str> {
        self.schema.as_ref().map(ResourceSchema::name)
    }

    /// The resource id with dashes stripped, usable as an HTML element id.
    #[must_use]
    pub fn dom_id(&self) -> String {
        self.id.replace('-', "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_string_schema_deserializes_as_name() {
        let resource: Resource = serde_json::from_str(
            r#"{"id": "r-1", "url": "https://example.org/a.csv", "schema": "etalab/irve"}"#,
        )
        .unwrap();
        assert_eq!(resource.schema, Some(ResourceSchema::Name("etalab/irve".into())));
        assert_eq!(resource.schema_name(), Some("etalab/irve"));
        assert!(resource.has_schema());
    }

    #[test]
    fn descriptor_schema_keeps_version() {
        let resource: Resource = serde_json::from_str(
            r#"{"id": "r-1", "url": "u", "schema": {"name": "foo", "version": "1.0"}}"#,
        )
        .unwrap();
        let schema = resource.schema.unwrap();
        assert_eq!(schema.name(), "foo");
        assert_eq!(schema.version(), Some("1.0"));
    }

    #[test]
    fn empty_descriptor_is_present_but_empty() {
        let resource: Resource =
            serde_json::from_str(r#"{"id": "r-1", "url": "u", "schema": {}}"#).unwrap();
        assert!(resource.schema.is_some());
        assert!(!resource.has_schema());
    }

    #[test]
    fn null_or_missing_schema_is_absent() {
        let null: Resource =
            serde_json::from_str(r#"{"id": "r-1", "url": "u", "schema": null}"#).unwrap();
        let missing: Resource = serde_json::from_str(r#"{"id": "r-1", "url": "u"}"#).unwrap();
        assert!(null.schema.is_none());
        assert!(missing.schema.is_none());
    }

    #[test]
    fn dom_id_strips_dashes() {
        let resource = Resource {
            id: "8c1a-44d2-9e0f".into(),
            url: String::new(),
            title: None,
            schema: None,
        };
        assert_eq!(resource.dom_id(), "8c1a44d29e0f");
    }
}
