use serde::{Deserialize, Serialize};

use super::Resource;
use crate::errors::CoreError;

/// A dataset page and the resources listed on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Dataset {
    /// Decode a dataset as serialized by the host.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPayload`] if the JSON does not describe a dataset.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str(raw).map_err(|source| CoreError::InvalidPayload {
            entity_type: "dataset",
            source,
        })
    }

    /// Resources whose schema is present and non-empty.
    pub fn resources_with_schema(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(|r| r.has_schema())
    }

    /// Look up a resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no resource has this id.
    pub fn resource(&self, id: &str) -> Result<&Resource, CoreError> {
        self.resources
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "resource".to_string(),
                id: id.to_string(),
            })
    }
}
