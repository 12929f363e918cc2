use schemata_core::entities::{Dataset, Resource};

/// What the host knows about the page being rendered.
#[derive(Debug, Clone, Default)]
pub struct HookContext {
    pub dataset: Option<Dataset>,
    pub resource: Option<Resource>,
}

impl HookContext {
    #[must_use]
    pub fn for_dataset(dataset: Dataset) -> Self {
        Self {
            dataset: Some(dataset),
            resource: None,
        }
    }

    #[must_use]
    pub fn for_resource(resource: Resource) -> Self {
        Self {
            dataset: None,
            resource: Some(resource),
        }
    }

    #[must_use]
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resource = Some(resource);
        self
    }
}
