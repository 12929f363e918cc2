//! Gating predicates for hook registration.

use crate::context::HookContext;

/// The page shows a single resource that declares a non-empty schema.
#[must_use]
pub fn resource_has_schema(ctx: &HookContext) -> bool {
    ctx.resource.as_ref().is_some_and(|r| r.has_schema())
}

/// The page shows a dataset where at least one resource declares a schema.
#[must_use]
pub fn dataset_has_schema(ctx: &HookContext) -> bool {
    ctx.dataset
        .as_ref()
        .is_some_and(|d| d.resources.iter().any(|r| r.schema.is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemata_core::entities::{Dataset, Resource, ResourceSchema};

    fn resource(id: &str, schema: Option<ResourceSchema>) -> Resource {
        Resource {
            id: id.into(),
            url: format!("https://example.org/{id}.csv"),
            title: None,
            schema,
        }
    }

    fn dataset(resources: Vec<Resource>) -> Dataset {
        Dataset {
            id: "ds".into(),
            title: None,
            resources,
        }
    }

    #[test]
    fn dataset_without_any_schema() {
        let ctx = HookContext::for_dataset(dataset(vec![resource("a", None), resource("b", None)]));
        assert!(!dataset_has_schema(&ctx));
    }

    #[test]
    fn dataset_with_one_schema() {
        let ctx = HookContext::for_dataset(dataset(vec![
            resource("a", None),
            resource("b", Some("foo".into())),
        ]));
        assert!(dataset_has_schema(&ctx));
    }

    #[test]
    fn empty_schema_still_counts_for_the_dataset() {
        let empty = ResourceSchema::Descriptor {
            name: String::new(),
            version: None,
        };
        let ctx = HookContext::for_dataset(dataset(vec![resource("a", Some(empty))]));
        assert!(dataset_has_schema(&ctx));
        assert!(!ctx.dataset.unwrap().resources[0].has_schema());
    }

    #[test]
    fn empty_dataset_and_missing_dataset() {
        assert!(!dataset_has_schema(&HookContext::for_dataset(dataset(vec![]))));
        assert!(!dataset_has_schema(&HookContext::default()));
    }

    #[test]
    fn resource_predicate_ignores_empty_schema() {
        let empty = ResourceSchema::Descriptor {
            name: String::new(),
            version: None,
        };
        assert!(!resource_has_schema(&HookContext::for_resource(resource("a", Some(empty)))));
        assert!(!resource_has_schema(&HookContext::for_resource(resource("a", None))));
        assert!(resource_has_schema(&HookContext::for_resource(resource(
            "a",
            Some("foo".into())
        ))));
        assert!(!resource_has_schema(&HookContext::default()));
    }
}
