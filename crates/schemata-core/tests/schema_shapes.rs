//! Decoding host payloads that mix both schema shapes and building links for them.

use pretty_assertions::assert_eq;
use schemata_core::entities::{Dataset, ResourceSchema};
use schemata_core::urls::UrlBuilder;

const MIXED_DATASET: &str = r#"{
    "id": "5e7e104ace2080d9162b61d8",
    "title": "Mixed schemas",
    "resources": [
        {"id": "11-22", "url": "https://example.org/legacy.csv", "schema": "etalab/legacy"},
        {"id": "33-44", "url": "https://example.org/pinned.csv",
         "schema": {"name": "etalab/pinned", "version": "0.2.1"}},
        {"id": "55-66", "url": "https://example.org/plain.csv", "schema": null}
    ]
}"#;

#[test]
fn both_shapes_expose_the_same_accessors() {
    let dataset = Dataset::from_json(MIXED_DATASET).unwrap();
    let names: Vec<Option<&str>> = dataset.resources.iter().map(|r| r.schema_name()).collect();
    assert_eq!(
        names,
        vec![Some("etalab/legacy"), Some("etalab/pinned"), None]
    );
    assert_eq!(
        dataset.resources[1].schema,
        Some(ResourceSchema::Descriptor {
            name: "etalab/pinned".into(),
            version: Some("0.2.1".into()),
        })
    );
}

#[test]
fn name_based_link_contains_prefixed_name_and_encoded_target() {
    let dataset = Dataset::from_json(MIXED_DATASET).unwrap();
    let builder = UrlBuilder::default();
    for resource in dataset.resources_with_schema() {
        let url = builder.validation_url(resource, None);
        let expected_name = format!(
            "schema_name={}",
            urlencoding::encode(&format!(
                "schema-datagouvfr.{}",
                resource.schema_name().unwrap()
            ))
        );
        assert!(url.contains(&expected_name), "{url}");
        assert!(
            url.contains(&format!("url={}", urlencoding::encode(&resource.url))),
            "{url}"
        );
    }
}

#[test]
fn dataset_roundtrips_through_json() {
    let dataset = Dataset::from_json(MIXED_DATASET).unwrap();
    let json = serde_json::to_string(&dataset).unwrap();
    let back = Dataset::from_json(&json).unwrap();
    assert_eq!(back, dataset);
}
