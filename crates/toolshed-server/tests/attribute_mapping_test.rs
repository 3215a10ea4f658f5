//! Attribute mapping engine tests

mod common;

use serde_json::{json, Map, Value};
use std::sync::Arc;
use toolshed_server::attributes::AttributeMappingEngine;
use toolshed_server::catalog::{DataType, InMemoryCatalogStore};

use common::DRILLS;

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn engine_over(catalog: Arc<InMemoryCatalogStore>) -> AttributeMappingEngine {
    AttributeMappingEngine::new(catalog).unwrap()
}

fn engine() -> AttributeMappingEngine {
    engine_over(Arc::new(common::seeded_catalog()))
}

#[tokio::test]
async fn test_maps_core_and_category_attributes() {
    let long_description = "x".repeat(600);
    let payload = object(json!({
        "title": "DeWalt drill",
        "volts": "18",
        "manufacturer": "DeWalt",
        "battery": "yes",
        "condition": "barely used",
        "images": "a.jpg",
        "description": long_description,
        "availability": "out of stock",
        "color": "yellow"
    }));

    let mapped = engine().map_external_attributes(DRILLS, &payload).await;

    assert_eq!(mapped.get("name"), Some(&json!("DeWalt drill")));
    assert_eq!(mapped.get("voltage"), Some(&json!("18")));
    assert_eq!(mapped.get("brand"), Some(&json!("DeWalt")));
    assert_eq!(mapped.get("cordless"), Some(&json!(true)));
    assert_eq!(mapped.get("condition"), Some(&json!("fair")));
    assert_eq!(mapped.get("images"), Some(&json!(["a.jpg"])));
    assert_eq!(mapped.get("is_available"), Some(&json!(false)));
    assert_eq!(
        mapped.get("description").and_then(Value::as_str).map(|d| d.chars().count()),
        Some(500)
    );
    assert!(!mapped.contains_key("color"));
    assert!(!mapped.contains_key("external_id"));
}

#[tokio::test]
async fn test_category_rule_overrides_core_rule() {
    let catalog = InMemoryCatalogStore::new().with_attributes([
        toolshed_server::catalog::CategoryAttribute::new(DRILLS, "title_text", DataType::Text)
            .with_external_key("title"),
    ]);
    let engine = engine_over(Arc::new(catalog));

    let mapped = engine
        .map_external_attributes(DRILLS, &object(json!({"title": "Drill"})))
        .await;

    assert_eq!(mapped.get("title_text"), Some(&json!("Drill")));
    assert!(!mapped.contains_key("name"));
}

#[tokio::test]
async fn test_validate_mapped_fields() {
    let engine = engine();

    let outcome = engine
        .validate_mapped(DRILLS, &object(json!({"name": "Drill", "voltage": "abc"})))
        .await;
    assert!(!outcome.is_valid);
    assert_eq!(outcome.errors, vec!["voltage must be a number".to_string()]);

    let outcome = engine.validate_mapped(DRILLS, &Map::new()).await;
    assert_eq!(
        outcome.errors,
        vec!["voltage is required".to_string(), "name is required".to_string()]
    );

    let outcome = engine
        .validate_mapped(
            DRILLS,
            &object(json!({"name": "Drill", "voltage": "18", "cordless": "true"})),
        )
        .await;
    assert!(outcome.is_valid, "{:?}", outcome.errors);
}

#[tokio::test]
async fn test_suggest_mappings_for_unmapped_keys() {
    let payload = object(json!({
        "Brand": "DeWalt",
        "volts": 18,
        "voltage_rating": "18V",
        "zzz": 1
    }));

    let suggestions = engine().suggest_mappings(DRILLS, &payload).await;

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions.get("Brand").map(String::as_str), Some("brand"));
    assert_eq!(
        suggestions.get("voltage_rating").map(String::as_str),
        Some("voltage")
    );
}

#[tokio::test]
async fn test_capitalised_core_keys_are_mapped_not_dropped() {
    let engine = engine_over(Arc::new(InMemoryCatalogStore::new()));
    let payload = object(json!({"Title": "Cordless Drill", "Condition": "brand new"}));

    let mapped = engine.map_external_attributes(DRILLS, &payload).await;
    let suggestions = engine.suggest_mappings(DRILLS, &payload).await;

    assert_eq!(mapped.get("name"), Some(&json!("Cordless Drill")));
    assert_eq!(mapped.get("condition"), Some(&json!("new")));
    assert!(suggestions.is_empty(), "{:?}", suggestions);
}

#[tokio::test]
async fn test_category_requirements() {
    let requirement = engine().category_requirements(DRILLS).await.unwrap();

    assert_eq!(requirement.category_id, DRILLS);
    assert_eq!(requirement.required_fields, vec!["voltage".to_string()]);
    assert_eq!(
        requirement.optional_fields,
        vec!["brand".to_string(), "cordless".to_string()]
    );
    assert_eq!(requirement.field_types.get("cordless"), Some(&DataType::Boolean));
}

#[tokio::test]
async fn test_catalog_failure_falls_back_to_core_rules() {
    let catalog = Arc::new(common::seeded_catalog());
    catalog.fail_attributes(true);
    let engine = engine_over(catalog);

    assert!(engine.category_requirements(DRILLS).await.is_err());

    let mapped = engine
        .map_external_attributes(DRILLS, &object(json!({"title": "Drill", "volts": "18"})))
        .await;
    assert_eq!(mapped.get("name"), Some(&json!("Drill")));
    assert!(!mapped.contains_key("voltage"));
}
