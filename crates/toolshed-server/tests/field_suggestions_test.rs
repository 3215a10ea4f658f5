//! Field suggestion aggregator tests

mod common;

use std::sync::Arc;
use toolshed_server::attributes::AttributeMappingEngine;
use toolshed_server::catalog::{InMemoryCatalogStore, StoredListing};
use toolshed_server::field_suggestions::{
    FieldSuggestion, FieldSuggestionAggregator, ItemContext, SuggestionSource,
};

use common::DRILLS;

fn aggregator(catalog: Arc<InMemoryCatalogStore>) -> FieldSuggestionAggregator {
    let mapping = AttributeMappingEngine::new(catalog.clone()).unwrap();
    FieldSuggestionAggregator::new(catalog, mapping)
}

fn find<'a>(suggestions: &'a [FieldSuggestion], field: &str) -> Option<&'a FieldSuggestion> {
    suggestions.iter().find(|s| s.field_name == field)
}

#[tokio::test]
async fn test_all_sources_are_merged_and_ranked() {
    let aggregator = aggregator(Arc::new(common::seeded_catalog()));

    let suggestions = aggregator
        .get_field_suggestions(DRILLS, &ItemContext::named("drill"))
        .await;

    let fields: Vec<&str> = suggestions.iter().map(|s| s.field_name.as_str()).collect();
    assert_eq!(
        fields,
        vec!["is_available", "is_public", "condition", "location", "voltage"]
    );

    let condition = find(&suggestions, "condition").unwrap();
    assert_eq!(condition.suggested_value, "good");
    assert_eq!(condition.source, SuggestionSource::SimilarItems);
    assert_eq!(
        condition.reasoning,
        "2 of 3 similar items are listed in 'good' condition"
    );

    let location = find(&suggestions, "location").unwrap();
    assert_eq!(location.suggested_value, "Portland");

    let voltage = find(&suggestions, "voltage").unwrap();
    assert_eq!(voltage.source, SuggestionSource::Taxonomy);
    assert_eq!(voltage.suggested_value, "");
    assert_eq!(voltage.confidence, 50);
}

#[tokio::test]
async fn test_hidden_listings_are_ignored() {
    let catalog = InMemoryCatalogStore::new()
        .with_listing(DRILLS, common::listing(1, "Drill", "fair", "Boise"))
        .with_stored_listing(StoredListing {
            category_id: DRILLS,
            is_active: true,
            is_public: false,
            snapshot: common::listing(2, "Drill", "new", "Reno"),
        })
        .with_stored_listing(StoredListing {
            category_id: DRILLS,
            is_active: false,
            is_public: true,
            snapshot: common::listing(3, "Drill", "new", "Reno"),
        })
        .with_listing(99, common::listing(4, "Drill", "new", "Reno"));

    let suggestions = aggregator(Arc::new(catalog))
        .get_field_suggestions(DRILLS, &ItemContext::named("Drill"))
        .await;

    assert_eq!(find(&suggestions, "condition").unwrap().suggested_value, "fair");
    assert_eq!(find(&suggestions, "location").unwrap().suggested_value, "Boise");
}

#[tokio::test]
async fn test_blank_name_skips_similar_items() {
    let aggregator = aggregator(Arc::new(common::seeded_catalog()));

    let suggestions = aggregator
        .get_field_suggestions(DRILLS, &ItemContext::named("   "))
        .await;

    assert!(suggestions
        .iter()
        .all(|s| s.source != SuggestionSource::SimilarItems));
    assert_eq!(suggestions.len(), 3);
}

#[tokio::test]
async fn test_failing_sources_leave_defaults() {
    let catalog = Arc::new(common::seeded_catalog());
    catalog.fail_attributes(true);
    catalog.fail_listings(true);

    let suggestions = aggregator(catalog)
        .get_field_suggestions(DRILLS, &ItemContext::named("drill"))
        .await;

    let fields: Vec<&str> = suggestions.iter().map(|s| s.field_name.as_str()).collect();
    assert_eq!(fields, vec!["is_available", "is_public"]);
    assert!(suggestions
        .iter()
        .all(|s| s.source == SuggestionSource::Defaults));
}

#[tokio::test]
async fn test_unknown_category_gets_defaults_only() {
    let aggregator = aggregator(Arc::new(common::seeded_catalog()));

    let suggestions = aggregator
        .get_field_suggestions(12345, &ItemContext::named("drill"))
        .await;

    assert_eq!(suggestions.len(), 2);
    assert!(suggestions.iter().all(|s| s.confidence > 20));
}
