//! Category suggestion engine tests

mod common;

use serde_json::json;
use std::sync::Arc;
use toolshed_server::categorization::{CategorySuggestionEngine, SuggestionContext};
use toolshed_server::taxonomy::InMemoryTaxonomyStore;

fn engine() -> (CategorySuggestionEngine, Arc<InMemoryTaxonomyStore>) {
    let store = common::seeded_taxonomy();
    (CategorySuggestionEngine::new(store.clone()), store)
}

#[tokio::test]
async fn test_cordless_drill_ranks_leaf_first() {
    let (engine, _) = engine();

    let suggestions = engine.suggest(&SuggestionContext::named("Cordless drill")).await;

    let ids: Vec<i64> = suggestions.iter().map(|s| s.external_id).collect();
    assert_eq!(ids, vec![3, 2]);
    assert_eq!(suggestions[0].confidence, 100);
    assert_eq!(suggestions[0].level, 3);
    assert!(suggestions[0]
        .reasons
        .contains(&"matched category name: cordless".to_string()));
    assert_eq!(suggestions[1].confidence, 50);
}

#[tokio::test]
async fn test_suggestions_are_sorted_and_capped() {
    let (engine, _) = engine();
    let context = SuggestionContext::named("power tools garden saws drills mowers lawn");

    let suggestions = engine.suggest(&context).await;

    assert!(suggestions.len() <= 5);
    assert!(suggestions
        .windows(2)
        .all(|w| w[0].confidence >= w[1].confidence));
    assert!(suggestions.iter().all(|s| s.confidence > 30));
}

#[tokio::test]
async fn test_empty_or_stopword_names_yield_nothing() {
    let (engine, _) = engine();

    assert!(engine.suggest(&SuggestionContext::named("")).await.is_empty());
    assert!(engine
        .suggest(&SuggestionContext::named("the and of to"))
        .await
        .is_empty());
}

#[tokio::test]
async fn test_description_tags_and_attributes_contribute_terms() {
    let (engine, _) = engine();
    let mut context = SuggestionContext::named("Item")
        .with_description("A lawn mower, barely used.")
        .with_tags(["garden"]);
    context.attributes = Some(json!({"kind": "lawn mowers"}).as_object().unwrap().clone());

    let suggestions = engine.suggest(&context).await;

    assert_eq!(suggestions.first().map(|s| s.external_id), Some(6));
}

#[tokio::test]
async fn test_existing_category_gets_bonus() {
    let (engine, _) = engine();

    let plain = engine.suggest(&SuggestionContext::named("drill bits")).await;
    assert_eq!(plain[0].external_id, 3);
    assert_eq!(plain[0].confidence, 50);

    let boosted = engine
        .suggest(&SuggestionContext::named("drill bits").with_existing_category(2))
        .await;
    assert_eq!(boosted[0].external_id, 2);
    assert_eq!(boosted[0].confidence, 60);
    assert!(boosted[0].reasons.contains(&"current category".to_string()));
}

#[tokio::test]
async fn test_store_failure_degrades_to_empty() {
    let (engine, store) = engine();
    store.set_unavailable(true);

    assert!(engine
        .suggest(&SuggestionContext::named("Cordless drill"))
        .await
        .is_empty());
    let auto = engine
        .auto_categorize(&SuggestionContext::named("Cordless drill"))
        .await;
    assert!(auto.suggested.is_none());
    assert!(auto.requires_review);
}

#[tokio::test]
async fn test_auto_categorize_confident_match() {
    let (engine, _) = engine();

    let auto = engine
        .auto_categorize(&SuggestionContext::named("Cordless drill"))
        .await;

    assert_eq!(auto.suggested.as_ref().map(|s| s.external_id), Some(3));
    assert!(!auto.requires_review);
    let alternatives: Vec<i64> = auto.alternatives.iter().map(|s| s.external_id).collect();
    assert_eq!(alternatives, vec![2]);
}

#[tokio::test]
async fn test_auto_categorize_weak_match_requires_review() {
    let (engine, _) = engine();

    let auto = engine
        .auto_categorize(&SuggestionContext::named("drill bits"))
        .await;

    let top = auto.suggested.unwrap();
    assert!(top.confidence < 70);
    assert!(auto.requires_review);
}
