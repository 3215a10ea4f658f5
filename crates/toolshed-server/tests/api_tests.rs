//! HTTP API tests over in-memory stores
//!
//! Requests go through the full router, including middleware, via
//! `tower::ServiceExt::oneshot`.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use toolshed_server::api::create_router;
use toolshed_server::config::CorsConfig;
use toolshed_server::features::FeatureState;
use toolshed_server::taxonomy::{InMemoryTaxonomyStore, TaxonomyStore};

// ============================================================================
// Helper Functions
// ============================================================================

fn cors() -> CorsConfig {
    CorsConfig {
        allowed_origins: vec!["http://localhost:3000".to_string()],
        allow_credentials: false,
    }
}

fn app_with(taxonomy: Arc<InMemoryTaxonomyStore>) -> Router {
    let state = FeatureState::new(
        taxonomy,
        Arc::new(common::seeded_catalog()),
        common::import_config(),
    )
    .unwrap();
    create_router(state, &cors())
}

fn app() -> Router {
    app_with(common::seeded_taxonomy())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn ids(data: &Value, key: &str) -> Vec<i64> {
    data.as_array()
        .unwrap()
        .iter()
        .map(|item| item[key].as_i64().unwrap())
        .collect()
}

// ============================================================================
// Server
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = app()
        .oneshot(Request::builder().uri("/api/v1/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_for_allowed_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/v1/taxonomy/children")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}

// ============================================================================
// Taxonomy
// ============================================================================

#[tokio::test]
async fn test_children_endpoints() {
    let app = app();

    let (status, body) = get(&app, "/api/v1/taxonomy/children").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body["data"], "external_id"), vec![5, 1]);
    assert_eq!(body["meta"]["count"], 2);

    let (_, body) = get(&app, "/api/v1/taxonomy/children?parent_id=1").await;
    assert_eq!(ids(&body["data"], "external_id"), vec![2, 4]);
}

#[tokio::test]
async fn test_tree_endpoint() {
    let app = app();

    let (status, body) = get(&app, "/api/v1/taxonomy/1/tree?max_depth=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["external_id"], 1);
    assert_eq!(ids(&body["data"]["children"], "external_id"), vec![2, 4]);
    assert_eq!(
        ids(&body["data"]["children"][0]["children"], "external_id"),
        vec![3]
    );

    let (status, body) = get(&app, "/api/v1/taxonomy/1/tree?max_depth=11").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = get(&app, "/api/v1/taxonomy/404/tree").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_breadcrumbs_endpoint() {
    let app = app();

    let (status, body) = get(&app, "/api/v1/taxonomy/3/breadcrumbs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"], "external_id"), vec![1, 2, 3]);

    let (status, body) = get(&app, "/api/v1/taxonomy/404/breadcrumbs").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_search_endpoint() {
    let app = app();

    let (status, body) = get(&app, "/api/v1/taxonomy/search?q=drill").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"], "external_id"), vec![2, 3]);

    let (status, _) = get(&app, "/api/v1/taxonomy/search?q=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/v1/taxonomy/search?q=drill&limit=500").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stats_and_options_endpoints() {
    let app = app();

    let (status, body) = get(&app, "/api/v1/taxonomy/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_categories"], 6);

    let (status, body) = get(&app, "/api/v1/taxonomy/options?max_depth=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"][1]["label"], "  Lawn Mowers");
}

#[tokio::test]
async fn test_store_outage_is_500() {
    let store = common::seeded_taxonomy();
    let app = app_with(store.clone());
    store.set_unavailable(true);

    let (status, body) = get(&app, "/api/v1/taxonomy/children").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_validate_feed_endpoint() {
    let app = app();
    let request = |content: &str| {
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/taxonomy/validate")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(content.to_string()))
            .unwrap()
    };

    let (status, body) = send(&app, request(common::SAMPLE_FEED)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_valid"], true);

    let (_, body) = send(&app, request("1\n")).await;
    assert_eq!(body["data"]["is_valid"], false);
    assert_eq!(body["data"]["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_import_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.tsv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::SAMPLE_FEED))
        .mount(&server)
        .await;
    let store = Arc::new(InMemoryTaxonomyStore::new());
    let app = app_with(store.clone());

    let (status, _) = post_json(
        &app,
        "/api/v1/taxonomy/import",
        json!({ "source_url": "ftp://example.com/feed" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.insert_calls(), 0);

    let (status, body) = post_json(
        &app,
        "/api/v1/taxonomy/import",
        json!({ "source_url": format!("{}/feed.tsv", server.uri()) }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["success"], true);
    assert_eq!(body["data"]["imported"], 6);
    assert_eq!(store.stats().await.unwrap().total_categories, 6);
}

// ============================================================================
// Categorization
// ============================================================================

#[tokio::test]
async fn test_suggest_endpoint() {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/api/v1/categorization/suggest",
        json!({ "name": "Cordless drill" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"], "external_id"), vec![3, 2]);
    assert_eq!(body["data"][0]["confidence"], 100);

    let (status, body) =
        post_json(&app, "/api/v1/categorization/suggest", json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = post_json(
        &app,
        "/api/v1/categorization/suggest",
        json!({ "name": "x".repeat(501) }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_auto_categorize_endpoint() {
    let (status, body) = post_json(
        &app(),
        "/api/v1/categorization/auto",
        json!({ "name": "drill bits", "existing_category": 2 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["suggested"]["external_id"], 2);
    assert_eq!(body["data"]["requires_review"], true);
}

// ============================================================================
// Attributes
// ============================================================================

#[tokio::test]
async fn test_requirements_endpoint() {
    let (status, body) = get(&app(), "/api/v1/attributes/10/requirements").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["required_fields"], json!(["voltage"]));
    assert_eq!(body["data"]["field_types"]["cordless"], "boolean");
}

#[tokio::test]
async fn test_map_validate_and_suggest_endpoints() {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/api/v1/attributes/map",
        json!({ "category_id": 10, "external_payload": { "title": "Drill", "volts": 18, "battery": "no" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "name": "Drill", "voltage": 18, "cordless": false }));

    let (status, body) = post_json(
        &app,
        "/api/v1/attributes/validate",
        json!({ "category_id": 10, "fields": { "name": "Drill" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_valid"], false);
    assert_eq!(body["data"]["errors"], json!(["voltage is required"]));

    let (status, body) = post_json(
        &app,
        "/api/v1/attributes/suggest-mappings",
        json!({ "category_id": 10, "externalPayload": { "Brand": "DeWalt" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "Brand": "brand" }));
}

// ============================================================================
// Field suggestions and listing categories
// ============================================================================

#[tokio::test]
async fn test_field_suggestions_endpoint() {
    let (status, body) = post_json(
        &app(),
        "/api/v1/field-suggestions",
        json!({ "category_id": 10, "item_context": { "name": "drill" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 5);
    assert_eq!(body["data"][0]["field_name"], "is_available");
    assert_eq!(body["data"][0]["source"], "defaults");
}

#[tokio::test]
async fn test_listing_category_options_endpoint() {
    let (status, body) = get(&app(), "/api/v1/listing-categories/options").await;

    assert_eq!(status, StatusCode::OK);
    let labels: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Garden", "Tools", "  Drills"]);
}
