use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::commands::{self, ImportTaxonomyCommand, ValidateFeedCommand};
use super::queries::{
    self, GetBreadcrumbsQuery, GetChildrenQuery, GetStatsQuery, GetTreeQuery, SearchTaxonomyQuery,
    TaxonomyOptionsQuery,
};
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::features::FeatureState;

pub fn taxonomy_routes() -> Router<FeatureState> {
    Router::new()
        .route("/children", get(get_children))
        .route("/search", get(search))
        .route("/stats", get(stats))
        .route("/options", get(options))
        .route("/import", post(import))
        .route("/validate", post(validate_feed))
        .route("/:id/tree", get(get_tree))
        .route("/:id/breadcrumbs", get(get_breadcrumbs))
}

async fn get_children(
    State(state): State<FeatureState>,
    Query(query): Query<GetChildrenQuery>,
) -> Result<Response, AppError> {
    let nodes = queries::children::handle(state.taxonomy.as_ref(), query).await?;
    let meta = json!({ "count": nodes.len() });
    Ok(ApiResponse::success_with_meta(nodes, meta).into_response())
}

async fn get_tree(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
    Query(query): Query<GetTreeQuery>,
) -> Result<Response, AppError> {
    let tree = queries::tree::handle(state.taxonomy.as_ref(), id, query).await?;
    Ok(ApiResponse::success(tree).into_response())
}

async fn get_breadcrumbs(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let chain = queries::breadcrumbs::handle(
        state.taxonomy.as_ref(),
        GetBreadcrumbsQuery { external_id: id },
    )
    .await?;
    Ok(ApiResponse::success(chain).into_response())
}

async fn search(
    State(state): State<FeatureState>,
    Query(query): Query<SearchTaxonomyQuery>,
) -> Result<Response, AppError> {
    let nodes = queries::search::handle(state.taxonomy.as_ref(), query).await?;
    tracing::debug!(count = nodes.len(), "Taxonomy search completed");
    let meta = json!({ "count": nodes.len() });
    Ok(ApiResponse::success_with_meta(nodes, meta).into_response())
}

async fn stats(State(state): State<FeatureState>) -> Result<Response, AppError> {
    let stats = queries::stats::handle(state.taxonomy.as_ref(), GetStatsQuery).await?;
    Ok(ApiResponse::success(stats).into_response())
}

async fn options(
    State(state): State<FeatureState>,
    Query(query): Query<TaxonomyOptionsQuery>,
) -> Result<Response, AppError> {
    let options = queries::options::handle(state.taxonomy.as_ref(), query).await?;
    Ok(ApiResponse::success(options).into_response())
}

async fn import(
    State(state): State<FeatureState>,
    Json(command): Json<ImportTaxonomyCommand>,
) -> Result<Response, AppError> {
    let result = commands::import::handle(&state.importer, command).await?;
    Ok(ApiResponse::success(result).into_response())
}

async fn validate_feed(body: String) -> Response {
    let validation = commands::validate::handle(ValidateFeedCommand { content: body });
    ApiResponse::success(validation).into_response()
}
