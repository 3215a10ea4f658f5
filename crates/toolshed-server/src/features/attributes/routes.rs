use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::commands::{self, MapAttributesCommand, ValidateAttributesCommand};
use super::queries::{self, CategoryRequirementsQuery, SuggestMappingsQuery};
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::features::FeatureState;

pub fn attributes_routes() -> Router<FeatureState> {
    Router::new()
        .route("/map", post(map_attributes))
        .route("/validate", post(validate_attributes))
        .route("/suggest-mappings", post(suggest_mappings))
        .route("/:category_id/requirements", get(requirements))
}

async fn requirements(
    State(state): State<FeatureState>,
    Path(category_id): Path<i64>,
) -> Result<Response, AppError> {
    let requirement =
        queries::requirements::handle(&state.mapping, CategoryRequirementsQuery { category_id })
            .await?;
    Ok(ApiResponse::success(requirement).into_response())
}

async fn map_attributes(
    State(state): State<FeatureState>,
    Json(command): Json<MapAttributesCommand>,
) -> Response {
    let mapped = commands::map::handle(&state.mapping, command).await;
    ApiResponse::success(mapped).into_response()
}

async fn validate_attributes(
    State(state): State<FeatureState>,
    Json(command): Json<ValidateAttributesCommand>,
) -> Response {
    let outcome = commands::validate::handle(&state.mapping, command).await;
    ApiResponse::success(outcome).into_response()
}

async fn suggest_mappings(
    State(state): State<FeatureState>,
    Json(query): Json<SuggestMappingsQuery>,
) -> Response {
    let suggestions = queries::suggest_mappings::handle(&state.mapping, query).await;
    ApiResponse::success(suggestions).into_response()
}
