use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::queries::{self, AutoCategorizeQuery, SuggestCategoriesQuery};
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::features::FeatureState;

pub fn categorization_routes() -> Router<FeatureState> {
    Router::new()
        .route("/suggest", post(suggest))
        .route("/auto", post(auto_categorize))
}

async fn suggest(
    State(state): State<FeatureState>,
    Json(query): Json<SuggestCategoriesQuery>,
) -> Result<Response, AppError> {
    let suggestions = queries::suggest::handle(&state.suggestions, query).await?;
    let meta = json!({ "count": suggestions.len() });
    Ok(ApiResponse::success_with_meta(suggestions, meta).into_response())
}

async fn auto_categorize(
    State(state): State<FeatureState>,
    Json(query): Json<AutoCategorizeQuery>,
) -> Result<Response, AppError> {
    let result = queries::auto_categorize::handle(&state.suggestions, query).await?;
    Ok(ApiResponse::success(result).into_response())
}
