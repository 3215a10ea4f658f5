use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::queries::{self, FieldSuggestionsQuery};
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::features::FeatureState;

pub fn field_suggestions_routes() -> Router<FeatureState> {
    Router::new().route("/", post(get_suggestions))
}

async fn get_suggestions(
    State(state): State<FeatureState>,
    Json(query): Json<FieldSuggestionsQuery>,
) -> Result<Response, AppError> {
    let suggestions =
        queries::get_suggestions::handle(&state.field_suggestions, query).await?;
    let meta = json!({ "count": suggestions.len() });
    Ok(ApiResponse::success_with_meta(suggestions, meta).into_response())
}
