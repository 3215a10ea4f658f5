use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::queries::{self, ListingCategoryOptionsQuery};
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::features::FeatureState;

pub fn listing_categories_routes() -> Router<FeatureState> {
    Router::new().route("/options", get(options))
}

async fn options(State(state): State<FeatureState>) -> Result<Response, AppError> {
    let options =
        queries::options::handle(state.catalog.as_ref(), ListingCategoryOptionsQuery).await?;
    let meta = json!({ "count": options.len() });
    Ok(ApiResponse::success_with_meta(options, meta).into_response())
}
