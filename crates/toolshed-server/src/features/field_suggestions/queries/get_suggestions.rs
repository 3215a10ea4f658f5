use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;
use crate::field_suggestions::{FieldSuggestion, FieldSuggestionAggregator, ItemContext};

/// Upper bound on the item name accepted for suggestion lookups
pub const MAX_NAME_LENGTH: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSuggestionsQuery {
    #[serde(alias = "categoryId")]
    pub category_id: i64,
    #[serde(alias = "itemContext")]
    pub item_context: ItemContext,
}

#[derive(Debug, Error)]
pub enum FieldSuggestionsQueryError {
    #[error("Item name must be at most {max} characters")]
    NameTooLong { max: usize },
}

impl From<FieldSuggestionsQueryError> for AppError {
    fn from(err: FieldSuggestionsQueryError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl FieldSuggestionsQuery {
    pub fn validate(&self) -> Result<(), FieldSuggestionsQueryError> {
        if self.item_context.name.chars().count() > MAX_NAME_LENGTH {
            return Err(FieldSuggestionsQueryError::NameTooLong { max: MAX_NAME_LENGTH });
        }
        Ok(())
    }
}

#[tracing::instrument(skip(aggregator, query), fields(category_id = query.category_id))]
pub async fn handle(
    aggregator: &FieldSuggestionAggregator,
    query: FieldSuggestionsQuery,
) -> Result<Vec<FieldSuggestion>, FieldSuggestionsQueryError> {
    query.validate()?;
    Ok(aggregator
        .get_field_suggestions(query.category_id, &query.item_context)
        .await)
}
