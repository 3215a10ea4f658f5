use serde::{Deserialize, Serialize};

use super::{validate_name, CategorizationError};
use crate::categorization::{CategorySuggestion, CategorySuggestionEngine, SuggestionContext};

/// `POST /categorization/suggest` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestCategoriesQuery {
    #[serde(flatten)]
    pub context: SuggestionContext,
}

impl SuggestCategoriesQuery {
    pub fn validate(&self) -> Result<(), CategorizationError> {
        validate_name(&self.context.name)
    }
}

/// An empty name is not an error; it simply yields no suggestions
#[tracing::instrument(skip(engine, query))]
pub async fn handle(
    engine: &CategorySuggestionEngine,
    query: SuggestCategoriesQuery,
) -> Result<Vec<CategorySuggestion>, CategorizationError> {
    query.validate()?;
    Ok(engine.suggest(&query.context).await)
}
