use serde::{Deserialize, Serialize};

use super::{validate_name, CategorizationError};
use crate::categorization::{AutoCategorization, CategorySuggestionEngine, SuggestionContext};

/// `POST /categorization/auto` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoCategorizeQuery {
    #[serde(flatten)]
    pub context: SuggestionContext,
}

#[tracing::instrument(skip(engine, query))]
pub async fn handle(
    engine: &CategorySuggestionEngine,
    query: AutoCategorizeQuery,
) -> Result<AutoCategorization, CategorizationError> {
    validate_name(&query.context.name)?;
    let result = engine.auto_categorize(&query.context).await;
    tracing::debug!(
        suggested = ?result.suggested.as_ref().map(|s| s.external_id),
        requires_review = result.requires_review,
        "Auto-categorization completed"
    );
    Ok(result)
}
