use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::attributes::{AttributeMappingEngine, ValidationOutcome};

/// `POST /attributes/validate` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateAttributesCommand {
    #[serde(alias = "categoryId")]
    pub category_id: i64,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[tracing::instrument(skip(engine, command), fields(category_id = command.category_id))]
pub async fn handle(engine: &AttributeMappingEngine, command: ValidateAttributesCommand) -> ValidationOutcome {
    let outcome = engine.validate_mapped(command.category_id, &command.fields).await;
    tracing::debug!(errors = outcome.errors.len(), "Attribute validation completed");
    outcome
}
