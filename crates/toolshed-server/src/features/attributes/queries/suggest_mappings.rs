use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::attributes::AttributeMappingEngine;

/// `POST /attributes/suggest-mappings` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestMappingsQuery {
    #[serde(alias = "categoryId")]
    pub category_id: i64,
    #[serde(default, alias = "externalPayload", alias = "payload")]
    pub external_payload: Map<String, Value>,
}

/// External field → proposed internal field
#[tracing::instrument(skip(engine, query), fields(category_id = query.category_id))]
pub async fn handle(engine: &AttributeMappingEngine, query: SuggestMappingsQuery) -> BTreeMap<String, String> {
    engine.suggest_mappings(query.category_id, &query.external_payload).await
}
