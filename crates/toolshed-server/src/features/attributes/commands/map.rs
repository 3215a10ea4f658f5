use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::attributes::AttributeMappingEngine;

/// `POST /attributes/map` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapAttributesCommand {
    #[serde(alias = "categoryId")]
    pub category_id: i64,
    #[serde(default, alias = "externalPayload", alias = "payload")]
    pub external_payload: Map<String, Value>,
}

#[tracing::instrument(skip(engine, command), fields(category_id = command.category_id))]
pub async fn handle(engine: &AttributeMappingEngine, command: MapAttributesCommand) -> BTreeMap<String, Value> {
    engine
        .map_external_attributes(command.category_id, &command.external_payload)
        .await
}
