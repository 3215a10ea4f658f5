use serde::{Deserialize, Serialize};

use super::TaxonomyQueryError;
use crate::taxonomy::{get_tree, TaxonomyNode, TaxonomyStore, MAX_TREE_DEPTH};

pub const DEFAULT_TREE_DEPTH: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetTreeQuery {
    #[serde(default)]
    pub max_depth: Option<u32>,
}

impl GetTreeQuery {
    pub fn validate(&self) -> Result<u32, TaxonomyQueryError> {
        let depth = self.max_depth.unwrap_or(DEFAULT_TREE_DEPTH);
        if depth > MAX_TREE_DEPTH {
            return Err(TaxonomyQueryError::InvalidDepth {
                max: MAX_TREE_DEPTH,
            });
        }
        Ok(depth)
    }
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn TaxonomyStore,
    external_id: i64,
    query: GetTreeQuery,
) -> Result<TaxonomyNode, TaxonomyQueryError> {
    let depth = query.validate()?;
    get_tree(store, external_id, depth)
        .await?
        .ok_or(TaxonomyQueryError::NotFound(external_id))
}
