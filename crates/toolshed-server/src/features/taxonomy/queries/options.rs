use serde::{Deserialize, Serialize};

use super::TaxonomyQueryError;
use crate::taxonomy::{taxonomy_options, FlatOption, TaxonomyStore, MAX_TREE_DEPTH};

pub const DEFAULT_OPTIONS_DEPTH: u32 = 2;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonomyOptionsQuery {
    #[serde(default)]
    pub max_depth: Option<u32>,
}

impl TaxonomyOptionsQuery {
    pub fn validate(&self) -> Result<u32, TaxonomyQueryError> {
        let depth = self.max_depth.unwrap_or(DEFAULT_OPTIONS_DEPTH);
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
    query: TaxonomyOptionsQuery,
) -> Result<Vec<FlatOption<i64>>, TaxonomyQueryError> {
    let depth = query.validate()?;
    Ok(taxonomy_options(store, depth).await?)
}
