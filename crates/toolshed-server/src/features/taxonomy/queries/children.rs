use serde::{Deserialize, Serialize};

use super::TaxonomyQueryError;
use crate::taxonomy::{TaxonomyNode, TaxonomyStore};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetChildrenQuery {
    /// Omit for the top level (roots and orphans)
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn TaxonomyStore,
    query: GetChildrenQuery,
) -> Result<Vec<TaxonomyNode>, TaxonomyQueryError> {
    Ok(store.get_children(query.parent_id).await?)
}
