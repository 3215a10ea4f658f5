use super::TaxonomyQueryError;
use crate::taxonomy::{get_breadcrumbs, TaxonomyNode, TaxonomyStore};

#[derive(Debug, Clone, Copy)]
pub struct GetBreadcrumbsQuery {
    pub external_id: i64,
}

/// Root-to-node chain; 404 when the node itself is missing or inactive
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn TaxonomyStore,
    query: GetBreadcrumbsQuery,
) -> Result<Vec<TaxonomyNode>, TaxonomyQueryError> {
    let chain = get_breadcrumbs(store, query.external_id).await?;
    if chain.is_empty() {
        return Err(TaxonomyQueryError::NotFound(query.external_id));
    }
    Ok(chain)
}
