use super::TaxonomyQueryError;
use crate::taxonomy::{TaxonomyStats, TaxonomyStore};

#[derive(Debug, Clone, Copy, Default)]
pub struct GetStatsQuery;

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn TaxonomyStore,
    _query: GetStatsQuery,
) -> Result<TaxonomyStats, TaxonomyQueryError> {
    Ok(store.stats().await?)
}
