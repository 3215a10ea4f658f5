use crate::catalog::CatalogStore;
use crate::error::StoreError;
use crate::taxonomy::{flatten_hierarchy, FlatOption};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListingCategoryOptionsQuery;

/// Marketplace categories as an indented, depth-first option list
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn CatalogStore,
    _query: ListingCategoryOptionsQuery,
) -> Result<Vec<FlatOption<i64>>, StoreError> {
    let categories = store.listing_categories().await?;
    Ok(flatten_hierarchy(&categories))
}
