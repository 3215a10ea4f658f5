//! Read contract of the listing/catalog subsystem

use async_trait::async_trait;

use super::models::{CategoryAttribute, ListingCategory, ListingSnapshot};
use crate::error::StoreResult;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Configured attributes of a listing category, ordered by name
    async fn category_attributes(&self, category_id: i64) -> StoreResult<Vec<CategoryAttribute>>;

    /// Active, public listings in `category_id` whose name or description
    /// contains `name` (case-insensitive), newest first.
    async fn find_similar_listings(
        &self,
        category_id: i64,
        name: &str,
        limit: i64,
    ) -> StoreResult<Vec<ListingSnapshot>>;

    /// Every listing category, ordered by name
    async fn listing_categories(&self) -> StoreResult<Vec<ListingCategory>>;
}
