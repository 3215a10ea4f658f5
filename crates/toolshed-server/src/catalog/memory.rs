//! In-process catalog for tests and offline runs

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use super::models::{CategoryAttribute, ListingCategory, ListingSnapshot};
use super::store::CatalogStore;
use crate::error::{StoreError, StoreResult};

/// A listing as the in-memory catalog keeps it
#[derive(Debug, Clone)]
pub struct StoredListing {
    pub category_id: i64,
    pub is_active: bool,
    pub is_public: bool,
    pub snapshot: ListingSnapshot,
}

#[derive(Default)]
pub struct InMemoryCatalogStore {
    attributes: Vec<CategoryAttribute>,
    listings: Vec<StoredListing>,
    categories: Vec<ListingCategory>,
    attributes_unavailable: AtomicBool,
    listings_unavailable: AtomicBool,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = CategoryAttribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn with_listing(mut self, category_id: i64, snapshot: ListingSnapshot) -> Self {
        self.listings.push(StoredListing {
            category_id,
            is_active: true,
            is_public: true,
            snapshot,
        });
        self
    }

    pub fn with_stored_listing(mut self, listing: StoredListing) -> Self {
        self.listings.push(listing);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = ListingCategory>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Make attribute lookups fail
    pub fn fail_attributes(&self, fail: bool) {
        self.attributes_unavailable.store(fail, Ordering::SeqCst);
    }

    /// Make similar-listing lookups fail
    pub fn fail_listings(&self, fail: bool) {
        self.listings_unavailable.store(fail, Ordering::SeqCst);
    }
}

fn unavailable(what: &str) -> StoreError {
    StoreError::Unavailable(format!("in-memory catalog {} unavailable", what))
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn category_attributes(&self, category_id: i64) -> StoreResult<Vec<CategoryAttribute>> {
        if self.attributes_unavailable.load(Ordering::SeqCst) {
            return Err(unavailable("attributes"));
        }
        let mut found: Vec<CategoryAttribute> = self
            .attributes
            .iter()
            .filter(|a| a.category_id == category_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    async fn find_similar_listings(
        &self,
        category_id: i64,
        name: &str,
        limit: i64,
    ) -> StoreResult<Vec<ListingSnapshot>> {
        if self.listings_unavailable.load(Ordering::SeqCst) {
            return Err(unavailable("listings"));
        }
        let needle = name.trim().to_lowercase();
        Ok(self
            .listings
            .iter()
            .rev()
            .filter(|l| l.is_active && l.is_public && l.category_id == category_id)
            .filter(|l| {
                l.snapshot.name.to_lowercase().contains(&needle)
                    || l.snapshot
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .take(limit.max(0) as usize)
            .map(|l| l.snapshot.clone())
            .collect())
    }

    async fn listing_categories(&self) -> StoreResult<Vec<ListingCategory>> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}
