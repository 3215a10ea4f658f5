//! Storage interface for taxonomy nodes
//!
//! The engine talks to the taxonomy table only through [`TaxonomyStore`]. The
//! PostgreSQL implementation lives in [`super::postgres`]; [`super::memory`] keeps
//! everything in process for dry runs and tests.
//!
//! Every read is scoped to active nodes. Writes are not transactional across
//! calls: the import pipeline issues `delete_all` followed by independent
//! `insert_batch` calls, and readers may observe the table between them.

use async_trait::async_trait;

use super::models::{TaxonomyNode, TaxonomyRecord, TaxonomyStats};
use crate::error::StoreResult;

#[async_trait]
pub trait TaxonomyStore: Send + Sync {
    /// Remove every node. Returns the number of rows deleted.
    async fn delete_all(&self) -> StoreResult<u64>;

    /// Insert a batch of records as active nodes, all-or-nothing.
    ///
    /// Any level the parser produces is accepted, including 0.
    ///
    /// Returns the number of rows inserted.
    async fn insert_batch(&self, records: &[TaxonomyRecord]) -> StoreResult<u64>;

    /// Fetch one active node
    async fn get_node(&self, external_id: i64) -> StoreResult<Option<TaxonomyNode>>;

    /// Active children of `parent_id`, ordered by path.
    ///
    /// `None` returns the roots together with orphans whose parent is missing
    /// or inactive.
    async fn get_children(&self, parent_id: Option<i64>) -> StoreResult<Vec<TaxonomyNode>>;

    /// Case-insensitive substring match on path, or exact id match when the term
    /// is an integer. Ordered by path.
    async fn search_by_path(&self, term: &str, limit: i64) -> StoreResult<Vec<TaxonomyNode>>;

    /// Active nodes whose path contains any of `terms` (case-insensitive).
    ///
    /// Deeper nodes come first, then by path.
    async fn search_by_terms(&self, terms: &[String], limit: i64) -> StoreResult<Vec<TaxonomyNode>>;

    async fn stats(&self) -> StoreResult<TaxonomyStats>;
}
