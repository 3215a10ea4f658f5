//! In-process taxonomy store
//!
//! Mirrors the PostgreSQL store's semantics (unique external ids, all-or-nothing
//! batches, active-only reads) so dry-run imports and tests exercise the same
//! pipeline code. Failures can be injected per batch or for the whole store.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use super::models::{TaxonomyNode, TaxonomyRecord, TaxonomyStats};
use super::store::TaxonomyStore;
use crate::error::{StoreError, StoreResult};

#[derive(Default)]
pub struct InMemoryTaxonomyStore {
    nodes: RwLock<BTreeMap<i64, TaxonomyNode>>,
    unavailable: AtomicBool,
    poisoned_ids: RwLock<HashSet<i64>>,
    insert_calls: AtomicUsize,
}

impl InMemoryTaxonomyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given nodes (children are discarded)
    pub fn with_nodes(nodes: impl IntoIterator<Item = TaxonomyNode>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.nodes.write() {
            for mut node in nodes {
                node.children = None;
                map.insert(node.external_id, node);
            }
        }
        store
    }

    /// Store pre-populated from feed records, all active
    pub fn with_records(records: &[TaxonomyRecord]) -> Self {
        let now = Utc::now();
        Self::with_nodes(records.iter().map(|r| TaxonomyNode::from_record(r, now)))
    }

    /// Make every subsequent call fail
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make any batch containing `external_id` fail on insert
    pub fn fail_batches_containing(&self, external_id: i64) {
        if let Ok(mut ids) = self.poisoned_ids.write() {
            ids.insert(external_id);
        }
    }

    pub fn set_active(&self, external_id: i64, active: bool) {
        if let Ok(mut map) = self.nodes.write() {
            if let Some(node) = map.get_mut(&external_id) {
                node.active = active;
            }
        }
    }

    /// Snapshot of every stored node, active or not, ordered by id
    pub fn snapshot(&self) -> Vec<TaxonomyNode> {
        self.nodes
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of `insert_batch` calls seen so far
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store marked unavailable".into()));
        }
        Ok(())
    }

    fn read_active<F>(&self, mut keep: F) -> StoreResult<Vec<TaxonomyNode>>
    where
        F: FnMut(&TaxonomyNode, &BTreeMap<i64, TaxonomyNode>) -> bool,
    {
        self.check_available()?;
        let map = self.nodes.read().map_err(|_| lock_poisoned())?;
        Ok(map
            .values()
            .filter(|n| n.active && keep(n, &map))
            .cloned()
            .collect())
    }
}

fn lock_poisoned() -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".into())
}

fn by_path(nodes: &mut [TaxonomyNode]) {
    nodes.sort_by(|a, b| a.path.cmp(&b.path));
}

#[async_trait]
impl TaxonomyStore for InMemoryTaxonomyStore {
    async fn delete_all(&self) -> StoreResult<u64> {
        self.check_available()?;
        let mut map = self.nodes.write().map_err(|_| lock_poisoned())?;
        let removed = map.len() as u64;
        map.clear();
        Ok(removed)
    }

    async fn insert_batch(&self, records: &[TaxonomyRecord]) -> StoreResult<u64> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        {
            let poisoned = self.poisoned_ids.read().map_err(|_| lock_poisoned())?;
            if let Some(record) = records.iter().find(|r| poisoned.contains(&r.external_id)) {
                return Err(StoreError::Unavailable(format!(
                    "insert rejected for external_id {}",
                    record.external_id
                )));
            }
        }

        let mut map = self.nodes.write().map_err(|_| lock_poisoned())?;
        let mut seen = HashSet::with_capacity(records.len());
        for record in records {
            if map.contains_key(&record.external_id) || !seen.insert(record.external_id) {
                return Err(StoreError::InvalidData(format!(
                    "duplicate external_id {}",
                    record.external_id
                )));
            }
        }

        let now = Utc::now();
        for record in records {
            map.insert(record.external_id, TaxonomyNode::from_record(record, now));
        }
        Ok(records.len() as u64)
    }

    async fn get_node(&self, external_id: i64) -> StoreResult<Option<TaxonomyNode>> {
        self.check_available()?;
        let map = self.nodes.read().map_err(|_| lock_poisoned())?;
        Ok(map.get(&external_id).filter(|n| n.active).cloned())
    }

    async fn get_children(&self, parent_id: Option<i64>) -> StoreResult<Vec<TaxonomyNode>> {
        let mut nodes = self.read_active(|node, map| match (parent_id, node.parent_id) {
            (Some(wanted), Some(actual)) => wanted == actual,
            (Some(_), None) => false,
            (None, None) => true,
            (None, Some(actual)) => !map.get(&actual).is_some_and(|p| p.active),
        })?;
        by_path(&mut nodes);
        Ok(nodes)
    }

    async fn search_by_path(&self, term: &str, limit: i64) -> StoreResult<Vec<TaxonomyNode>> {
        let term = term.trim();
        let needle = term.to_lowercase();
        let id_match: Option<i64> = term.parse().ok();

        let mut nodes = self.read_active(|node, _| {
            node.path.to_lowercase().contains(&needle) || id_match == Some(node.external_id)
        })?;
        by_path(&mut nodes);
        nodes.truncate(limit.max(0) as usize);
        Ok(nodes)
    }

    async fn search_by_terms(&self, terms: &[String], limit: i64) -> StoreResult<Vec<TaxonomyNode>> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }
        let needles: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();

        let mut nodes = self.read_active(|node, _| {
            let path = node.path.to_lowercase();
            needles.iter().any(|n| path.contains(n.as_str()))
        })?;
        nodes.sort_by(|a, b| b.level.cmp(&a.level).then_with(|| a.path.cmp(&b.path)));
        nodes.truncate(limit.max(0) as usize);
        Ok(nodes)
    }

    async fn stats(&self) -> StoreResult<TaxonomyStats> {
        self.check_available()?;
        let map = self.nodes.read().map_err(|_| lock_poisoned())?;

        let mut stats = TaxonomyStats {
            total_categories: map.len() as i64,
            ..Default::default()
        };
        for node in map.values().filter(|n| n.active) {
            stats.active_categories += 1;
            *stats.levels.entry(node.level).or_insert(0) += 1;
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<TaxonomyRecord> {
        vec![
            TaxonomyRecord::new(1, "Power Tools", None, 1),
            TaxonomyRecord::new(2, "Power Tools > Drills", Some(1), 2),
            TaxonomyRecord::new(3, "Power Tools > Saws", Some(1), 2),
            TaxonomyRecord::new(9, "Lost > Widgets", Some(404), 2),
        ]
    }

    #[tokio::test]
    async fn test_roots_include_orphans() {
        let store = InMemoryTaxonomyStore::with_records(&records());
        let roots = store.get_children(None).await.unwrap();
        let ids: Vec<i64> = roots.iter().map(|n| n.external_id).collect();
        assert_eq!(ids, vec![9, 1]);
    }

    #[tokio::test]
    async fn test_inactive_parent_makes_children_orphans() {
        let store = InMemoryTaxonomyStore::with_records(&records());
        store.set_active(1, false);
        let roots = store.get_children(None).await.unwrap();
        let ids: Vec<i64> = roots.iter().map(|n| n.external_id).collect();
        assert_eq!(ids, vec![9, 2, 3]);
        assert!(store.get_node(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_batch_rejects_duplicates_atomically() {
        let store = InMemoryTaxonomyStore::new();
        let batch = vec![
            TaxonomyRecord::new(1, "A", None, 1),
            TaxonomyRecord::new(1, "A again", None, 1),
        ];
        assert!(store.insert_batch(&batch).await.is_err());
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_search_by_path_matches_id_or_substring() {
        let store = InMemoryTaxonomyStore::with_records(&records());
        let by_text = store.search_by_path("DRILL", 10).await.unwrap();
        assert_eq!(by_text.len(), 1);
        let by_id = store.search_by_path("3", 10).await.unwrap();
        assert_eq!(by_id[0].external_id, 3);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails() {
        let store = InMemoryTaxonomyStore::with_records(&records());
        store.set_unavailable(true);
        assert!(store.stats().await.is_err());
        assert!(store.search_by_terms(&["drill".into()], 20).await.is_err());
    }
}
