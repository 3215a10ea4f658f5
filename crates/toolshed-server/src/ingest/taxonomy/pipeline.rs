//! Taxonomy import pipeline
//!
//! Fetch → parse → delete all → insert in fixed-size batches.
//!
//! A fetch failure aborts before the store is touched. Once the delete has
//! run, batches are inserted independently: a failing batch is reported in
//! [`ImportResult::errors`] and the remaining batches still run. Nothing is
//! rolled back across batches, so an unsuccessful result means the taxonomy
//! may be partially replaced and the import should be re-run.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use super::config::ImportConfig;
use super::feed::{FeedClient, FeedError};
use super::parser::TaxonomyFeedParser;
use crate::taxonomy::{TaxonomyRecord, TaxonomyStore};

/// Outcome of one import run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportResult {
    /// True iff `errors` is empty
    pub success: bool,
    /// Records inserted by successful batches
    pub imported: usize,
    pub errors: Vec<String>,
    /// Records produced by the parser
    pub total_parsed: usize,
    /// Batches attempted
    pub batches: usize,
}

impl ImportResult {
    fn failed(message: String) -> Self {
        Self {
            success: false,
            errors: vec![message],
            ..Default::default()
        }
    }
}

/// Replaces the stored taxonomy with the contents of a feed
pub struct TaxonomyImporter {
    store: Arc<dyn TaxonomyStore>,
    feed: FeedClient,
    config: ImportConfig,
}

impl TaxonomyImporter {
    pub fn new(store: Arc<dyn TaxonomyStore>, config: ImportConfig) -> Result<Self, FeedError> {
        let feed = FeedClient::new(&config)?;
        Ok(Self {
            store,
            feed,
            config,
        })
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    fn parser(&self) -> TaxonomyFeedParser {
        match self.config.parse_limit {
            Some(limit) => {
                warn!(limit, "Taxonomy parse limit set, import will be truncated");
                TaxonomyFeedParser::with_limit(limit)
            },
            None => TaxonomyFeedParser::new(),
        }
    }

    /// Download the feed at `source_url` and replace the taxonomy with it
    #[tracing::instrument(skip(self))]
    pub async fn import_from_feed(&self, source_url: &str) -> ImportResult {
        let content = match self.feed.fetch(source_url).await {
            Ok(content) => content,
            Err(e) => {
                error!(error = %e, "Taxonomy feed fetch failed, store untouched");
                return ImportResult::failed(e.to_string());
            },
        };

        self.import_content(&content).await
    }

    /// Parse `content` and replace the taxonomy with it
    pub async fn import_content(&self, content: &str) -> ImportResult {
        let records = self.parser().parse(content);
        self.import_records(&records).await
    }

    /// Replace the taxonomy with `records`
    pub async fn import_records(&self, records: &[TaxonomyRecord]) -> ImportResult {
        let started = Instant::now();
        let total_parsed = records.len();
        let batch_size = self.config.batch_size.max(1);

        info!(total_parsed, batch_size, "Starting taxonomy import");

        match self.store.delete_all().await {
            Ok(removed) => info!(removed, "Cleared existing taxonomy"),
            Err(e) => {
                error!(error = %e, "Failed to clear taxonomy, aborting import");
                let mut result =
                    ImportResult::failed(format!("Failed to clear existing taxonomy: {}", e));
                result.total_parsed = total_parsed;
                return result;
            },
        }

        let mut result = ImportResult {
            total_parsed,
            ..Default::default()
        };

        for (index, batch) in records.chunks(batch_size).enumerate() {
            let start = index * batch_size;
            let end = start + batch.len();
            result.batches += 1;

            match self.store.insert_batch(batch).await {
                Ok(inserted) => {
                    result.imported += inserted as usize;
                    info!(batch = index, inserted, "Inserted taxonomy batch");
                },
                Err(e) => {
                    warn!(batch = index, start, end, error = %e, "Taxonomy batch failed");
                    result.errors.push(format!(
                        "Batch {} (records {}-{}): {}",
                        index,
                        start,
                        end - 1,
                        e
                    ));
                },
            }
        }

        result.success = result.errors.is_empty();
        info!(
            imported = result.imported,
            total_parsed,
            batches = result.batches,
            failed_batches = result.errors.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Taxonomy import finished"
        );

        result
    }
}
