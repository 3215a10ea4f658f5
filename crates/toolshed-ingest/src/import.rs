//! Importing a feed from a URL or a local file

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;
use toolshed_server::ingest::taxonomy::{ImportResult, TaxonomyImporter};

use crate::feed_file;

/// Where the feed comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

/// Run one import. Unreadable local files are an error; every other
/// failure is reported inside the returned [`ImportResult`].
pub async fn run_import(importer: &TaxonomyImporter, source: &FeedSource) -> Result<ImportResult> {
    let result = match source {
        FeedSource::Url(url) => {
            info!(url = %url, "Importing taxonomy from feed URL");
            importer.import_from_feed(url).await
        },
        FeedSource::File(path) => {
            info!(path = %path.display(), "Importing taxonomy from file");
            let content = feed_file::read_feed(path)?;
            importer.import_content(&content).await
        },
    };
    Ok(result)
}

/// One-line human summary of an import
pub fn summarize(result: &ImportResult) -> String {
    if result.success {
        format!(
            "Imported {} of {} categories in {} batches",
            result.imported, result.total_parsed, result.batches
        )
    } else {
        format!(
            "Import finished with {} errors: {} of {} categories imported",
            result.errors.len(),
            result.imported,
            result.total_parsed
        )
    }
}
