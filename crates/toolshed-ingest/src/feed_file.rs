//! Reading feed files and rendering parsed records

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::Path;
use toolshed_server::ingest::taxonomy::TaxonomyFeedParser;
use toolshed_server::taxonomy::TaxonomyRecord;

/// Output format for `parse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Feed-compatible TSV with header
    Tsv,
    /// One JSON object per line
    Json,
}

/// Read a feed file, rejecting content that is not UTF-8
pub fn read_feed(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read feed {}", path.display()))?;
    String::from_utf8(bytes).with_context(|| format!("Feed {} is not valid UTF-8", path.display()))
}

/// Parse feed content, keeping at most `limit` records
pub fn parse_records(content: &str, limit: Option<usize>) -> Vec<TaxonomyRecord> {
    let parser = match limit {
        Some(limit) => TaxonomyFeedParser::with_limit(limit),
        None => TaxonomyFeedParser::new(),
    };
    parser.parse(content)
}

pub fn render(records: &[TaxonomyRecord], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Tsv => {
            out.push_str(TaxonomyRecord::tsv_header());
            out.push('\n');
            for record in records {
                out.push_str(&record.to_tsv());
                out.push('\n');
            }
        },
        OutputFormat::Json => {
            for record in records {
                out.push_str(&record.to_json()?);
                out.push('\n');
            }
        },
    }
    Ok(out)
}
