//! Taxonomy feed parser
//!
//! The feed is tab-separated with four columns:
//!
//! ```text
//! external_id	category_path	parent_id	level
//! 1200	Power Tools > Drills & Drivers	1	2
//! 1203	Power Tools > Drills & Drivers > Cordless Drills	1200	3
//! ```
//!
//! The header row is optional and recognised by the `external_id` marker on
//! the first line. [`TaxonomyFeedParser::parse`] is lenient and drops rows it
//! cannot use; [`TaxonomyFeedParser::validate`] reports every problem instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::taxonomy::TaxonomyRecord;

/// Marker identifying the header line
pub const HEADER_MARKER: &str = "external_id";

/// Expected header columns, in order
pub const FEED_COLUMNS: [&str; 4] = ["external_id", "category_path", "parent_id", "level"];

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Taxonomy feed is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
}

/// Result of a strict feed check
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Parser for the tab-separated taxonomy feed
#[derive(Debug, Clone, Default)]
pub struct TaxonomyFeedParser {
    /// Maximum number of records to emit (None for unlimited)
    parse_limit: Option<usize>,
}

/// Split content into the optional header line and the data lines
fn split_header(content: &str) -> (Option<&str>, std::str::Lines<'_>) {
    let mut lines = content.lines();
    let header = match content.lines().next() {
        Some(first) if first.contains(HEADER_MARKER) => lines.next(),
        _ => None,
    };
    (header, lines)
}

impl TaxonomyFeedParser {
    /// Create a parser with no limit
    pub fn new() -> Self {
        Self { parse_limit: None }
    }

    /// Create a parser that stops after `limit` records
    pub fn with_limit(limit: usize) -> Self {
        Self {
            parse_limit: Some(limit),
        }
    }

    /// Parse feed bytes, failing only if they are not UTF-8
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<TaxonomyRecord>, ParseError> {
        let content = std::str::from_utf8(bytes)?;
        Ok(self.parse(content))
    }

    /// Parse feed text into records, silently dropping unusable rows
    pub fn parse(&self, content: &str) -> Vec<TaxonomyRecord> {
        let (_, lines) = split_header(content);
        let mut records = Vec::new();
        let mut dropped = 0usize;

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            match Self::parse_line(line) {
                Some(record) => {
                    records.push(record);
                    if let Some(limit) = self.parse_limit {
                        if records.len() >= limit {
                            debug!("Reached parse limit of {} records", limit);
                            break;
                        }
                    }
                },
                None => dropped += 1,
            }
        }

        debug!(records = records.len(), dropped, "Parsed taxonomy feed");
        records
    }

    /// Parse a single data line.
    ///
    /// Returns `None` unless the line carries an integer `external_id` and a
    /// non-empty `category_path`. A missing or unparseable `parent_id` becomes
    /// `None` and a missing or unparseable `level` becomes 0.
    pub fn parse_line(line: &str) -> Option<TaxonomyRecord> {
        let mut fields = line.split('\t');

        let external_id: i64 = fields.next()?.trim().parse().ok()?;
        let path = fields.next()?.trim();
        if path.is_empty() {
            return None;
        }
        let parent_id = fields.next().and_then(|f| f.trim().parse().ok());
        let level = fields
            .next()
            .and_then(|f| f.trim().parse().ok())
            .unwrap_or(0);

        Some(TaxonomyRecord::new(external_id, path, parent_id, level))
    }

    /// Check the feed strictly, reporting every problem.
    ///
    /// Line numbers are 1-based and count from the first data line.
    pub fn validate(&self, content: &str) -> FeedValidation {
        let (header, lines) = split_header(content);
        let mut errors = Vec::new();

        if let Some(header) = header {
            let columns: Vec<&str> = header.split('\t').map(str::trim).collect();
            let missing: Vec<&str> = FEED_COLUMNS
                .iter()
                .copied()
                .filter(|c| !columns.contains(c))
                .collect();
            if !missing.is_empty() {
                errors.push(format!("Header is missing columns: {}", missing.join(", ")));
            }
        }

        let mut data_rows = 0usize;
        for (idx, line) in lines.enumerate() {
            let line_num = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            data_rows += 1;

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 {
                errors.push(format!(
                    "Line {}: expected at least 2 tab-separated fields, found {}",
                    line_num,
                    fields.len()
                ));
            } else if fields[0].trim().parse::<i64>().is_err() {
                errors.push(format!(
                    "Line {}: external_id '{}' is not a number",
                    line_num,
                    fields[0].trim()
                ));
            } else if fields[1].trim().is_empty() {
                errors.push(format!("Line {}: category_path is empty", line_num));
            }
        }

        if data_rows == 0 {
            errors.push("Feed contains no data rows".to_string());
        }

        FeedValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
