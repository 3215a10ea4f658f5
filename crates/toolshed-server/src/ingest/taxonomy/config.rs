//! Taxonomy import configuration

use serde::{Deserialize, Serialize};

/// Records per insert batch
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Feed download timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 120;

/// Configuration for importing the external taxonomy feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportConfig {
    /// Records inserted per store call (default: 1000)
    pub batch_size: usize,
    /// Timeout for downloading the feed (default: 120)
    pub fetch_timeout_secs: u64,
    /// Maximum number of records to parse (None for unlimited)
    pub parse_limit: Option<usize>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            parse_limit: None,
        }
    }
}

impl ImportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `TAXONOMY_IMPORT_BATCH_SIZE`, `TAXONOMY_FETCH_TIMEOUT` and
    /// `TAXONOMY_PARSE_LIMIT`, falling back to defaults for unset or
    /// unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            batch_size: std::env::var("TAXONOMY_IMPORT_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.batch_size),
            fetch_timeout_secs: std::env::var("TAXONOMY_FETCH_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fetch_timeout_secs),
            parse_limit: std::env::var("TAXONOMY_PARSE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Set batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set fetch timeout
    pub fn with_fetch_timeout(mut self, timeout_secs: u64) -> Self {
        self.fetch_timeout_secs = timeout_secs;
        self
    }

    /// Set parse limit
    pub fn with_parse_limit(mut self, limit: usize) -> Self {
        self.parse_limit = Some(limit);
        self
    }
}
