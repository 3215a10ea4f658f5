//! External product taxonomy ingestion
//!
//! - **config**: batch size, fetch timeout and parse limit (`TAXONOMY_*` env vars)
//! - **parser**: lenient `parse` and strict `validate` over the TSV feed
//! - **feed**: HTTP download of the feed
//! - **pipeline**: full-replace import in independent batches

pub mod config;
pub mod feed;
pub mod parser;
pub mod pipeline;

pub use config::ImportConfig;
pub use feed::{FeedClient, FeedError};
pub use parser::{FeedValidation, ParseError, TaxonomyFeedParser};
pub use pipeline::{ImportResult, TaxonomyImporter};
