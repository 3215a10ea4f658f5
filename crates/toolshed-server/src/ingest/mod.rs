//! Data ingestion
//!
//! - **taxonomy**: import of the external product taxonomy feed
//!
//! The import is exposed through `POST /api/v1/taxonomy/import` and the
//! `toolshed-ingest` CLI.

pub mod taxonomy;

pub use taxonomy::{ImportConfig, ImportResult, TaxonomyFeedParser, TaxonomyImporter};
