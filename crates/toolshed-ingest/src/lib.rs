//! Toolshed Ingest Library
//!
//! Offline tooling around the category taxonomy feed: validating a feed
//! file, converting it to TSV or JSON lines, and importing it from a file
//! or URL into a taxonomy store.
//!
//! # Example
//!
//! ```no_run
//! use toolshed_ingest::feed_file::{self, OutputFormat};
//! use toolshed_server::ingest::taxonomy::TaxonomyFeedParser;
//!
//! fn main() -> anyhow::Result<()> {
//!     let content = feed_file::read_feed("taxonomy.tsv")?;
//!     let records = TaxonomyFeedParser::new().parse(&content);
//!     println!("{}", feed_file::render(&records, OutputFormat::Json)?);
//!     Ok(())
//! }
//! ```

pub mod feed_file;
pub mod import;
