//! Toolshed classification server
//!
//! Taxonomy and classification engine for a tool-lending marketplace:
//!
//! - **taxonomy**: the external category taxonomy, its store and tree views
//! - **ingest**: feed parsing and batch import of the taxonomy
//! - **categorization**: ranked category suggestions for a listing draft
//! - **attributes**: mapping external attribute payloads onto listing fields
//! - **field_suggestions**: prefill hints aggregated from several sources
//! - **catalog**: marketplace categories, attribute definitions and listings
//!
//! The HTTP surface lives in [`features`], one vertical slice per area, and
//! is assembled by [`api::create_router`].
//!
//! Stores are traits with a PostgreSQL implementation and an in-memory
//! implementation, so every engine can run without a database.

pub mod api;
pub mod attributes;
pub mod catalog;
pub mod categorization;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod field_suggestions;
pub mod ingest;
pub mod middleware;
pub mod taxonomy;

pub use error::{AppError, StoreError, StoreResult};
