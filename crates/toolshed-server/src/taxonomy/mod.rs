//! Product taxonomy storage and tree navigation
//!
//! The taxonomy is a flat table of [`TaxonomyNode`]s linked by `parent_id`.
//! It is replaced wholesale by the import pipeline in
//! [`crate::ingest::taxonomy`] and read by the tree queries in [`tree`] and
//! the category suggestion engine.

pub mod hierarchy;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;
pub mod tree;

pub use hierarchy::{flatten_hierarchy, FlatOption, HierarchyNode};
pub use memory::InMemoryTaxonomyStore;
pub use models::{leaf_segment, TaxonomyNode, TaxonomyRecord, TaxonomyStats, PATH_SEPARATOR};
pub use postgres::PgTaxonomyStore;
pub use store::TaxonomyStore;
pub use tree::{get_breadcrumbs, get_tree, taxonomy_options, MAX_TREE_DEPTH};
