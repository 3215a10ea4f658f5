//! Category attribute configuration, listings and listing categories
//!
//! These tables belong to the listing subsystem; the engine only reads them.

pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use memory::{InMemoryCatalogStore, StoredListing};
pub use models::{
    CategoryAttribute, DataType, ListingCategory, ListingSnapshot, ValidationRules,
};
pub use postgres::PgCatalogStore;
pub use store::CatalogStore;
