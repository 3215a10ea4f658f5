//! Taxonomy navigation, search and import
//!
//! - `GET  /taxonomy/children?parent_id=`
//! - `GET  /taxonomy/:id/tree?max_depth=`
//! - `GET  /taxonomy/:id/breadcrumbs`
//! - `GET  /taxonomy/search?q=&limit=`
//! - `GET  /taxonomy/stats`
//! - `GET  /taxonomy/options?max_depth=`
//! - `POST /taxonomy/import`
//! - `POST /taxonomy/validate`

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::taxonomy_routes;
