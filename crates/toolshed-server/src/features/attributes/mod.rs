//! Attribute mapping endpoints
//!
//! - `GET  /attributes/:category_id/requirements`
//! - `POST /attributes/map`
//! - `POST /attributes/validate`
//! - `POST /attributes/suggest-mappings`

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::attributes_routes;
