//! `GET /listing-categories/options`

pub mod queries;
pub mod routes;

pub use routes::listing_categories_routes;
