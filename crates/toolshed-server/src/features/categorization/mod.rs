//! Category suggestion endpoints
//!
//! - `POST /categorization/suggest`
//! - `POST /categorization/auto`

pub mod queries;
pub mod routes;

pub use routes::categorization_routes;
