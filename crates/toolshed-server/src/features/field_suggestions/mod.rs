//! `POST /field-suggestions`: prefill hints for the listing form

pub mod queries;
pub mod routes;

pub use routes::field_suggestions_routes;
