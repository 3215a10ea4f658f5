pub mod get_suggestions;

pub use get_suggestions::{FieldSuggestionsQuery, FieldSuggestionsQueryError};
