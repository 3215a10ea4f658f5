//! Category suggestion
//!
//! Extracts search terms from an item's text, retrieves matching taxonomy
//! nodes, scores them and decides whether the best match can be accepted
//! without review.

pub mod engine;
pub mod models;
pub mod scoring;
pub mod terms;

pub use engine::{CategorySuggestionEngine, AUTO_ACCEPT_CONFIDENCE, MAX_SUGGESTIONS, MIN_CONFIDENCE};
pub use models::{AutoCategorization, CategorySuggestion, SuggestionContext};
pub use terms::extract_terms;
