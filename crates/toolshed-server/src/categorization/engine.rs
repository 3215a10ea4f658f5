//! Category suggestion engine

use std::sync::Arc;
use tracing::{debug, warn};

use super::models::{AutoCategorization, CategorySuggestion, SuggestionContext};
use super::scoring::score_candidate;
use super::terms::extract_terms;
use crate::taxonomy::TaxonomyStore;

/// Candidates fetched from the store per request
pub const CANDIDATE_LIMIT: i64 = 20;

/// Suggestions at or below this confidence are discarded
pub const MIN_CONFIDENCE: u8 = 30;

/// Suggestions returned per request
pub const MAX_SUGGESTIONS: usize = 5;

/// Top suggestions at or above this confidence are accepted without review
pub const AUTO_ACCEPT_CONFIDENCE: u8 = 70;

/// Matches item text against the taxonomy.
///
/// Suggestions are advisory: store failures degrade to an empty result.
#[derive(Clone)]
pub struct CategorySuggestionEngine {
    store: Arc<dyn TaxonomyStore>,
}

impl CategorySuggestionEngine {
    pub fn new(store: Arc<dyn TaxonomyStore>) -> Self {
        Self { store }
    }

    /// Up to five categories scoring above 30, best first
    #[tracing::instrument(skip(self, context), fields(name = %context.name))]
    pub async fn suggest(&self, context: &SuggestionContext) -> Vec<CategorySuggestion> {
        let terms = extract_terms(
            &context.name,
            context.description.as_deref(),
            &context.tags,
            context.attributes.as_ref(),
        );
        if terms.is_empty() {
            debug!("No search terms extracted");
            return Vec::new();
        }

        let candidates = match self.store.search_by_terms(&terms, CANDIDATE_LIMIT).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, "Category candidate lookup failed");
                return Vec::new();
            },
        };

        let mut suggestions: Vec<CategorySuggestion> = candidates
            .into_iter()
            .filter_map(|node| {
                let score = score_candidate(&node, &terms, context.existing_category);
                (score.confidence > MIN_CONFIDENCE).then(|| CategorySuggestion {
                    external_id: node.external_id,
                    path: node.path,
                    confidence: score.confidence,
                    reasons: score.reasons,
                    level: node.level,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        suggestions.truncate(MAX_SUGGESTIONS);

        debug!(terms = terms.len(), suggestions = suggestions.len(), "Scored categories");
        suggestions
    }

    /// Pick the top suggestion and decide whether it needs a human look
    pub async fn auto_categorize(&self, context: &SuggestionContext) -> AutoCategorization {
        let mut suggestions = self.suggest(context).await.into_iter();

        match suggestions.next() {
            Some(top) => AutoCategorization {
                requires_review: top.confidence < AUTO_ACCEPT_CONFIDENCE,
                suggested: Some(top),
                alternatives: suggestions.collect(),
            },
            None => AutoCategorization {
                suggested: None,
                requires_review: true,
                alternatives: Vec::new(),
            },
        }
    }
}
