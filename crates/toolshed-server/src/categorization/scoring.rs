//! Candidate scoring
//!
//! ```text
//! confidence = 70 * matched / terms
//!            + 30 * leaf_matched / terms
//!            - 10 if level <= 1
//!            + 10 if the candidate is the item's current category
//! ```
//!
//! clamped to 0..=100 and rounded. Every signal that contributes adds a reason.

use crate::taxonomy::TaxonomyNode;

pub const PATH_MATCH_WEIGHT: f64 = 70.0;
pub const LEAF_MATCH_WEIGHT: f64 = 30.0;
pub const SHALLOW_PENALTY: f64 = 10.0;
pub const EXISTING_CATEGORY_BONUS: f64 = 10.0;

/// Levels at or below this are considered too broad
pub const SHALLOW_LEVEL: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub confidence: u8,
    pub reasons: Vec<String>,
}

/// Score `node` against lower-cased `terms`
pub fn score_candidate(node: &TaxonomyNode, terms: &[String], existing_category: Option<i64>) -> Score {
    if terms.is_empty() {
        return Score {
            confidence: 0,
            reasons: Vec::new(),
        };
    }

    let path = node.path.to_lowercase();
    let leaf = node.label().to_lowercase();
    let mut reasons = Vec::new();
    let mut matched = 0usize;
    let mut leaf_matched = 0usize;

    for term in terms {
        if path.contains(term.as_str()) {
            matched += 1;
            reasons.push(format!("matched term: {}", term));
        }
        if leaf.contains(term.as_str()) {
            leaf_matched += 1;
            reasons.push(format!("matched category name: {}", term));
        }
    }

    let n = terms.len() as f64;
    let mut confidence =
        PATH_MATCH_WEIGHT * matched as f64 / n + LEAF_MATCH_WEIGHT * leaf_matched as f64 / n;

    if node.level <= SHALLOW_LEVEL {
        confidence -= SHALLOW_PENALTY;
        reasons.push("broad category".to_string());
    }
    if existing_category == Some(node.external_id) {
        confidence += EXISTING_CATEGORY_BONUS;
        reasons.push("current category".to_string());
    }

    Score {
        confidence: confidence.clamp(0.0, 100.0).round() as u8,
        reasons,
    }
}
