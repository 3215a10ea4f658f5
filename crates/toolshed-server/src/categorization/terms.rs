//! Search term extraction from item text

use serde_json::{Map, Value};
use std::collections::HashSet;

/// Words never used as search terms
pub const STOP_WORDS: [&str; 12] = [
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Terms of this many characters or fewer are dropped
pub const MIN_TERM_CHARS: usize = 2;

fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Ordered, de-duplicated term list
#[derive(Debug, Default)]
struct TermSet {
    terms: Vec<String>,
    seen: HashSet<String>,
}

impl TermSet {
    fn push(&mut self, term: String) {
        if term.chars().count() <= MIN_TERM_CHARS || STOP_WORDS.contains(&term.as_str()) {
            return;
        }
        if self.seen.insert(term.clone()) {
            self.terms.push(term);
        }
    }

    fn extend_words(&mut self, text: &str) {
        for word in text.split_whitespace() {
            self.push(word.to_string());
        }
    }
}

/// Lower-cased search terms from an item's text, in first-seen order.
///
/// The name is split on whitespace as is; the description has punctuation
/// removed first. Tags are kept whole. String-valued attributes are split on
/// whitespace, other attribute values are ignored.
pub fn extract_terms(
    name: &str,
    description: Option<&str>,
    tags: &[String],
    attributes: Option<&Map<String, Value>>,
) -> Vec<String> {
    let mut set = TermSet::default();

    set.extend_words(&name.to_lowercase());

    if let Some(description) = description {
        set.extend_words(&strip_punctuation(&description.to_lowercase()));
    }

    for tag in tags {
        set.push(tag.trim().to_lowercase());
    }

    if let Some(attributes) = attributes {
        for value in attributes.values() {
            if let Value::String(text) = value {
                set.extend_words(&text.to_lowercase());
            }
        }
    }

    set.terms
}
