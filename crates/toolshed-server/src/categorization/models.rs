//! Category suggestion request and response types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Item text a suggestion is computed from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuggestionContext {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Taxonomy node the item is currently filed under, if any
    #[serde(default, alias = "existingCategory")]
    pub existing_category: Option<i64>,
}

impl SuggestionContext {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_existing_category(mut self, external_id: i64) -> Self {
        self.existing_category = Some(external_id);
        self
    }
}

/// A ranked taxonomy match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySuggestion {
    pub external_id: i64,
    pub path: String,
    /// 0-100
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub level: i32,
}

/// Auto-categorization envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoCategorization {
    pub suggested: Option<CategorySuggestion>,
    pub requires_review: bool,
    pub alternatives: Vec<CategorySuggestion>,
}
