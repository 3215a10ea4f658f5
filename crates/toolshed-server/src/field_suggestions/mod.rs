//! Field suggestions for a new listing
//!
//! Three independent sources run concurrently and are merged:
//!
//! - **taxonomy**: an empty placeholder for each required field of the category
//! - **similar_items**: most common condition and location among similar listings
//! - **defaults**: `is_available` and `is_public`
//!
//! Suggestions at or below [`MIN_CONFIDENCE`] are dropped and the rest are
//! sorted by confidence. Several suggestions for one field are all kept.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::attributes::AttributeMappingEngine;
use crate::catalog::{CatalogStore, ListingSnapshot};

pub const MIN_CONFIDENCE: u8 = 20;
pub const REQUIRED_FIELD_CONFIDENCE: u8 = 50;
pub const SIMILAR_CONDITION_CONFIDENCE: u8 = 70;
pub const SIMILAR_LOCATION_CONFIDENCE: u8 = 65;
pub const DEFAULT_AVAILABLE_CONFIDENCE: u8 = 90;
pub const DEFAULT_PUBLIC_CONFIDENCE: u8 = 85;

/// Similar listings inspected per request
pub const SIMILAR_LISTING_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    Taxonomy,
    SimilarItems,
    Defaults,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSuggestion {
    pub field_name: String,
    pub suggested_value: String,
    /// 0-100
    pub confidence: u8,
    pub source: SuggestionSource,
    pub reasoning: String,
}

impl FieldSuggestion {
    fn new(
        field_name: &str,
        suggested_value: impl Into<String>,
        confidence: u8,
        source: SuggestionSource,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.to_string(),
            suggested_value: suggested_value.into(),
            confidence,
            source,
            reasoning: reasoning.into(),
        }
    }
}

/// What is known about the item being listed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemContext {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
}

impl ItemContext {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Most frequent non-empty value; ties go to the value seen first
fn most_common<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Option<(&'a str, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, value) in values.flatten().map(str::trim).filter(|v| !v.is_empty()).enumerate() {
        counts.entry(value).or_insert((0, position)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, (count, _))| (value, count))
}

#[derive(Clone)]
pub struct FieldSuggestionAggregator {
    catalog: Arc<dyn CatalogStore>,
    mapping: AttributeMappingEngine,
}

impl FieldSuggestionAggregator {
    pub fn new(catalog: Arc<dyn CatalogStore>, mapping: AttributeMappingEngine) -> Self {
        Self { catalog, mapping }
    }

    async fn required_field_suggestions(&self, category_id: i64) -> Vec<FieldSuggestion> {
        match self.mapping.category_requirements(category_id).await {
            Ok(requirement) => requirement
                .required_fields
                .iter()
                .map(|field| {
                    FieldSuggestion::new(
                        field,
                        "",
                        REQUIRED_FIELD_CONFIDENCE,
                        SuggestionSource::Taxonomy,
                        "required field for this category",
                    )
                })
                .collect(),
            Err(e) => {
                warn!(category_id, error = %e, "Category requirements unavailable");
                Vec::new()
            },
        }
    }

    async fn similar_item_suggestions(&self, category_id: i64, item: &ItemContext) -> Vec<FieldSuggestion> {
        let name = item.name.trim();
        if name.is_empty() {
            return Vec::new();
        }

        let listings: Vec<ListingSnapshot> = match self
            .catalog
            .find_similar_listings(category_id, name, SIMILAR_LISTING_LIMIT)
            .await
        {
            Ok(listings) => listings,
            Err(e) => {
                warn!(category_id, error = %e, "Similar listing lookup failed");
                return Vec::new();
            },
        };

        let mut suggestions = Vec::new();
        if let Some((condition, count)) = most_common(listings.iter().map(|l| l.condition.as_deref())) {
            suggestions.push(FieldSuggestion::new(
                "condition",
                condition,
                SIMILAR_CONDITION_CONFIDENCE,
                SuggestionSource::SimilarItems,
                format!(
                    "{} of {} similar items are listed in '{}' condition",
                    count,
                    listings.len(),
                    condition
                ),
            ));
        }
        if let Some((location, count)) = most_common(listings.iter().map(|l| l.location.as_deref())) {
            suggestions.push(FieldSuggestion::new(
                "location",
                location,
                SIMILAR_LOCATION_CONFIDENCE,
                SuggestionSource::SimilarItems,
                format!(
                    "{} of {} similar items are located in {}",
                    count,
                    listings.len(),
                    location
                ),
            ));
        }
        suggestions
    }

    fn default_suggestions() -> Vec<FieldSuggestion> {
        vec![
            FieldSuggestion::new(
                "is_available",
                "true",
                DEFAULT_AVAILABLE_CONFIDENCE,
                SuggestionSource::Defaults,
                "new listings are usually available to borrow",
            ),
            FieldSuggestion::new(
                "is_public",
                "true",
                DEFAULT_PUBLIC_CONFIDENCE,
                SuggestionSource::Defaults,
                "new listings are usually public",
            ),
        ]
    }

    /// Ranked suggestions for a new listing in `category_id`
    #[tracing::instrument(skip(self, item), fields(name = %item.name))]
    pub async fn get_field_suggestions(&self, category_id: i64, item: &ItemContext) -> Vec<FieldSuggestion> {
        let (required, similar) = tokio::join!(
            self.required_field_suggestions(category_id),
            self.similar_item_suggestions(category_id, item),
        );

        let mut suggestions: Vec<FieldSuggestion> = required
            .into_iter()
            .chain(similar)
            .chain(Self::default_suggestions())
            .filter(|s| s.confidence > MIN_CONFIDENCE)
            .collect();
        suggestions.sort_by(|a, b| b.confidence.cmp(&a.confidence));

        debug!(suggestions = suggestions.len(), "Aggregated field suggestions");
        suggestions
    }
}
