//! Attribute mapping engine
//!
//! Maps external attribute payloads onto a category's internal fields,
//! validates the result, and proposes mappings for fields no rule covers.
//! Rules are derived per request from the catalog; if the catalog cannot be
//! read the engine falls back to the core rules alone.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, warn};

use super::rules::{core_mapping_rules, merge_rules, rules_for_attributes, AttributeMappingRule};
use super::validator::{AttributeValidator, ValidationOutcome};
use crate::catalog::{CatalogStore, CategoryAttribute, DataType, ValidationRules};
use crate::error::StoreResult;

/// Field requirements of one category
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryRequirement {
    pub category_id: i64,
    pub required_fields: Vec<String>,
    pub optional_fields: Vec<String>,
    pub field_types: BTreeMap<String, DataType>,
    pub validation_rules: BTreeMap<String, ValidationRules>,
}

impl CategoryRequirement {
    pub fn from_attributes(category_id: i64, attributes: &[CategoryAttribute]) -> Self {
        let mut requirement = Self {
            category_id,
            ..Default::default()
        };
        for attribute in attributes {
            if attribute.is_required {
                requirement.required_fields.push(attribute.name.clone());
            } else {
                requirement.optional_fields.push(attribute.name.clone());
            }
            requirement
                .field_types
                .insert(attribute.name.clone(), attribute.data_type);
            if !attribute.validation.is_empty() {
                requirement
                    .validation_rules
                    .insert(attribute.name.clone(), attribute.validation.clone());
            }
        }
        requirement
    }
}

#[derive(Clone)]
pub struct AttributeMappingEngine {
    catalog: Arc<dyn CatalogStore>,
    validator: AttributeValidator,
}

impl AttributeMappingEngine {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Result<Self, regex::Error> {
        Ok(Self {
            catalog,
            validator: AttributeValidator::new()?,
        })
    }

    /// Attributes of the category, empty (with a warning) if the catalog fails
    async fn attributes_or_empty(&self, category_id: i64) -> Vec<CategoryAttribute> {
        match self.catalog.category_attributes(category_id).await {
            Ok(attributes) => attributes,
            Err(e) => {
                warn!(category_id, error = %e, "Category attributes unavailable, using core rules only");
                Vec::new()
            },
        }
    }

    fn rules_from(attributes: &[CategoryAttribute]) -> Vec<AttributeMappingRule> {
        merge_rules(core_mapping_rules(), rules_for_attributes(attributes))
    }

    /// Effective rules for a category
    pub async fn mapping_rules(&self, category_id: i64) -> Vec<AttributeMappingRule> {
        Self::rules_from(&self.attributes_or_empty(category_id).await)
    }

    /// Apply the category's rules to `payload`.
    ///
    /// Rules are applied in order; a rule that yields nothing leaves any value
    /// an earlier rule produced for the same field in place.
    #[tracing::instrument(skip(self, payload), fields(keys = payload.len()))]
    pub async fn map_external_attributes(
        &self,
        category_id: i64,
        payload: &Map<String, Value>,
    ) -> BTreeMap<String, Value> {
        let rules = self.mapping_rules(category_id).await;
        let mut mapped = BTreeMap::new();
        for rule in &rules {
            if let Some(value) = rule.apply(payload) {
                mapped.insert(rule.internal_field.clone(), value);
            }
        }
        debug!(rules = rules.len(), mapped = mapped.len(), "Mapped external attributes");
        mapped
    }

    /// Check mapped fields against the category's attributes and the required
    /// core fields
    pub async fn validate_mapped(
        &self,
        category_id: i64,
        fields: &Map<String, Value>,
    ) -> ValidationOutcome {
        let attributes = self.attributes_or_empty(category_id).await;
        let mut outcome = self.validator.validate(&attributes, fields);

        let configured: BTreeSet<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
        let required_core: BTreeSet<String> = core_mapping_rules()
            .into_iter()
            .filter(|r| r.is_required && !configured.contains(r.internal_field.as_str()))
            .map(|r| r.internal_field)
            .collect();
        for field in required_core {
            if fields.get(&field).map_or(true, super::values::is_empty_value) {
                outcome.errors.push(format!("{} is required", field));
            }
        }

        outcome.is_valid = outcome.errors.is_empty();
        outcome
    }

    /// Propose internal fields for external keys that no rule covers.
    ///
    /// A candidate matches when one name contains the other, ignoring case.
    /// Exact matches win, then the closest in length. Keys without a
    /// candidate are left out.
    pub async fn suggest_mappings(
        &self,
        category_id: i64,
        payload: &Map<String, Value>,
    ) -> BTreeMap<String, String> {
        let attributes = self.attributes_or_empty(category_id).await;
        let rules = Self::rules_from(&attributes);

        let covered: BTreeSet<String> = rules
            .iter()
            .map(|r| r.external_attribute.trim().to_lowercase())
            .collect();
        let internal_fields: BTreeSet<&str> = attributes
            .iter()
            .map(|a| a.name.as_str())
            .chain(rules.iter().map(|r| r.internal_field.as_str()))
            .collect();

        let mut suggestions = BTreeMap::new();
        for key in payload.keys() {
            let external = key.trim().to_lowercase();
            if external.is_empty() || covered.contains(&external) {
                continue;
            }

            let best = internal_fields
                .iter()
                .filter(|field| {
                    let field = field.to_lowercase();
                    field.contains(&external) || external.contains(&field)
                })
                .min_by_key(|field| {
                    let inexact = field.to_lowercase() != external;
                    (inexact, field.len().abs_diff(external.len()))
                });

            if let Some(field) = best {
                suggestions.insert(key.clone(), field.to_string());
            }
        }
        suggestions
    }

    /// Requirements of a category. Unlike the mapping calls this propagates
    /// catalog failures.
    pub async fn category_requirements(&self, category_id: i64) -> StoreResult<CategoryRequirement> {
        let attributes = self.catalog.category_attributes(category_id).await?;
        Ok(CategoryRequirement::from_attributes(category_id, &attributes))
    }
}
