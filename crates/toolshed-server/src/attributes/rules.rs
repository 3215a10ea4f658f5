//! Attribute mapping rules
//!
//! Every category starts from [`core_mapping_rules`]; rules derived from the
//! category's attribute configuration are layered on top and replace core
//! rules for the same external attribute.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::transforms::Transformation;
use crate::catalog::{CategoryAttribute, DataType};

/// Longest description kept by the core rules
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MappingType {
    Direct,
    Transform,
    Composite,
}

/// How a rule derives its value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mapping {
    Direct,
    Transform { transformation: Transformation },
    /// Joins the string values of the rule's source and `extra_sources`
    Composite { extra_sources: Vec<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeMappingRule {
    pub external_attribute: String,
    pub internal_field: String,
    pub mapping: Mapping,
    pub is_required: bool,
    #[serde(default)]
    pub default_value: Option<Value>,
}

impl AttributeMappingRule {
    pub fn direct(external: impl Into<String>, internal: impl Into<String>) -> Self {
        Self {
            external_attribute: external.into(),
            internal_field: internal.into(),
            mapping: Mapping::Direct,
            is_required: false,
            default_value: None,
        }
    }

    pub fn transform(
        external: impl Into<String>,
        internal: impl Into<String>,
        transformation: Transformation,
    ) -> Self {
        Self {
            mapping: Mapping::Transform { transformation },
            ..Self::direct(external, internal)
        }
    }

    pub fn composite(
        external: impl Into<String>,
        internal: impl Into<String>,
        extra_sources: Vec<String>,
    ) -> Self {
        Self {
            mapping: Mapping::Composite { extra_sources },
            ..Self::direct(external, internal)
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn mapping_type(&self) -> MappingType {
        match self.mapping {
            Mapping::Direct => MappingType::Direct,
            Mapping::Transform { .. } => MappingType::Transform,
            Mapping::Composite { .. } => MappingType::Composite,
        }
    }

    pub fn transformation(&self) -> Option<&Transformation> {
        match &self.mapping {
            Mapping::Transform { transformation } => Some(transformation),
            _ => None,
        }
    }

    /// Value for `internal_field` from `payload`, or `None` to omit the field.
    ///
    /// Source keys match ignoring case and surrounding whitespace, with an
    /// exact key taking precedence. An absent or null source yields the
    /// default value.
    pub fn apply(&self, payload: &Map<String, Value>) -> Option<Value> {
        let source = payload_value(payload, &self.external_attribute).filter(|v| !v.is_null());

        match &self.mapping {
            Mapping::Direct => source.cloned().or_else(|| self.default_value.clone()),
            Mapping::Transform { transformation } => match source {
                Some(value) => Some(transformation.apply(value)),
                None => self.default_value.clone(),
            },
            Mapping::Composite { extra_sources } => {
                let parts: Vec<String> = std::iter::once(&self.external_attribute)
                    .chain(extra_sources.iter())
                    .filter_map(|key| payload_value(payload, key))
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.trim().to_string()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .filter(|s| !s.is_empty())
                    .collect();

                if parts.is_empty() {
                    self.default_value.clone()
                } else {
                    Some(Value::String(parts.join(" ")))
                }
            },
        }
    }
}

/// Look up `key` in `payload`, falling back to a case-insensitive match
pub fn payload_value<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    payload.get(key).or_else(|| {
        let wanted = key.trim().to_lowercase();
        payload
            .iter()
            .find(|(k, _)| k.trim().to_lowercase() == wanted)
            .map(|(_, v)| v)
    })
}

/// Rules that apply to every category
pub fn core_mapping_rules() -> Vec<AttributeMappingRule> {
    vec![
        AttributeMappingRule::direct("id", "external_id"),
        AttributeMappingRule::direct("name", "name"),
        AttributeMappingRule::direct("title", "name").required(),
        AttributeMappingRule::transform(
            "description",
            "description",
            Transformation::Truncate {
                max_chars: DESCRIPTION_MAX_CHARS,
            },
        ),
        AttributeMappingRule::direct("location", "location"),
        AttributeMappingRule::transform("images", "images", Transformation::ToArray),
        AttributeMappingRule::transform("availability", "is_available", Transformation::ToBoolean),
        AttributeMappingRule::transform("condition", "condition", Transformation::NormalizeCondition),
    ]
}

/// One rule per configured attribute that names an external key
pub fn rules_for_attributes(attributes: &[CategoryAttribute]) -> Vec<AttributeMappingRule> {
    attributes
        .iter()
        .filter_map(|attribute| {
            let external = attribute.external_key.as_deref()?;
            let mut rule = match attribute.data_type {
                DataType::Boolean => {
                    AttributeMappingRule::transform(external, &attribute.name, Transformation::ToBoolean)
                },
                DataType::MultiSelect => {
                    AttributeMappingRule::transform(external, &attribute.name, Transformation::ToArray)
                },
                _ => AttributeMappingRule::direct(external, &attribute.name),
            };
            rule.is_required = attribute.is_required;
            rule.default_value = attribute.default_value.clone();
            Some(rule)
        })
        .collect()
}

/// Core rules with category rules layered on top.
///
/// A category rule replaces the core rule for the same external attribute in
/// place; new attributes are appended.
pub fn merge_rules(
    core: Vec<AttributeMappingRule>,
    category: Vec<AttributeMappingRule>,
) -> Vec<AttributeMappingRule> {
    let mut merged = core;
    for rule in category {
        match merged
            .iter_mut()
            .find(|r| r.external_attribute == rule.external_attribute)
        {
            Some(existing) => *existing = rule,
            None => merged.push(rule),
        }
    }
    merged
}
