//! Type-aware attribute validation
//!
//! Checks accumulate: every failing field contributes its messages and the
//! caller gets the whole list.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::values::{is_empty_value, AttributeValue};
use crate::catalog::{CategoryAttribute, ValidationRules};

const URL_PATTERN: &str = r"^https?://[^\s/$.?#][^\s]*$";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AttributeValidator {
    url: Regex,
    email: Regex,
}

impl AttributeValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            url: Regex::new(URL_PATTERN)?,
            email: Regex::new(EMAIL_PATTERN)?,
        })
    }

    /// Validate `fields` against every attribute in `attributes`
    pub fn validate(&self, attributes: &[CategoryAttribute], fields: &Map<String, Value>) -> ValidationOutcome {
        let errors = attributes
            .iter()
            .flat_map(|attribute| self.validate_field(attribute, fields.get(&attribute.name)))
            .collect();
        ValidationOutcome::from_errors(errors)
    }

    /// Messages for one field, empty when it passes
    pub fn validate_field(&self, attribute: &CategoryAttribute, value: Option<&Value>) -> Vec<String> {
        let label = &attribute.label;
        let value = match value {
            Some(v) if !is_empty_value(v) => v,
            _ if attribute.is_required => return vec![format!("{} is required", label)],
            _ => return Vec::new(),
        };

        match AttributeValue::from_json(attribute.data_type, value) {
            Ok(typed) => self.check_rules(label, &typed, &attribute.validation),
            Err(reason) => vec![format!("{} {}", label, reason)],
        }
    }

    fn check_rules(&self, label: &str, value: &AttributeValue, rules: &ValidationRules) -> Vec<String> {
        let mut errors = Vec::new();

        match value {
            AttributeValue::Text(text) => {
                let len = text.chars().count();
                if let Some(min) = rules.min_length {
                    if len < min {
                        errors.push(format!("{} must be at least {} characters", label, min));
                    }
                }
                if let Some(max) = rules.max_length {
                    if len > max {
                        errors.push(format!("{} must be at most {} characters", label, max));
                    }
                }
            },
            AttributeValue::Number(n) => {
                if let Some(min) = rules.min_value {
                    if *n < min {
                        errors.push(format!("{} must be at least {}", label, min));
                    }
                }
                if let Some(max) = rules.max_value {
                    if *n > max {
                        errors.push(format!("{} must be at most {}", label, max));
                    }
                }
            },
            AttributeValue::Select(choice) => {
                if let Some(options) = &rules.options {
                    if !options.contains(choice) {
                        errors.push(format!("{} must be one of: {}", label, options.join(", ")));
                    }
                }
            },
            AttributeValue::MultiSelect(choices) => {
                if let Some(options) = &rules.options {
                    for choice in choices.iter().filter(|c| !options.contains(c)) {
                        errors.push(format!("{} contains invalid option: {}", label, choice));
                    }
                }
            },
            AttributeValue::Url(url) => {
                if !self.url.is_match(url) {
                    errors.push(format!("{} must be a valid URL", label));
                }
            },
            AttributeValue::Email(email) => {
                if !self.email.is_match(email) {
                    errors.push(format!("{} must be a valid email address", label));
                }
            },
            AttributeValue::Boolean(_) | AttributeValue::Date(_) => {},
        }

        errors
    }
}
