//! Value transformations applied by mapping rules

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Closed set of item conditions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemCondition {
    New,
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ItemCondition {
    /// Map a free-text description onto a condition.
    ///
    /// Keywords are checked in order, first hit wins; unrecognised text is
    /// `Good`.
    pub fn normalize(text: &str) -> Self {
        const KEYWORDS: [(&[&str], ItemCondition); 5] = [
            (&["unused", "new"], ItemCondition::New),
            (&["perfect", "excellent"], ItemCondition::Excellent),
            (&["working", "good"], ItemCondition::Good),
            (&["used", "fair"], ItemCondition::Fair),
            (&["broken", "poor"], ItemCondition::Poor),
        ];

        let lower = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
            .map(|(_, condition)| *condition)
            .unwrap_or(ItemCondition::Good)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCondition::New => "new",
            ItemCondition::Excellent => "excellent",
            ItemCondition::Good => "good",
            ItemCondition::Fair => "fair",
            ItemCondition::Poor => "poor",
        }
    }
}

impl fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pure value-to-value function a mapping rule can apply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transformation {
    /// Cut strings to at most `max_chars` characters
    Truncate { max_chars: usize },
    /// Free text to one of [`ItemCondition`]
    NormalizeCondition,
    /// Wrap scalars in a one-element array, arrays pass through
    ToArray,
    /// Truthy/falsy values to `true`/`false`
    ToBoolean,
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "false" | "no" | "off" | "n" | "out of stock" | "unavailable"
        ),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

impl Transformation {
    pub fn apply(&self, value: &Value) -> Value {
        match self {
            Transformation::Truncate { max_chars } => match value {
                Value::String(s) if s.chars().count() > *max_chars => {
                    Value::String(s.chars().take(*max_chars).collect())
                },
                other => other.clone(),
            },
            Transformation::NormalizeCondition => match value {
                Value::String(s) => Value::String(ItemCondition::normalize(s).to_string()),
                Value::Null => Value::Null,
                other => Value::String(ItemCondition::normalize(&other.to_string()).to_string()),
            },
            Transformation::ToArray => match value {
                Value::Array(_) => value.clone(),
                Value::Null => Value::Array(Vec::new()),
                other => Value::Array(vec![other.clone()]),
            },
            Transformation::ToBoolean => Value::Bool(truthy(value)),
        }
    }
}
