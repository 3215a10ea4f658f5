//! Read models owned by the listing/catalog subsystem

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Declared type of a category attribute
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Text,
    Number,
    Boolean,
    Date,
    Select,
    MultiSelect,
    Url,
    Email,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Text => "text",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Date => "date",
            DataType::Select => "select",
            DataType::MultiSelect => "multi_select",
            DataType::Url => "url",
            DataType::Email => "email",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" => Ok(DataType::Text),
            "number" | "numeric" => Ok(DataType::Number),
            "boolean" | "bool" => Ok(DataType::Boolean),
            "date" => Ok(DataType::Date),
            "select" => Ok(DataType::Select),
            "multi_select" | "multiselect" => Ok(DataType::MultiSelect),
            "url" => Ok(DataType::Url),
            "email" => Ok(DataType::Email),
            other => Err(format!("unknown attribute data type: {}", other)),
        }
    }
}

/// Per-attribute constraints, all optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Allowed values for select / multi_select
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl ValidationRules {
    pub fn is_empty(&self) -> bool {
        self.min_length.is_none()
            && self.max_length.is_none()
            && self.min_value.is_none()
            && self.max_value.is_none()
            && self.options.is_none()
    }
}

/// One configured field of a listing category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryAttribute {
    pub category_id: i64,
    /// Internal field name
    pub name: String,
    pub label: String,
    pub data_type: DataType,
    pub is_required: bool,
    #[serde(default)]
    pub default_value: Option<Value>,
    /// External attribute this field is fed from, when configured
    #[serde(default)]
    pub external_key: Option<String>,
    #[serde(default)]
    pub validation: ValidationRules,
}

impl CategoryAttribute {
    pub fn new(category_id: i64, name: impl Into<String>, data_type: DataType) -> Self {
        let name = name.into();
        Self {
            category_id,
            label: name.clone(),
            name,
            data_type,
            is_required: false,
            default_value: None,
            external_key: None,
            validation: ValidationRules::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_external_key(mut self, key: impl Into<String>) -> Self {
        self.external_key = Some(key.into());
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_validation(mut self, rules: ValidationRules) -> Self {
        self.validation = rules;
        self
    }
}

/// The fields of an existing listing the field suggester learns from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingSnapshot {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub condition: Option<String>,
    pub location: Option<String>,
}

/// Internal, hand-curated listing category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingCategory {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

impl crate::taxonomy::HierarchyNode for ListingCategory {
    type Id = i64;

    fn node_id(&self) -> i64 {
        self.id
    }

    fn parent_node_id(&self) -> Option<i64> {
        self.parent_id
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}
