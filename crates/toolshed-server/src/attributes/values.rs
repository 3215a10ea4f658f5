//! Typed attribute values
//!
//! Listing payloads arrive as loose JSON. Each configured attribute has a
//! [`DataType`]; [`AttributeValue::from_json`] turns the raw value into the
//! matching variant or explains why it cannot.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::DataType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    Select(String),
    MultiSelect(Vec<String>),
    Url(String),
    Email(String),
}

/// True for `null`, blank strings and empty arrays
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}

impl AttributeValue {
    /// Interpret `value` as `data_type`
    pub fn from_json(data_type: DataType, value: &Value) -> Result<Self, String> {
        match data_type {
            DataType::Text => scalar_text(value)
                .map(AttributeValue::Text)
                .ok_or_else(|| "must be text".to_string()),
            DataType::Number => match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            }
            .filter(|n: &f64| n.is_finite())
            .map(AttributeValue::Number)
            .ok_or_else(|| "must be a number".to_string()),
            DataType::Boolean => match value {
                Value::Bool(b) => Some(*b),
                Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                    "true" => Some(true),
                    "false" => Some(false),
                    _ => None,
                },
                _ => None,
            }
            .map(AttributeValue::Boolean)
            .ok_or_else(|| "must be true or false".to_string()),
            DataType::Date => value
                .as_str()
                .and_then(|s| parse_date(s.trim()))
                .map(AttributeValue::Date)
                .ok_or_else(|| "must be a valid date".to_string()),
            DataType::Select => scalar_text(value)
                .map(AttributeValue::Select)
                .ok_or_else(|| "must be a single option".to_string()),
            DataType::MultiSelect => match value {
                Value::Array(items) => items
                    .iter()
                    .map(scalar_text)
                    .collect::<Option<Vec<_>>>(),
                other => scalar_text(other).map(|s| vec![s]),
            }
            .map(AttributeValue::MultiSelect)
            .ok_or_else(|| "must be a list of options".to_string()),
            DataType::Url => value
                .as_str()
                .map(|s| AttributeValue::Url(s.trim().to_string()))
                .ok_or_else(|| "must be a URL".to_string()),
            DataType::Email => value
                .as_str()
                .map(|s| AttributeValue::Email(s.trim().to_string()))
                .ok_or_else(|| "must be an email address".to_string()),
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            AttributeValue::Text(_) => DataType::Text,
            AttributeValue::Number(_) => DataType::Number,
            AttributeValue::Boolean(_) => DataType::Boolean,
            AttributeValue::Date(_) => DataType::Date,
            AttributeValue::Select(_) => DataType::Select,
            AttributeValue::MultiSelect(_) => DataType::MultiSelect,
            AttributeValue::Url(_) => DataType::Url,
            AttributeValue::Email(_) => DataType::Email,
        }
    }
}
