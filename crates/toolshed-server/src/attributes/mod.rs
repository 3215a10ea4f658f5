//! Attribute mapping and validation
//!
//! - **values**: typed attribute values, one variant per data type
//! - **validator**: accumulating, type-aware validation
//! - **transforms**: pure value transformations used by rules
//! - **rules**: core and category mapping rules
//! - **engine**: mapping, validation and mapping suggestion per category

pub mod engine;
pub mod rules;
pub mod transforms;
pub mod validator;
pub mod values;

pub use engine::{AttributeMappingEngine, CategoryRequirement};
pub use rules::{core_mapping_rules, AttributeMappingRule, Mapping, MappingType};
pub use transforms::{ItemCondition, Transformation};
pub use validator::{AttributeValidator, ValidationOutcome};
pub use values::AttributeValue;
