//! Shared utilities for feature modules
//!
//! - **validation**: Input validation utilities

pub mod validation;

pub use validation::{validate_limit, validate_url, LimitValidationError, UrlValidationError};
