pub mod auto_categorize;
pub mod suggest;

use crate::error::AppError;

pub use auto_categorize::AutoCategorizeQuery;
pub use suggest::SuggestCategoriesQuery;

/// Maximum accepted length of the item name
pub const MAX_NAME_LENGTH: usize = 500;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CategorizationError {
    #[error("Name must be at most {max} characters")]
    NameTooLong { max: usize },
}

impl From<CategorizationError> for AppError {
    fn from(err: CategorizationError) -> Self {
        AppError::validation(err.to_string())
    }
}

fn validate_name(name: &str) -> Result<(), CategorizationError> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CategorizationError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}
