pub mod breadcrumbs;
pub mod children;
pub mod options;
pub mod search;
pub mod stats;
pub mod tree;

use crate::error::{AppError, StoreError};
use crate::features::shared::LimitValidationError;

pub use breadcrumbs::GetBreadcrumbsQuery;
pub use children::GetChildrenQuery;
pub use options::TaxonomyOptionsQuery;
pub use search::SearchTaxonomyQuery;
pub use stats::GetStatsQuery;
pub use tree::GetTreeQuery;

/// Failure of a taxonomy read
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyQueryError {
    #[error("Search term is required")]
    QueryRequired,
    #[error(transparent)]
    InvalidLimit(#[from] LimitValidationError),
    #[error("max_depth must be between 0 and {max}")]
    InvalidDepth { max: u32 },
    #[error("Taxonomy node {0} not found")]
    NotFound(i64),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<TaxonomyQueryError> for AppError {
    fn from(err: TaxonomyQueryError) -> Self {
        match err {
            TaxonomyQueryError::NotFound(id) => AppError::not_found("Taxonomy node", id),
            TaxonomyQueryError::Store(e) => AppError::Store(e),
            other => AppError::validation(other.to_string()),
        }
    }
}
