use serde::{Deserialize, Serialize};

use super::TaxonomyQueryError;
use crate::features::shared::validate_limit;
use crate::taxonomy::{TaxonomyNode, TaxonomyStore};

pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
pub const MAX_SEARCH_LIMIT: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTaxonomyQuery {
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl SearchTaxonomyQuery {
    /// Checks the request and returns the effective limit
    pub fn validate(&self) -> Result<i64, TaxonomyQueryError> {
        if self.q.trim().is_empty() {
            return Err(TaxonomyQueryError::QueryRequired);
        }
        Ok(validate_limit(
            self.limit,
            DEFAULT_SEARCH_LIMIT,
            1,
            MAX_SEARCH_LIMIT,
            "limit",
        )?)
    }
}

#[tracing::instrument(skip(store), fields(q = %query.q))]
pub async fn handle(
    store: &dyn TaxonomyStore,
    query: SearchTaxonomyQuery,
) -> Result<Vec<TaxonomyNode>, TaxonomyQueryError> {
    let limit = query.validate()?;
    Ok(store.search_by_path(query.q.trim(), limit).await?)
}
