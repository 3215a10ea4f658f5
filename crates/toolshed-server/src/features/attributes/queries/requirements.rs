use crate::attributes::{AttributeMappingEngine, CategoryRequirement};
use crate::error::StoreError;

#[derive(Debug, Clone, Copy)]
pub struct CategoryRequirementsQuery {
    pub category_id: i64,
}

#[tracing::instrument(skip(engine))]
pub async fn handle(
    engine: &AttributeMappingEngine,
    query: CategoryRequirementsQuery,
) -> Result<CategoryRequirement, StoreError> {
    engine.category_requirements(query.category_id).await
}
