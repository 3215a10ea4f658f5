//! PostgreSQL-backed catalog reads

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::warn;

use super::models::{CategoryAttribute, DataType, ListingCategory, ListingSnapshot, ValidationRules};
use super::store::CatalogStore;
use crate::db::contains_pattern;
use crate::error::{StoreError, StoreResult};

#[derive(Clone)]
pub struct PgCatalogStore {
    db: PgPool,
}

impl PgCatalogStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CategoryAttributeRow {
    category_id: i64,
    name: String,
    label: String,
    data_type: String,
    is_required: bool,
    default_value: Option<serde_json::Value>,
    external_key: Option<String>,
    validation: Option<Json<ValidationRules>>,
}

impl TryFrom<CategoryAttributeRow> for CategoryAttribute {
    type Error = StoreError;

    fn try_from(row: CategoryAttributeRow) -> Result<Self, Self::Error> {
        let data_type: DataType = row.data_type.parse().map_err(StoreError::InvalidData)?;
        Ok(Self {
            category_id: row.category_id,
            name: row.name,
            label: row.label,
            data_type,
            is_required: row.is_required,
            default_value: row.default_value,
            external_key: row.external_key,
            validation: row.validation.map(|Json(v)| v).unwrap_or_default(),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    id: i64,
    name: String,
    description: Option<String>,
    condition: Option<String>,
    location: Option<String>,
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn category_attributes(&self, category_id: i64) -> StoreResult<Vec<CategoryAttribute>> {
        let rows: Vec<CategoryAttributeRow> = sqlx::query_as(
            r#"
            SELECT category_id, name, label, data_type, is_required,
                   default_value, external_key, validation
            FROM category_attributes
            WHERE category_id = $1
            ORDER BY name
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.db)
        .await?;

        let mut attributes = Vec::with_capacity(rows.len());
        for row in rows {
            let name = row.name.clone();
            match CategoryAttribute::try_from(row) {
                Ok(attribute) => attributes.push(attribute),
                Err(e) => warn!(category_id, attribute = %name, error = %e, "Skipping attribute"),
            }
        }
        Ok(attributes)
    }

    async fn find_similar_listings(
        &self,
        category_id: i64,
        name: &str,
        limit: i64,
    ) -> StoreResult<Vec<ListingSnapshot>> {
        let rows: Vec<ListingRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, condition, location
            FROM listings
            WHERE is_active AND is_public
              AND category_id = $1
              AND (name ILIKE $2 OR description ILIKE $2)
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(category_id)
        .bind(contains_pattern(name.trim()))
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ListingSnapshot {
                id: r.id,
                name: r.name,
                description: r.description,
                condition: r.condition,
                location: r.location,
            })
            .collect())
    }

    async fn listing_categories(&self) -> StoreResult<Vec<ListingCategory>> {
        let rows: Vec<(i64, String, Option<i64>)> =
            sqlx::query_as("SELECT id, name, parent_id FROM listing_categories ORDER BY name")
                .fetch_all(&self.db)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, parent_id)| ListingCategory { id, name, parent_id })
            .collect())
    }
}
