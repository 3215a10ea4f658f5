//! PostgreSQL-backed taxonomy store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::collections::BTreeMap;
use tracing::debug;

use super::models::{TaxonomyNode, TaxonomyRecord, TaxonomyStats};
use super::store::TaxonomyStore;
use crate::db::contains_pattern;
use crate::error::StoreResult;

const NODE_COLUMNS: &str = "external_id, path, parent_id, level, is_active, last_updated";

/// Taxonomy store over the `taxonomy_nodes` table
#[derive(Clone)]
pub struct PgTaxonomyStore {
    db: PgPool,
}

impl PgTaxonomyStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TaxonomyNodeRow {
    external_id: i64,
    path: String,
    parent_id: Option<i64>,
    level: i32,
    is_active: bool,
    last_updated: DateTime<Utc>,
}

impl From<TaxonomyNodeRow> for TaxonomyNode {
    fn from(row: TaxonomyNodeRow) -> Self {
        Self {
            external_id: row.external_id,
            path: row.path,
            parent_id: row.parent_id,
            level: row.level,
            active: row.is_active,
            last_updated: row.last_updated,
            children: None,
        }
    }
}

#[async_trait]
impl TaxonomyStore for PgTaxonomyStore {
    async fn delete_all(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM taxonomy_nodes")
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_batch(&self, records: &[TaxonomyRecord]) -> StoreResult<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "INSERT INTO taxonomy_nodes ({}) ",
            NODE_COLUMNS
        ));
        builder.push_values(records, |mut row, record| {
            row.push_bind(record.external_id)
                .push_bind(&record.path)
                .push_bind(record.parent_id)
                .push_bind(record.level)
                .push_bind(true)
                .push_bind(now);
        });

        let result = builder.build().execute(&self.db).await?;
        debug!(rows = result.rows_affected(), "Inserted taxonomy batch");
        Ok(result.rows_affected())
    }

    async fn get_node(&self, external_id: i64) -> StoreResult<Option<TaxonomyNode>> {
        let row: Option<TaxonomyNodeRow> = sqlx::query_as(&format!(
            "SELECT {} FROM taxonomy_nodes WHERE external_id = $1 AND is_active",
            NODE_COLUMNS
        ))
        .bind(external_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn get_children(&self, parent_id: Option<i64>) -> StoreResult<Vec<TaxonomyNode>> {
        let rows: Vec<TaxonomyNodeRow> = match parent_id {
            Some(parent_id) => {
                sqlx::query_as(&format!(
                    "SELECT {} FROM taxonomy_nodes WHERE parent_id = $1 AND is_active ORDER BY path",
                    NODE_COLUMNS
                ))
                .bind(parent_id)
                .fetch_all(&self.db)
                .await?
            },
            None => {
                sqlx::query_as(
                    r#"
                    SELECT n.external_id, n.path, n.parent_id, n.level, n.is_active, n.last_updated
                    FROM taxonomy_nodes n
                    WHERE n.is_active
                      AND (
                        n.parent_id IS NULL
                        OR NOT EXISTS (
                            SELECT 1 FROM taxonomy_nodes p
                            WHERE p.external_id = n.parent_id AND p.is_active
                        )
                      )
                    ORDER BY n.path
                    "#,
                )
                .fetch_all(&self.db)
                .await?
            },
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search_by_path(&self, term: &str, limit: i64) -> StoreResult<Vec<TaxonomyNode>> {
        let term = term.trim();
        let id_match: Option<i64> = term.parse().ok();

        let rows: Vec<TaxonomyNodeRow> = sqlx::query_as(&format!(
            r#"
            SELECT {}
            FROM taxonomy_nodes
            WHERE is_active
              AND (path ILIKE $1 OR ($2::BIGINT IS NOT NULL AND external_id = $2))
            ORDER BY path
            LIMIT $3
            "#,
            NODE_COLUMNS
        ))
        .bind(contains_pattern(term))
        .bind(id_match)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search_by_terms(&self, terms: &[String], limit: i64) -> StoreResult<Vec<TaxonomyNode>> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let patterns: Vec<String> = terms.iter().map(|t| contains_pattern(t)).collect();
        let rows: Vec<TaxonomyNodeRow> = sqlx::query_as(&format!(
            r#"
            SELECT {}
            FROM taxonomy_nodes
            WHERE is_active AND path ILIKE ANY($1)
            ORDER BY level DESC, path
            LIMIT $2
            "#,
            NODE_COLUMNS
        ))
        .bind(patterns)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn stats(&self) -> StoreResult<TaxonomyStats> {
        let totals = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE is_active) FROM taxonomy_nodes",
        )
        .fetch_one(&self.db);

        let levels = sqlx::query_as::<_, (i32, i64)>(
            "SELECT level, COUNT(*) FROM taxonomy_nodes WHERE is_active GROUP BY level ORDER BY level",
        )
        .fetch_all(&self.db);

        let ((total_categories, active_categories), levels) = tokio::try_join!(totals, levels)?;

        Ok(TaxonomyStats {
            total_categories,
            levels: levels.into_iter().collect::<BTreeMap<_, _>>(),
            active_categories,
        })
    }
}
