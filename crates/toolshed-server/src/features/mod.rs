//! Feature slices of the classification API
//!
//! Each feature is a vertical slice with its own queries, commands and
//! routes:
//!
//! - **taxonomy**: navigation, search, stats and feed import
//! - **categorization**: category suggestions for a listing draft
//! - **attributes**: external attribute mapping and validation
//! - **field_suggestions**: prefill hints for the listing form
//! - **listing_categories**: marketplace category option list
//!
//! Queries and commands are plain structs with a `validate()` step and a
//! free `handle()` function taking the engine or store they need.

pub mod attributes;
pub mod categorization;
pub mod field_suggestions;
pub mod listing_categories;
pub mod shared;
pub mod taxonomy;

use axum::Router;
use std::sync::Arc;

use crate::attributes::AttributeMappingEngine;
use crate::catalog::CatalogStore;
use crate::categorization::CategorySuggestionEngine;
use crate::field_suggestions::FieldSuggestionAggregator;
use crate::ingest::taxonomy::{ImportConfig, TaxonomyImporter};
use crate::taxonomy::TaxonomyStore;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    pub taxonomy: Arc<dyn TaxonomyStore>,
    pub catalog: Arc<dyn CatalogStore>,
    pub importer: Arc<TaxonomyImporter>,
    pub suggestions: CategorySuggestionEngine,
    pub mapping: AttributeMappingEngine,
    pub field_suggestions: FieldSuggestionAggregator,
}

impl FeatureState {
    /// Wire the engines over the given stores
    pub fn new(
        taxonomy: Arc<dyn TaxonomyStore>,
        catalog: Arc<dyn CatalogStore>,
        import_config: ImportConfig,
    ) -> anyhow::Result<Self> {
        let importer = TaxonomyImporter::new(taxonomy.clone(), import_config)?;
        let mapping = AttributeMappingEngine::new(catalog.clone())?;

        Ok(Self {
            suggestions: CategorySuggestionEngine::new(taxonomy.clone()),
            field_suggestions: FieldSuggestionAggregator::new(catalog.clone(), mapping.clone()),
            importer: Arc::new(importer),
            mapping,
            taxonomy,
            catalog,
        })
    }
}

/// Creates the API router with every feature mounted under its own prefix
///
/// - `/taxonomy`
/// - `/categorization`
/// - `/attributes`
/// - `/field-suggestions`
/// - `/listing-categories`
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/taxonomy", taxonomy::taxonomy_routes().with_state(state.clone()))
        .nest(
            "/categorization",
            categorization::categorization_routes().with_state(state.clone()),
        )
        .nest("/attributes", attributes::attributes_routes().with_state(state.clone()))
        .nest(
            "/field-suggestions",
            field_suggestions::field_suggestions_routes().with_state(state.clone()),
        )
        .nest(
            "/listing-categories",
            listing_categories::listing_categories_routes().with_state(state),
        )
}
