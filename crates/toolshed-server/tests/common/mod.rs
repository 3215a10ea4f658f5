//! Shared fixtures for toolshed-server integration tests

#![allow(dead_code)]

use std::sync::Arc;

use toolshed_server::catalog::{
    CategoryAttribute, DataType, InMemoryCatalogStore, ListingCategory, ListingSnapshot,
};
use toolshed_server::ingest::taxonomy::{ImportConfig, TaxonomyFeedParser};
use toolshed_server::taxonomy::{InMemoryTaxonomyStore, TaxonomyRecord};

/// Category id used for the drill catalog fixtures
pub const DRILLS: i64 = 10;

/// A small tool taxonomy in feed format
pub const SAMPLE_FEED: &str = "external_id\tcategory_path\tparent_id\tlevel
1\tPower Tools\t\t1
2\tPower Tools > Drills & Drivers\t1\t2
3\tPower Tools > Drills & Drivers > Cordless Drills\t2\t3
4\tPower Tools > Saws\t1\t2
5\tGarden\t\t1
6\tGarden > Lawn Mowers\t5\t2
";

pub fn sample_records() -> Vec<TaxonomyRecord> {
    TaxonomyFeedParser::new().parse(SAMPLE_FEED)
}

pub fn seeded_taxonomy() -> Arc<InMemoryTaxonomyStore> {
    Arc::new(InMemoryTaxonomyStore::with_records(&sample_records()))
}

pub fn drill_attributes() -> Vec<CategoryAttribute> {
    vec![
        CategoryAttribute::new(DRILLS, "voltage", DataType::Number)
            .required()
            .with_external_key("volts"),
        CategoryAttribute::new(DRILLS, "brand", DataType::Text).with_external_key("manufacturer"),
        CategoryAttribute::new(DRILLS, "cordless", DataType::Boolean).with_external_key("battery"),
    ]
}

pub fn listing(id: i64, name: &str, condition: &str, location: &str) -> ListingSnapshot {
    ListingSnapshot {
        id,
        name: name.to_string(),
        description: None,
        condition: Some(condition.to_string()),
        location: Some(location.to_string()),
    }
}

pub fn listing_categories() -> Vec<ListingCategory> {
    vec![
        ListingCategory {
            id: 1,
            name: "Tools".to_string(),
            parent_id: None,
        },
        ListingCategory {
            id: DRILLS,
            name: "Drills".to_string(),
            parent_id: Some(1),
        },
        ListingCategory {
            id: 20,
            name: "Garden".to_string(),
            parent_id: None,
        },
    ]
}

pub fn seeded_catalog() -> InMemoryCatalogStore {
    InMemoryCatalogStore::new()
        .with_attributes(drill_attributes())
        .with_categories(listing_categories())
        .with_listing(DRILLS, listing(100, "Cordless drill 18V", "good", "Portland"))
        .with_listing(DRILLS, listing(101, "Hammer drill", "fair", "Portland"))
        .with_listing(DRILLS, listing(102, "Cordless drill kit", "good", "Seattle"))
}

pub fn import_config() -> ImportConfig {
    ImportConfig::new().with_batch_size(2)
}
