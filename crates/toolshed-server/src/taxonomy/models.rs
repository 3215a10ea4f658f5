//! Taxonomy data models

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator between breadcrumb segments in a category path
pub const PATH_SEPARATOR: &str = " > ";

/// Last segment of a breadcrumb path ("A > B > Cordless Drills" -> "Cordless Drills")
pub fn leaf_segment(path: &str) -> &str {
    path.rsplit(PATH_SEPARATOR.trim())
        .next()
        .map(str::trim)
        .unwrap_or(path)
}

/// One parsed row of the taxonomy feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxonomyRecord {
    /// Stable identifier from the source feed
    pub external_id: i64,
    /// Breadcrumb path, e.g. "Power Tools > Drills & Drivers > Cordless Drills"
    pub path: String,
    /// Parent category, `None` for roots
    pub parent_id: Option<i64>,
    /// Depth in the hierarchy (0/1 = root depth)
    pub level: i32,
}

impl TaxonomyRecord {
    pub fn new(external_id: i64, path: impl Into<String>, parent_id: Option<i64>, level: i32) -> Self {
        Self {
            external_id,
            path: path.into(),
            parent_id,
            level,
        }
    }

    /// Display label (leaf segment of the path)
    pub fn label(&self) -> &str {
        leaf_segment(&self.path)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize TaxonomyRecord to JSON")
    }

    /// Feed-compatible TSV line (without header)
    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.external_id,
            self.path,
            self.parent_id.map(|id| id.to_string()).unwrap_or_default(),
            self.level
        )
    }

    pub fn tsv_header() -> &'static str {
        "external_id\tcategory_path\tparent_id\tlevel"
    }
}

/// A stored taxonomy category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxonomyNode {
    pub external_id: i64,
    pub path: String,
    pub parent_id: Option<i64>,
    pub level: i32,
    pub active: bool,
    pub last_updated: DateTime<Utc>,
    /// Populated only by tree queries; `None` means "not fetched"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TaxonomyNode>>,
}

impl TaxonomyNode {
    /// An active node created from a feed record
    pub fn from_record(record: &TaxonomyRecord, last_updated: DateTime<Utc>) -> Self {
        Self {
            external_id: record.external_id,
            path: record.path.clone(),
            parent_id: record.parent_id,
            level: record.level,
            active: true,
            last_updated,
            children: None,
        }
    }

    pub fn label(&self) -> &str {
        leaf_segment(&self.path)
    }

    /// Path segments from root to leaf
    pub fn segments(&self) -> Vec<&str> {
        self.path
            .split(PATH_SEPARATOR.trim())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Aggregate counts over the stored taxonomy
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxonomyStats {
    pub total_categories: i64,
    /// Active node count per level
    pub levels: BTreeMap<i32, i64>,
    pub active_categories: i64,
}
