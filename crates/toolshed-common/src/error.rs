//! Error types shared across Toolshed crates

use thiserror::Error;

/// Result type alias for Toolshed operations
pub type Result<T> = std::result::Result<T, ToolshedError>;

/// Main error type for Toolshed
#[derive(Error, Debug)]
pub enum ToolshedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Invalid feed: {0}")]
    InvalidFeed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl ToolshedError {
    /// Whether retrying the same operation could plausibly succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Database(_) | Self::Io(_))
    }
}
