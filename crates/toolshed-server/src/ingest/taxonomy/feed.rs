//! Taxonomy feed downloader (HTTP)

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use super::config::ImportConfig;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to fetch taxonomy feed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch taxonomy feed: HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Taxonomy feed is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// HTTP client for the external taxonomy feed
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new(config: &ImportConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(concat!("toolshed-taxonomy-importer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Download the feed as text. Any non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String, FeedError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        info!(url, bytes = bytes.len(), "Downloaded taxonomy feed");
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
