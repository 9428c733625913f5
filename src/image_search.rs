//! Google Custom Search image client.
//!
//! Used by the part tools to find candidate product photos. The client is
//! optional: without both credentials the server runs with image search
//! disabled and the tool reports a configuration error instead of making
//! network calls. Requests carry a fixed 10-second timeout and are never
//! retried.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials for the Google Custom Search API.
#[derive(Debug, Clone)]
pub struct ImageSearchConfig {
    pub api_key: String,
    pub engine_id: String,
}

impl ImageSearchConfig {
    /// Create a config from explicit credentials.
    pub fn new(api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            engine_id: engine_id.into(),
        }
    }

    /// Read `GOOGLE_API_KEY` and `GOOGLE_CSE_ID` from the environment.
    ///
    /// Returns `None` unless both are present and non-empty.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY").ok().filter(|v| !v.is_empty())?;
        let engine_id = std::env::var("GOOGLE_CSE_ID").ok().filter(|v| !v.is_empty())?;
        Some(Self::new(api_key, engine_id))
    }
}

/// Image search failures.
#[derive(Debug, thiserror::Error)]
pub enum ImageSearchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// One image hit, projected to the fields tools expose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageResult {
    pub title: String,
    pub link: String,
    pub thumbnail_url: String,
    pub context_url: String,
    pub width: u64,
    pub height: u64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    image: ImageMeta,
}

#[derive(Debug, Default, Deserialize)]
struct ImageMeta {
    #[serde(default, rename = "thumbnailLink")]
    thumbnail_link: String,
    #[serde(default, rename = "contextLink")]
    context_link: String,
    #[serde(default)]
    width: u64,
    #[serde(default)]
    height: u64,
}

impl From<SearchItem> for ImageResult {
    fn from(item: SearchItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
            thumbnail_url: item.image.thumbnail_link,
            context_url: item.image.context_link,
            width: item.image.width,
            height: item.image.height,
        }
    }
}

/// HTTP client for image searches.
#[derive(Debug, Clone)]
pub struct ImageSearchClient {
    http: reqwest::Client,
    config: ImageSearchConfig,
    endpoint: String,
}

impl ImageSearchClient {
    /// Build a client with the fixed request timeout.
    pub fn new(config: ImageSearchConfig) -> Result<Self, ImageSearchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ImageSearchError::Client)?;
        Ok(Self {
            http,
            config,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different endpoint. Test seam.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Run an image search, returning up to `num` hits.
    ///
    /// Non-2xx responses and transport failures surface as errors; callers
    /// render them into their own error payloads.
    pub async fn search(&self, query: &str, num: u8) -> Result<Vec<ImageResult>, ImageSearchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.engine_id.as_str()),
                ("q", query),
                ("searchType", "image"),
            ])
            .query(&[("num", num)])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        Ok(body.items.into_iter().map(ImageResult::from).collect())
    }
}
