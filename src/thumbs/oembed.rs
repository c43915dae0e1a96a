use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_OEMBED_ENDPOINT: &str = "https://www.tiktok.com/oembed";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("lookup returned HTTP {0}")]
    Status(StatusCode),

    #[error("malformed oEmbed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response has no thumbnail_url")]
    MissingThumbnail,
}

/// Anything that can turn a public clip URL into a thumbnail URL.
pub trait ThumbnailLookup: Send + Sync {
    fn lookup<'a>(&'a self, public_url: &'a str) -> BoxFuture<'a, Result<String, LookupError>>;
}

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    thumbnail_url: Option<String>,
}

/// oEmbed metadata client (TikTok's endpoint by default)
#[derive(Debug, Clone)]
pub struct OEmbedClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl OEmbedClient {
    pub fn new(client: Client, endpoint: &str, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            timeout,
        }
    }

    pub async fn fetch_thumbnail(&self, public_url: &str) -> Result<String, LookupError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("url", public_url)])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        // Parse from bytes so a bad body is reported as malformed, not transport
        let body = resp.bytes().await?;
        let data: OEmbedResponse = serde_json::from_slice(&body)?;
        data.thumbnail_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(LookupError::MissingThumbnail)
    }
}

impl ThumbnailLookup for OEmbedClient {
    fn lookup<'a>(&'a self, public_url: &'a str) -> BoxFuture<'a, Result<String, LookupError>> {
        Box::pin(self.fetch_thumbnail(public_url))
    }
}
