use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::Track;
use tracing::debug;
use url::Url;

use crate::{
    config::CONFIG,
    error::{Result, StoreError},
    traits::{Endpoint, TrackSource},
};

/// HTTP client for the music proxy's `/api/top` and `/api/search` routes.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: Url,
    client: Client,
}

#[derive(Default)]
pub struct ProxyClientBuilder {
    base_url: Option<String>,
}

impl ProxyClientBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> Result<ProxyClient> {
        let base_url_str = self.base_url.ok_or(StoreError::NotConfigured)?;
        // Keep a single trailing slash so joins append instead of replacing
        // the last path segment.
        let base_url = Url::parse(&format!("{}/", base_url_str.trim_end_matches('/')))?;

        Ok(ProxyClient {
            base_url,
            client: Client::new(),
        })
    }
}

impl ProxyClient {
    /// Client for the configured proxy origin.
    pub fn from_config() -> Result<Self> {
        ProxyClientBuilder::new().base_url(CONFIG.proxy_url()).build()
    }

    /// Full request URL for `endpoint`. The search query travels as a single
    /// percent-encoded `q` parameter, spaces as `%20`.
    pub fn endpoint(&self, endpoint: &Endpoint) -> Result<Url> {
        match endpoint {
            Endpoint::Top => Ok(self.base_url.join("api/top")?),
            Endpoint::Search { query } => {
                let mut url = self.base_url.join("api/search")?;
                url.set_query(Some(&format!("q={}", urlencoding::encode(query))));
                Ok(url)
            }
        }
    }

    pub async fn top_tracks(&self) -> Result<Vec<Track>> {
        self.fetch(&Endpoint::Top).await
    }

    pub async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        self.fetch(&Endpoint::Search {
            query: query.to_string(),
        })
        .await
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let url = self.endpoint(endpoint)?;
        debug!("Request: GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            decode_body(&text)
        } else {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            Err(StoreError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| StoreError::Decode(format!("JSON parse error: {e}")))
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TrackSource for ProxyClient {
    async fn top_tracks(&self) -> Result<Vec<Track>> {
        ProxyClient::top_tracks(self).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>> {
        self.search_tracks(query).await
    }
}
