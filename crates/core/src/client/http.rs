//! HTTP implementation of [`HeroSource`] backed by `reqwest`.
//!
//! Every call is a fresh round trip: no retries, no caching and no timeout
//! beyond the transport defaults.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::endpoint::{parse_base_url, Endpoint};
use super::{FetchError, HeroSource};
use crate::config::ApiConfig;
use crate::hero::HeroRecord;

/// Superhero API client.
#[derive(Debug, Clone)]
pub struct HttpHeroClient {
    client: Client,
    base_url: Url,
}

impl HttpHeroClient {
    /// Create a new client rooted at `config.base_url`.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// The normalised API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, FetchError> {
        let url = endpoint.url(&self.base_url)?;

        debug!("Hero API request: GET {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!("Hero API request to {} failed: {}", url, e);
            FetchError::NetworkError(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Hero API returned {} for {}", status, url);
            return Err(FetchError::ServerError(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read hero API response from {}: {}", url, e);
            FetchError::NetworkError(e.to_string())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode hero API response from {}: {}", url, e);
            FetchError::DecodingError(e.to_string())
        })
    }
}

#[async_trait]
impl HeroSource for HttpHeroClient {
    async fn fetch_all(&self) -> Result<Vec<HeroRecord>, FetchError> {
        let heroes: Vec<HeroRecord> = self.get_json(Endpoint::All).await?;
        debug!("Decoded {} heroes", heroes.len());
        Ok(heroes)
    }

    async fn fetch_by_id(&self, id: u32) -> Result<HeroRecord, FetchError> {
        self.get_json(Endpoint::ById(id)).await
    }
}
