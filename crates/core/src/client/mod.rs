//! Fetch client for the superhero API.
//!
//! `HeroSource` is the seam the query states depend on. `HttpHeroClient` is
//! the production implementation; tests use `testing::MockHeroSource`.

mod endpoint;
mod http;

pub use endpoint::{Endpoint, DEFAULT_BASE_URL};
pub use http::HttpHeroClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::hero::HeroRecord;

/// Errors that can occur when fetching hero records.
///
/// The `Display` text is the message shown to the user in the errored state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Upstream answered with a status outside 200-299.
    #[error("Server error: {0}")]
    ServerError(u16),

    /// The body did not match the expected JSON schema.
    #[error("Failed to decode data: {0}")]
    DecodingError(String),

    /// Transport-level failure (DNS, connect, reset, body read).
    #[error("Network error: {0}")]
    NetworkError(String),
}

impl FetchError {
    /// Whether re-issuing the same request can succeed without a code or
    /// schema change.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::NetworkError(_) => true,
            FetchError::ServerError(status) => *status >= 500,
            FetchError::InvalidUrl(_) | FetchError::DecodingError(_) => false,
        }
    }
}

/// Source of hero records.
#[async_trait]
pub trait HeroSource: Send + Sync {
    /// Fetch every hero, in API order.
    async fn fetch_all(&self) -> Result<Vec<HeroRecord>, FetchError>;

    /// Fetch a single hero by its id.
    async fn fetch_by_id(&self, id: u32) -> Result<HeroRecord, FetchError>;
}
