//! Passage-of-the-day API client
//!
//! Fetches the verse of the day from the labs.bible.org passage endpoint and
//! resolves it through the on-disk day cache: cached bytes are used when an
//! entry for the day exists, otherwise one network call is made and its body
//! is cached best-effort.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::cache::{CacheError, DateKey, DayCache};
use crate::data::{Passage, Verse};

/// Fixed URL of the passage-of-the-day endpoint
const VOTD_ENDPOINT: &str = "http://labs.bible.org/api/?passage=votd&type=json";

/// Bound on the total request time and on connection establishment
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur when resolving the day's passage
#[derive(Debug, Error)]
pub enum VotdError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// Failed to decode the response body
    #[error("failed to decode passage JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response decoded to zero verses
    #[error("passage contained no verses")]
    EmptyPassage,

    /// Cache directory or entry access failed
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Client for resolving the day's passage from cache or network
///
/// Holds the HTTP client with its fixed timeouts and an optional day cache.
/// Without a cache every resolution fetches from the network.
#[derive(Debug)]
pub struct VotdClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Day cache for raw response bytes, if caching is enabled
    cache: Option<DayCache>,
    /// Endpoint URL (allows override for testing)
    endpoint: String,
}

impl VotdClient {
    /// Creates a client for the fixed passage-of-the-day endpoint
    ///
    /// # Arguments
    /// * `cache` - Day cache to resolve through, or `None` to always fetch
    pub fn new(cache: Option<DayCache>) -> Result<Self, VotdError> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http_client,
            cache,
            endpoint: VOTD_ENDPOINT.to_string(),
        })
    }

    /// Creates a client with a custom endpoint URL (for testing)
    #[cfg(test)]
    pub fn with_endpoint(cache: Option<DayCache>, endpoint: String) -> Result<Self, VotdError> {
        let mut client = Self::new(cache)?;
        client.endpoint = endpoint;
        Ok(client)
    }

    /// Resolves the raw JSON bytes for the given day
    ///
    /// Checks the cache first when one is configured; on a miss, fetches from
    /// the endpoint and writes the body back to the cache best-effort. At
    /// most one network call is made, with no retries.
    ///
    /// # Arguments
    /// * `key` - The day to resolve, computed by the caller
    ///
    /// # Returns
    /// * `Ok(bytes)` - The raw response body, from cache or network
    /// * `Err(VotdError)` - If the cache entry is unreadable, the request
    ///   fails, or the endpoint answers with a non-success status
    pub async fn resolve(&self, key: &DateKey) -> Result<Vec<u8>, VotdError> {
        if let Some(ref cache) = self.cache {
            cache.ensure_dir()?;
            if let Some(bytes) = cache.read(key)? {
                return Ok(bytes);
            }
        }

        let bytes = self.fetch().await?;

        if let Some(ref cache) = self.cache {
            let _ = cache.write(key, &bytes);
        }

        Ok(bytes)
    }

    /// Resolves and decodes the given day's passage
    pub async fn fetch_passage(&self, key: &DateKey) -> Result<Passage, VotdError> {
        let bytes = self.resolve(key).await?;
        decode_passage(&bytes)
    }

    /// Performs the single HTTP GET against the endpoint
    async fn fetch(&self) -> Result<Vec<u8>, VotdError> {
        let response = self.http_client.get(&self.endpoint).send().await?;

        let status = response.status().as_u16();
        if !(200..400).contains(&status) {
            return Err(VotdError::UnexpectedStatus(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Decodes a raw response body into a passage
///
/// The body is a JSON array of verse objects. An empty array is rejected so
/// rendering never sees a passage without verses.
pub fn decode_passage(bytes: &[u8]) -> Result<Passage, VotdError> {
    let verses: Vec<Verse> = serde_json::from_slice(bytes)?;
    Passage::from_verses(verses).ok_or(VotdError::EmptyPassage)
}
