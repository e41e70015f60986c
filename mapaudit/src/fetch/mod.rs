//! Upstream dataset retrieval.
//!
//! This module provides the HTTP abstraction and URL construction for the
//! three JSON documents an audit run retrieves: the version index
//! (`dataPaths.json`) and the per-version `blocks.json` / `biomes.json`
//! datasets. The `HttpClient` trait allows dependency injection so tests
//! can supply fixed fixtures instead of performing real network calls.
//!
//! Retrieval is deliberately simple: one blocking GET per document, a
//! single attempt, no retry. Transport failures, non-2xx responses and
//! malformed JSON bodies all surface as [`FetchError`].

use serde_json::Value;
use thiserror::Error;

/// Base path of the upstream minecraft-data repository.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/PrismarineJS/minecraft-data/master/data";

/// Errors that can occur while retrieving a JSON document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection, timeout, body read).
    #[error("request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body was not valid JSON.
    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request and returns the response body.
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).get(url)
    }
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(30)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FetchError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| FetchError::Http(format!("Failed to read response: {}", e)))
    }
}

/// Retrieves and decodes JSON documents through an injected [`HttpClient`].
pub struct JsonFetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> JsonFetcher<C> {
    /// Creates a fetcher backed by the given HTTP client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetches a URL and decodes the body as JSON.
    ///
    /// Prints a progress line to stdout before issuing the request so the
    /// user can see which document is being retrieved.
    pub fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        println!("fetching {}", url);
        tracing::debug!(url = %url, "Fetching JSON document");

        let body = self.client.get(url)?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Json {
            url: url.to_string(),
            source: e,
        })
    }
}

/// Builds the URLs for the upstream dataset documents.
///
/// URLs are plain string concatenation of the base path, the sub-path
/// resolved from the version index, and a fixed filename. The base is
/// overridable for tests and mirrors.
pub struct UpstreamSource {
    base: String,
}

impl UpstreamSource {
    /// Creates a source pointing at the default upstream location.
    pub fn new() -> Self {
        Self::with_base(DEFAULT_BASE_URL)
    }

    /// Creates a source with a custom base path.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// URL of the version index document.
    pub fn index_url(&self) -> String {
        format!("{}/dataPaths.json", self.base)
    }

    /// URL of the blocks dataset under the given resolved sub-path.
    pub fn blocks_url(&self, sub_path: &str) -> String {
        format!("{}/{}/blocks.json", self.base, sub_path)
    }

    /// URL of the biomes dataset under the given resolved sub-path.
    pub fn biomes_url(&self, sub_path: &str) -> String {
        format!("{}/{}/biomes.json", self.base, sub_path)
    }
}

impl Default for UpstreamSource {
    fn default() -> Self {
        Self::new()
    }
}
