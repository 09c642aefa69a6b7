//! Upstream catalog API client.
//!
//! Thin reqwest wrapper around the four catalog endpoints. Every failure
//! mode (connect error, non-2xx status, bad JSON body) collapses into
//! the single `FetchError` sentinel; the reason is logged once here and
//! callers only ever branch on "it failed". That keeps the degrade
//! behavior uniform: an unreachable upstream and an empty catalog look
//! the same one layer up.

use serde_json::Value;
use thiserror::Error;

/// Default upstream base URL when no configuration is supplied.
pub const DEFAULT_BASE_URL: &str = "https://openapi.programming-hero.com/api";

/// The one error callers see. Carries the failing URL and a reason for
/// the log line, but callers are expected not to branch on either.
#[derive(Debug, Clone, Error)]
#[error("upstream fetch failed for {url}: {reason}")]
pub struct FetchError {
    pub url: String,
    pub reason: String,
}

/// HTTP client bound to one upstream base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given base URL (no trailing slash).
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("plant_storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint: full plant list.
    pub fn plants_url(&self) -> String {
        format!("{}/plants", self.base_url)
    }

    /// Endpoint: one plant by id.
    pub fn plant_url(&self, id: &str) -> String {
        format!("{}/plant/{}", self.base_url, urlencoding::encode(id))
    }

    /// Endpoint: category list.
    pub fn categories_url(&self) -> String {
        format!("{}/categories", self.base_url)
    }

    /// Endpoint: plants for one upstream category id.
    pub fn category_url(&self, id: &str) -> String {
        format!("{}/category/{}", self.base_url, urlencoding::encode(id))
    }

    /// GET a URL and decode the JSON body. All failures collapse into
    /// the sentinel after a single warn log.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| fail(url, &format!("request error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(url, &format!("status {}", status)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| fail(url, &format!("invalid JSON body: {}", e)))
    }

    pub async fn fetch_all_plants(&self) -> Result<Value, FetchError> {
        self.fetch_json(&self.plants_url()).await
    }

    pub async fn fetch_plant(&self, id: &str) -> Result<Value, FetchError> {
        self.fetch_json(&self.plant_url(id)).await
    }

    pub async fn fetch_categories(&self) -> Result<Value, FetchError> {
        self.fetch_json(&self.categories_url()).await
    }

    pub async fn fetch_category_plants(&self, id: &str) -> Result<Value, FetchError> {
        self.fetch_json(&self.category_url(id)).await
    }
}

fn fail(url: &str, reason: &str) -> FetchError {
    tracing::warn!("Fetch error for {}: {}", url, reason);
    FetchError {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}
