//! Catalog store: the process-wide storefront state.
//!
//! One `CatalogStore` owns everything mutable in the system: the
//! normalized plant cache, the active category, and the cart. The full
//! plant list is fetched lazily on the first category selection and then
//! served from memory for the life of the process. Per-plant detail
//! lookups go through a small TTL cache so repeated modal opens do not
//! refetch.
//!
//! Stale fetch protection: every list fetch takes a monotonically
//! increasing token before it starts, and a completion may only install
//! its result if it still holds the latest token and the cache is still
//! empty. Anything else is discarded, so an old response can never
//! clobber a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::future::Cache;
use tokio::sync::RwLock;
use url::Url;

use crate::api_client::ApiClient;
use crate::cart::{CartLedger, CartSnapshot};
use crate::categories::{Classifier, KeywordClassifier};
use crate::normalize::normalize_plant;
use crate::plant::Plant;
use crate::raw;

/// Everything that changes at runtime, as one explicit context object.
#[derive(Debug)]
pub struct CatalogState {
    /// Normalized plant list; empty until the first successful fetch.
    pub all_plants: Vec<Plant>,
    /// Slug of the category the storefront is currently showing.
    pub active_category: String,
    /// The shopping cart.
    pub cart: CartLedger,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            all_plants: Vec::new(),
            active_category: "all".to_string(),
            cart: CartLedger::new(),
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared storefront engine. Cheap to share behind an `Arc`.
pub struct CatalogStore {
    state: RwLock<CatalogState>,
    client: ApiClient,
    classifier: Box<dyn Classifier>,
    detail_cache: Cache<String, Plant>,
    fetch_seq: AtomicU64,
    page_origin: Url,
}

impl CatalogStore {
    /// Store with the standard keyword classifier.
    pub fn new(client: ApiClient, page_origin: Url) -> Self {
        Self::with_classifier(client, page_origin, Box::new(KeywordClassifier::new()))
    }

    /// Store with a caller-supplied classifier.
    pub fn with_classifier(
        client: ApiClient,
        page_origin: Url,
        classifier: Box<dyn Classifier>,
    ) -> Self {
        let detail_cache = Cache::builder()
            .max_capacity(1_000) // plenty for one catalog
            .time_to_live(Duration::from_secs(300)) // 5 minute TTL
            .build();

        Self {
            state: RwLock::new(CatalogState::new()),
            client,
            classifier,
            detail_cache,
            fetch_seq: AtomicU64::new(0),
            page_origin,
        }
    }

    /// Fill the plant cache if it is empty; no-op otherwise. Returns the
    /// cached plant count.
    ///
    /// A failed fetch leaves the cache empty, so the next selection
    /// retries. No lock is held across the network await.
    pub async fn ensure_loaded(&self) -> usize {
        {
            let state = self.state.read().await;
            if !state.all_plants.is_empty() {
                return state.all_plants.len();
            }
        }

        let token = self.issue_fetch_token();
        let plants = self.fetch_catalog().await;
        self.commit_catalog(token, plants).await
    }

    /// Record the active category and return the plants that belong to
    /// it, loading the catalog first if needed. An unknown slug is
    /// recorded as-is and yields an empty list.
    pub async fn select_category(&self, slug: &str) -> Vec<Plant> {
        self.ensure_loaded().await;

        let mut state = self.state.write().await;
        state.active_category = slug.to_string();
        self.classifier.filter(&state.all_plants, slug)
    }

    /// Slug of the category currently shown.
    pub async fn active_category(&self) -> String {
        self.state.read().await.active_category.clone()
    }

    /// One plant by id, through the detail cache. `None` covers both
    /// "upstream failed" and "no such plant"; the two are deliberately
    /// not distinguished.
    pub async fn plant_detail(&self, id: &str) -> Option<Plant> {
        let key = id.to_string();
        if let Some(hit) = self.detail_cache.get(&key).await {
            tracing::debug!("Detail cache hit for plant {}", id);
            return Some(hit);
        }

        let payload = self.client.fetch_plant(id).await.ok()?;
        let record = raw::plant_record(&payload)?;
        let plant = normalize_plant(&record, &self.page_origin);

        self.detail_cache.insert(key, plant.clone()).await;
        Some(plant)
    }

    // ---- Cart passthrough ----

    pub async fn add_to_cart(&self, id: &str, name: &str, price: f64) {
        let mut state = self.state.write().await;
        state.cart.add(id, name, price);
    }

    pub async fn remove_from_cart(&self, id: &str) {
        let mut state = self.state.write().await;
        state.cart.remove(id);
    }

    pub async fn clear_cart(&self) {
        let mut state = self.state.write().await;
        state.cart.clear();
    }

    pub async fn cart_snapshot(&self) -> CartSnapshot {
        self.state.read().await.cart.snapshot()
    }

    // ---- Fetch internals ----

    /// Stamp a new list fetch. Only the holder of the latest token may
    /// commit.
    fn issue_fetch_token(&self) -> u64 {
        self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Fetch and normalize the full plant list. Sentinel failures
    /// degrade to an empty list here.
    async fn fetch_catalog(&self) -> Vec<Plant> {
        let payload = match self.client.fetch_all_plants().await {
            Ok(payload) => payload,
            Err(_) => return Vec::new(),
        };

        raw::plant_list(&payload)
            .iter()
            .map(|record| normalize_plant(record, &self.page_origin))
            .collect()
    }

    /// Install a fetched list, unless it is stale or the cache was
    /// filled in the meantime. Returns the cached plant count.
    async fn commit_catalog(&self, token: u64, plants: Vec<Plant>) -> usize {
        let mut state = self.state.write().await;

        if !state.all_plants.is_empty() {
            tracing::debug!("Discarding fetch result: catalog already populated");
            return state.all_plants.len();
        }

        let latest = self.fetch_seq.load(Ordering::SeqCst);
        if token != latest {
            tracing::debug!(
                "Discarding stale fetch result (token {} < latest {})",
                token,
                latest
            );
            return state.all_plants.len();
        }

        tracing::info!("Catalog cache filled with {} plants", plants.len());
        state.all_plants = plants;
        state.all_plants.len()
    }
}
