//! Green Earth plant storefront.
//!
//! In-memory storefront over a loosely-typed remote plant catalog:
//! - `raw` / `normalize`: tolerant decoding of upstream records with
//!   field-name fallbacks and type coercion
//! - `image_url`: sanitizer for the recurring upstream image URL defects
//! - `categories`: keyword-fragment category matcher behind a swappable
//!   trait
//! - `catalog`: process-wide store with a lazily filled plant cache,
//!   stale-fetch protection and a TTL detail cache
//! - `cart`: increment/decrement cart ledger with pinned line prices
//! - `api_client`: reqwest client that collapses every upstream failure
//!   into one sentinel
//! - `web` (feature `web`, on by default): Axum server with an HTMX
//!   storefront UI and a JSON API

pub mod api_client;
pub mod cart;
pub mod catalog;
pub mod categories;
pub mod image_url;
pub mod normalize;
pub mod plant;
pub mod raw;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use api_client::{ApiClient, FetchError, DEFAULT_BASE_URL};
pub use cart::{CartLedger, CartLine, CartSnapshot};
pub use catalog::{CatalogState, CatalogStore};
pub use categories::{CategoryId, Classifier, KeywordClassifier, CATEGORY_IDS};
pub use image_url::{safe_image_url, PLACEHOLDER_IMAGE};
pub use normalize::{normalize_category, normalize_plant};
pub use plant::{format_price, CategoryRecord, Plant};

#[cfg(feature = "web")]
pub use web::{create_router, AppState};
