// Axum web server for the plant storefront
//
// Purpose: serve the HTMX storefront UI plus a JSON API over one shared
// catalog store. The store is lazy: nothing is fetched from the upstream
// catalog until the first category selection needs it.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use url::Url;

use crate::api_client::ApiClient;
use crate::catalog::CatalogStore;

pub mod handlers;
pub mod views;

use handlers::{cart, catalog, pages};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
}

impl AppState {
    pub fn new(upstream_base_url: &str, page_origin: &str) -> anyhow::Result<Self> {
        tracing::info!("Initializing upstream API client...");
        let client = ApiClient::new(upstream_base_url)?;

        let origin = Url::parse(page_origin)
            .map_err(|e| anyhow::anyhow!("invalid page origin '{}': {}", page_origin, e))?;

        tracing::info!("Initializing catalog store...");
        let store = Arc::new(CatalogStore::new(client, origin));

        Ok(Self { store })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Storefront pages (HTML + HTMX partials)
        .route("/", get(pages::storefront_page))
        .route("/storefront/category/:slug", get(catalog::select_category))
        .route("/storefront/plants/:id/modal", get(catalog::plant_modal))
        .route("/storefront/cart/items", post(cart::add_line))
        .route("/storefront/cart/remove/:id", post(cart::remove_line))
        .route("/storefront/contact", post(cart::contact))

        // Catalog endpoints (JSON API)
        .route("/api/categories", get(catalog::list_categories))
        .route("/api/plants", get(catalog::list_plants))
        .route("/api/plants/:id", get(catalog::get_plant))

        // Cart endpoints (JSON API)
        .route("/api/cart", get(cart::get_cart).delete(cart::clear_cart))
        .route("/api/cart/items", post(cart::add_item))
        .route("/api/cart/items/:id", delete(cart::remove_item))

        // Static assets
        .nest_service("/assets", ServeDir::new("assets"))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins (adjust for production)
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
