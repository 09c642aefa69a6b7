// Storefront Server Binary Entry Point
//
// Purpose: start the Axum server for the Green Earth plant storefront
// Usage: cargo run --bin storefront_server

use plant_storefront::{AppState, DEFAULT_BASE_URL, create_router};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "plant_storefront=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting storefront server...");

    // Configuration from environment variables
    let upstream_base_url = std::env::var("UPSTREAM_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let page_origin = std::env::var("PAGE_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  UPSTREAM_BASE_URL: {}", upstream_base_url);
    tracing::info!("  PAGE_ORIGIN: {}", page_origin);
    tracing::info!("  PORT: {}", port);

    // Initialize application state (catalog itself loads lazily)
    tracing::info!("Initializing application state...");
    let state = AppState::new(&upstream_base_url, &page_origin)?;
    tracing::info!("Application state initialized successfully");

    // Create router with all endpoints and middleware
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
