// Catalog handlers: category browsing and plant details
//
// HTML endpoints serve HTMX partials for in-page swaps; the JSON
// endpoints expose the same operations for API consumers. Both run
// through the shared catalog store, so a category selected over JSON is
// reflected in the next page render too.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Json, Response};
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::categories::{CategoryId, CATEGORY_IDS};
use crate::web::handlers::pages::render_storefront;
use crate::web::views::{card_views, category_views, modal_view, CardView, CategoryView, ModalView};
use crate::web::{ApiError, AppState};

// ============================================================================
// HTML Partials
// ============================================================================

#[derive(Template)]
#[template(path = "partials/catalog.html")]
pub struct CatalogTemplate {
    pub categories: Vec<CategoryView>,
    pub plants: Vec<CardView>,
    pub has_plants: bool,
}

#[derive(Template)]
#[template(path = "partials/plant_modal.html")]
pub struct PlantModalTemplate {
    pub plant: Option<ModalView>,
}

/// Category click. HTMX requests get the catalog partial; anything else
/// (bookmark, hard refresh) gets the whole page with the category active.
pub async fn select_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    HxRequest(hx_request): HxRequest,
) -> Response {
    if !hx_request {
        return render_storefront(&state, &slug).await.into_response();
    }

    let plants = state.store.select_category(&slug).await;
    let template = CatalogTemplate {
        categories: category_views(&slug),
        has_plants: !plants.is_empty(),
        plants: card_views(&plants),
    };

    Html(template.render().unwrap_or_else(|e| format!("Template error: {}", e))).into_response()
}

/// Detail modal body. A failed or missing detail renders the failure
/// state inside the modal instead of erroring the page.
pub async fn plant_modal(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    let plant = state.store.plant_detail(&id).await;
    let template = PlantModalTemplate {
        plant: plant.as_ref().map(modal_view),
    };

    Html(template.render().unwrap_or_else(|e| format!("Template error: {}", e)))
}

// ============================================================================
// JSON API
// ============================================================================

pub async fn list_categories() -> impl IntoResponse {
    let data: Vec<serde_json::Value> = CATEGORY_IDS
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id.as_str(),
                "label": id.label(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "rows": data.len(),
        "data": data
    }))
}

#[derive(Debug, Deserialize)]
pub struct PlantListQuery {
    pub category: Option<String>,
}

pub async fn list_plants(
    State(state): State<AppState>,
    Query(query): Query<PlantListQuery>,
) -> impl IntoResponse {
    let slug = query
        .category
        .unwrap_or_else(|| CategoryId::All.as_str().to_string());

    let start = std::time::Instant::now();
    let plants = state.store.select_category(&slug).await;
    tracing::debug!(
        "Category '{}' matched {} plants in {:?}",
        slug,
        plants.len(),
        start.elapsed()
    );

    Json(serde_json::json!({
        "rows": plants.len(),
        "data": plants
    }))
}

pub async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.store.plant_detail(&id).await {
        Some(plant) => Ok(Json(serde_json::json!({ "data": plant }))),
        None => Err(ApiError::NotFound(format!("Plant {} not found", id))),
    }
}
