// Cart and contact handlers
//
// Cart actions never touch the network: they go straight to the ledger
// inside the catalog store and re-render the cart panel (HTML) or
// return the full cart (JSON).

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Json};
use axum::Form;
use serde::Deserialize;

use crate::cart::CartSnapshot;
use crate::plant::format_price;
use crate::web::views::{cart_line_views, CartLineView};
use crate::web::AppState;

// ============================================================================
// HTML Partials
// ============================================================================

#[derive(Template)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate {
    pub cart_lines: Vec<CartLineView>,
    pub cart_empty: bool,
    pub cart_total: String,
}

#[derive(Template)]
#[template(path = "partials/contact_ack.html")]
pub struct ContactAckTemplate {
    pub name: String,
    pub email: String,
    pub count: String,
}

#[derive(Debug, Deserialize)]
pub struct AddLineForm {
    pub id: String,
    pub name: String,
    pub price: f64,
}

pub async fn add_line(
    State(state): State<AppState>,
    Form(form): Form<AddLineForm>,
) -> Html<String> {
    state
        .store
        .add_to_cart(&form.id, &form.name, form.price)
        .await;
    render_cart_panel(&state).await
}

pub async fn remove_line(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    state.store.remove_from_cart(&id).await;
    render_cart_panel(&state).await
}

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub count: String,
}

/// Contact form acknowledgment. Nothing is stored; the submission is
/// echoed back as a confirmation banner.
pub async fn contact(Form(form): Form<ContactForm>) -> Html<String> {
    let template = ContactAckTemplate {
        name: form.name,
        email: form.email,
        count: form.count,
    };

    Html(template.render().unwrap_or_else(|e| format!("Template error: {}", e)))
}

async fn render_cart_panel(state: &AppState) -> Html<String> {
    let snapshot = state.store.cart_snapshot().await;
    let template = CartPanelTemplate {
        cart_empty: snapshot.lines.is_empty(),
        cart_lines: cart_line_views(&snapshot),
        cart_total: format_price(snapshot.total),
    };

    Html(template.render().unwrap_or_else(|e| format!("Template error: {}", e)))
}

// ============================================================================
// JSON API
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub id: String,
    pub name: String,
    pub price: f64,
}

pub async fn get_cart(State(state): State<AppState>) -> impl IntoResponse {
    cart_json(&state.store.cart_snapshot().await)
}

pub async fn add_item(
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> impl IntoResponse {
    state
        .store
        .add_to_cart(&request.id, &request.name, request.price)
        .await;
    cart_json(&state.store.cart_snapshot().await)
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state.store.remove_from_cart(&id).await;
    cart_json(&state.store.cart_snapshot().await)
}

pub async fn clear_cart(State(state): State<AppState>) -> impl IntoResponse {
    state.store.clear_cart().await;
    cart_json(&state.store.cart_snapshot().await)
}

fn cart_json(snapshot: &CartSnapshot) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "items": snapshot.lines,
        "total": snapshot.total,
        "total_formatted": format_price(snapshot.total),
        "last_added_id": snapshot.last_added_id,
    }))
}
