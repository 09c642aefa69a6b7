// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use chrono::Datelike;

use crate::plant::format_price;
use crate::web::views::{
    card_views, cart_line_views, category_views, CardView, CartLineView, CategoryView,
};
use crate::web::AppState;

// ============================================================================
// Storefront Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/storefront.html")]
pub struct StorefrontTemplate {
    pub title: String,
    pub year: i32,
    pub categories: Vec<CategoryView>,
    pub plants: Vec<CardView>,
    pub has_plants: bool,
    pub cart_lines: Vec<CartLineView>,
    pub cart_empty: bool,
    pub cart_total: String,
}

pub async fn storefront_page(State(state): State<AppState>) -> Html<String> {
    let active = state.store.active_category().await;
    render_storefront(&state, &active).await
}

/// Full page for a given category slug. Also the non-HTMX fallback for
/// direct navigation to a category URL.
pub(crate) async fn render_storefront(state: &AppState, slug: &str) -> Html<String> {
    let plants = state.store.select_category(slug).await;
    let snapshot = state.store.cart_snapshot().await;

    let template = StorefrontTemplate {
        title: "Green Earth | Plant a Tree, Grow a Future".to_string(),
        year: chrono::Utc::now().year(),
        categories: category_views(slug),
        has_plants: !plants.is_empty(),
        plants: card_views(&plants),
        cart_empty: snapshot.lines.is_empty(),
        cart_lines: cart_line_views(&snapshot),
        cart_total: format_price(snapshot.total),
    };

    Html(template.render().unwrap_or_else(|e| format!("Template error: {}", e)))
}
