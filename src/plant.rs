//! Canonical catalog records.
//!
//! Every plant that enters the store passes through the normalizer first,
//! so the rest of the crate only ever sees these shapes. Upstream field
//! aliases and type drift are resolved before construction.

use serde::Serialize;

/// A normalized catalog plant.
///
/// Invariants (upheld by `normalize::normalize_plant`):
/// - `id` is a non-empty string
/// - `image` is a usable URL (sanitized or the placeholder)
/// - `price` is finite and >= 0
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub price: f64,
    pub short_description: String,
    pub description: String,
}

/// A normalized category record from the upstream categories endpoint.
///
/// `id` stays optional: some upstream payloads carry no usable identifier
/// and the label alone is still worth rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRecord {
    pub id: Option<String>,
    pub label: String,
}

/// Format a price for display: dollar sign, two decimals.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}
