//! Field normalization for upstream records.
//!
//! Resolution walks each alias chain left to right and takes the first
//! slot that is present and non-null, then coerces the value once.
//! Coercion is tolerant: numbers and bools stringify, numeric strings
//! parse as prices, and anything structurally wrong (arrays, objects)
//! degrades to the field default instead of erroring.

use std::hash::Hasher;

use rustc_hash::FxHasher;
use serde_json::Value;
use url::Url;

use crate::image_url::{safe_image_url, PLACEHOLDER_IMAGE};
use crate::plant::{CategoryRecord, Plant};
use crate::raw::{RawCategory, RawPlant};

/// Default display name when every name alias is missing.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Default category label when every category alias is missing.
pub const UNKNOWN_CATEGORY: &str = "N/A";

/// Build a canonical `Plant` from a raw upstream record.
///
/// Alias resolution order:
/// - id: `id` -> `plantId` -> `_id` -> deterministic local hash
/// - image: `image` -> `img` -> `photo` -> `thumbnail` -> placeholder
/// - name: `name` -> `plant_name` -> "Unknown"
/// - category: `category` -> `type` -> "N/A"
/// - price: `price` -> `cost` -> 0, coerced to a finite non-negative f64
/// - short description: `short_description` -> `shortDescription` ->
///   `summary`, falling back to the long description when empty
/// - description: `description` -> `details` -> `detail` -> ""
///
/// This function is total: it cannot fail, whatever the record holds.
pub fn normalize_plant(raw: &RawPlant, page_origin: &Url) -> Plant {
    let id = first_present(&[&raw.id, &raw.plant_id, &raw.object_id])
        .and_then(as_text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback_id(raw));

    // Non-string image values are as good as missing.
    let image = match first_present(&[&raw.image, &raw.img, &raw.photo, &raw.thumbnail]) {
        Some(Value::String(s)) => safe_image_url(s, page_origin),
        _ => PLACEHOLDER_IMAGE.to_string(),
    };

    let name = first_present(&[&raw.name, &raw.plant_name])
        .and_then(as_text)
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let category = first_present(&[&raw.category, &raw.type_label])
        .and_then(as_text)
        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());

    let price = first_present(&[&raw.price, &raw.cost])
        .map(as_price)
        .unwrap_or(0.0);

    let description = first_present(&[&raw.description, &raw.details, &raw.detail])
        .and_then(as_text)
        .unwrap_or_default();

    let short_description = first_present(&[
        &raw.short_description,
        &raw.short_description_alt,
        &raw.summary,
    ])
    .and_then(as_text)
    .filter(|s| !s.is_empty())
    .unwrap_or_else(|| description.clone());

    Plant {
        id,
        name,
        image,
        category,
        price,
        short_description,
        description,
    }
}

/// Build a canonical `CategoryRecord` from a raw upstream record.
///
/// - id: `id` -> `category_id` -> `category` -> `slug` -> None
/// - label: `category` -> `name` -> stringified id -> ""
pub fn normalize_category(raw: &RawCategory) -> CategoryRecord {
    let id =
        first_present(&[&raw.id, &raw.category_id, &raw.category, &raw.slug]).and_then(as_text);

    let label = first_present(&[&raw.category, &raw.name])
        .and_then(as_text)
        .unwrap_or_else(|| id.clone().unwrap_or_default());

    CategoryRecord { id, label }
}

/// First candidate slot that is present and not JSON null.
fn first_present<'a>(candidates: &[&'a Option<Value>]) -> Option<&'a Value> {
    candidates
        .iter()
        .find_map(|slot| slot.as_ref().filter(|v| !v.is_null()))
}

/// Coerce a scalar value to display text. Arrays and objects yield
/// `None` so the caller's default applies.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerce a value to a price. Numeric strings parse, the empty string
/// counts as zero, and anything non-finite or negative clamps to zero.
fn as_price(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };

    if n.is_finite() && n > 0.0 {
        n
    } else {
        0.0
    }
}

/// Deterministic local id for records the upstream sent without one.
/// Hashing the serialized record keeps the id stable across refetches.
fn fallback_id(raw: &RawPlant) -> String {
    let payload = serde_json::to_string(raw).unwrap_or_default();
    let mut hasher = FxHasher::default();
    hasher.write(payload.as_bytes());
    format!("local-{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn origin() -> Url {
        Url::parse("http://localhost:3000").unwrap()
    }

    fn raw_from(value: serde_json::Value) -> RawPlant {
        serde_json::from_value(value).unwrap()
    }

    // ---- Id Resolution Tests ----

    #[test]
    fn test_id_prefers_id_field() {
        let raw = raw_from(json!({"id": 7, "plantId": "p-9", "_id": "m-1"}));
        assert_eq!(normalize_plant(&raw, &origin()).id, "7");
    }

    #[test]
    fn test_id_falls_back_through_aliases() {
        let raw = raw_from(json!({"plantId": "p-9", "_id": "m-1"}));
        assert_eq!(normalize_plant(&raw, &origin()).id, "p-9");

        let raw = raw_from(json!({"_id": "m-1"}));
        assert_eq!(normalize_plant(&raw, &origin()).id, "m-1");
    }

    #[test]
    fn test_id_null_is_skipped() {
        let raw = raw_from(json!({"id": null, "plantId": "p-2"}));
        assert_eq!(normalize_plant(&raw, &origin()).id, "p-2");
    }

    #[test]
    fn test_missing_id_gets_deterministic_local_id() {
        let raw = raw_from(json!({"name": "Mango Tree", "price": "12.5"}));
        let first = normalize_plant(&raw, &origin()).id;
        let second = normalize_plant(&raw, &origin()).id;

        assert!(first.starts_with("local-"));
        assert!(first.len() > "local-".len());
        assert_eq!(first, second);

        // a different record hashes to a different id
        let other = raw_from(json!({"name": "Neem Tree", "price": "12.5"}));
        assert_ne!(normalize_plant(&other, &origin()).id, first);
    }

    #[test]
    fn test_empty_string_id_gets_local_id() {
        let raw = raw_from(json!({"id": "", "name": "Mango Tree"}));
        assert!(normalize_plant(&raw, &origin()).id.starts_with("local-"));
    }

    // ---- Name and Category Tests ----

    #[test]
    fn test_name_fallbacks() {
        let raw = raw_from(json!({"name": "Mango Tree"}));
        assert_eq!(normalize_plant(&raw, &origin()).name, "Mango Tree");

        let raw = raw_from(json!({"plant_name": "Neem Tree"}));
        assert_eq!(normalize_plant(&raw, &origin()).name, "Neem Tree");

        let raw = raw_from(json!({}));
        assert_eq!(normalize_plant(&raw, &origin()).name, "Unknown");
    }

    #[test]
    fn test_numeric_name_stringifies() {
        let raw = raw_from(json!({"name": 42}));
        assert_eq!(normalize_plant(&raw, &origin()).name, "42");
    }

    #[test]
    fn test_malformed_name_degrades_to_default() {
        let raw = raw_from(json!({"name": ["a", "b"]}));
        assert_eq!(normalize_plant(&raw, &origin()).name, "Unknown");
    }

    #[test]
    fn test_category_fallbacks() {
        let raw = raw_from(json!({"category": "Fruit"}));
        assert_eq!(normalize_plant(&raw, &origin()).category, "Fruit");

        let raw = raw_from(json!({"type": "Flowering"}));
        assert_eq!(normalize_plant(&raw, &origin()).category, "Flowering");

        let raw = raw_from(json!({}));
        assert_eq!(normalize_plant(&raw, &origin()).category, "N/A");
    }

    // ---- Price Coercion Tests ----

    #[test]
    fn test_price_numeric_string_parses() {
        let raw = raw_from(json!({"price": "12.5"}));
        assert_relative_eq!(normalize_plant(&raw, &origin()).price, 12.5);
    }

    #[test]
    fn test_price_number_passes_through() {
        let raw = raw_from(json!({"price": 30}));
        assert_relative_eq!(normalize_plant(&raw, &origin()).price, 30.0);
    }

    #[test]
    fn test_price_cost_fallback() {
        let raw = raw_from(json!({"cost": 25}));
        assert_relative_eq!(normalize_plant(&raw, &origin()).price, 25.0);

        let raw = raw_from(json!({"price": null, "cost": "9.99"}));
        assert_relative_eq!(normalize_plant(&raw, &origin()).price, 9.99);
    }

    #[test]
    fn test_price_empty_string_is_zero_without_consulting_cost() {
        // "" is present, so the cost alias must not be reached
        let raw = raw_from(json!({"price": "", "cost": 99}));
        assert_relative_eq!(normalize_plant(&raw, &origin()).price, 0.0);
    }

    #[test]
    fn test_price_garbage_and_negatives_clamp_to_zero() {
        for bad in [json!("abc"), json!(-5), json!("-3.2"), json!({"usd": 5}), json!([1])] {
            let raw = raw_from(json!({ "price": bad }));
            assert_relative_eq!(normalize_plant(&raw, &origin()).price, 0.0);
        }
    }

    #[test]
    fn test_price_absent_is_zero() {
        let raw = raw_from(json!({}));
        assert_relative_eq!(normalize_plant(&raw, &origin()).price, 0.0);
    }

    // ---- Description Tests ----

    #[test]
    fn test_short_description_aliases() {
        let raw = raw_from(json!({"short_description": "Sweet fruit tree"}));
        assert_eq!(
            normalize_plant(&raw, &origin()).short_description,
            "Sweet fruit tree"
        );

        let raw = raw_from(json!({"shortDescription": "Camel case"}));
        assert_eq!(normalize_plant(&raw, &origin()).short_description, "Camel case");

        let raw = raw_from(json!({"summary": "From summary"}));
        assert_eq!(normalize_plant(&raw, &origin()).short_description, "From summary");
    }

    #[test]
    fn test_short_description_falls_back_to_description() {
        let raw = raw_from(json!({"description": "Long form text"}));
        let plant = normalize_plant(&raw, &origin());
        assert_eq!(plant.short_description, "Long form text");
        assert_eq!(plant.description, "Long form text");

        // empty short description also falls through
        let raw = raw_from(json!({"short_description": "", "description": "Long form text"}));
        assert_eq!(
            normalize_plant(&raw, &origin()).short_description,
            "Long form text"
        );
    }

    #[test]
    fn test_description_aliases() {
        let raw = raw_from(json!({"details": "From details"}));
        assert_eq!(normalize_plant(&raw, &origin()).description, "From details");

        let raw = raw_from(json!({"detail": "From detail"}));
        assert_eq!(normalize_plant(&raw, &origin()).description, "From detail");

        let raw = raw_from(json!({}));
        assert_eq!(normalize_plant(&raw, &origin()).description, "");
    }

    // ---- Image Tests ----

    #[test]
    fn test_image_aliases_resolve_in_order() {
        let raw = raw_from(json!({"img": "https://cdn.example.com/a.png"}));
        assert_eq!(
            normalize_plant(&raw, &origin()).image,
            "https://cdn.example.com/a.png"
        );

        let raw = raw_from(json!({"thumbnail": "//cdn.example.com/t.png"}));
        assert_eq!(
            normalize_plant(&raw, &origin()).image,
            "https://cdn.example.com/t.png"
        );
    }

    #[test]
    fn test_missing_or_non_string_image_gets_placeholder() {
        let raw = raw_from(json!({}));
        assert_eq!(normalize_plant(&raw, &origin()).image, PLACEHOLDER_IMAGE);

        let raw = raw_from(json!({"image": 12345}));
        assert_eq!(normalize_plant(&raw, &origin()).image, PLACEHOLDER_IMAGE);
    }

    // ---- Category Record Tests ----

    #[test]
    fn test_normalize_category_id_chain() {
        let raw: RawCategory = serde_json::from_value(json!({"id": 3, "name": "Shade"})).unwrap();
        let record = normalize_category(&raw);
        assert_eq!(record.id.as_deref(), Some("3"));
        assert_eq!(record.label, "Shade");

        let raw: RawCategory =
            serde_json::from_value(json!({"category_id": "ct-2", "category": "Fruit Trees"}))
                .unwrap();
        let record = normalize_category(&raw);
        assert_eq!(record.id.as_deref(), Some("ct-2"));
        assert_eq!(record.label, "Fruit Trees");

        let raw: RawCategory = serde_json::from_value(json!({"slug": "timber"})).unwrap();
        let record = normalize_category(&raw);
        assert_eq!(record.id.as_deref(), Some("timber"));
        // label falls back to the stringified id
        assert_eq!(record.label, "timber");
    }

    #[test]
    fn test_normalize_category_empty_record() {
        let record = normalize_category(&RawCategory::default());
        assert_eq!(record.id, None);
        assert_eq!(record.label, "");
    }
}
