//! Raw upstream record shapes.
//!
//! The catalog API is loose about both field names and field types: the
//! same logical field arrives under several spellings (`image`, `img`,
//! `photo`, ...) and values drift between strings and numbers from one
//! record to the next. Each alias is captured here as its own optional
//! `serde_json::Value` slot so that a bad field never sinks the record
//! it belongs to. Resolution order and type coercion live in
//! `normalize`, not here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One plant record exactly as the upstream API sent it.
///
/// All slots are untyped on purpose. `Serialize` is derived so a record
/// with no usable id can be hashed into a deterministic local one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPlant {
    pub id: Option<Value>,
    #[serde(rename = "plantId")]
    pub plant_id: Option<Value>,
    #[serde(rename = "_id")]
    pub object_id: Option<Value>,

    pub image: Option<Value>,
    pub img: Option<Value>,
    pub photo: Option<Value>,
    pub thumbnail: Option<Value>,

    pub name: Option<Value>,
    pub plant_name: Option<Value>,

    pub category: Option<Value>,
    #[serde(rename = "type")]
    pub type_label: Option<Value>,

    pub price: Option<Value>,
    pub cost: Option<Value>,

    pub short_description: Option<Value>,
    #[serde(rename = "shortDescription")]
    pub short_description_alt: Option<Value>,
    pub summary: Option<Value>,

    pub description: Option<Value>,
    pub details: Option<Value>,
    pub detail: Option<Value>,
}

/// One category record as the upstream API sent it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    pub id: Option<Value>,
    pub category_id: Option<Value>,
    pub category: Option<Value>,
    pub slug: Option<Value>,
    pub name: Option<Value>,
}

/// Pull the plant array out of a list response.
///
/// The envelope is `{"data": [...]}` on most endpoints but `{"plants":
/// [...]}` has been observed too. Anything else decodes to an empty
/// list. Entries that are not objects degrade to an all-default record
/// rather than failing the batch.
pub fn plant_list(payload: &Value) -> Vec<RawPlant> {
    let items = payload
        .get("data")
        .and_then(Value::as_array)
        .or_else(|| payload.get("plants").and_then(Value::as_array));

    match items {
        Some(list) => list
            .iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    }
}

/// Pull a single plant record out of a detail response (`{"data": {...}}`).
///
/// Returns `None` when the `data` slot is absent, null, or a falsy
/// scalar (`false`, `0`, `""`), which callers treat as a failed lookup.
/// Other malformed values degrade to an all-default record.
pub fn plant_record(payload: &Value) -> Option<RawPlant> {
    match payload.get("data") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(serde_json::from_value(value.clone()).unwrap_or_default()),
    }
}

/// Pull the category array out of a categories response.
pub fn category_list(payload: &Value) -> Vec<RawCategory> {
    let items = payload
        .get("data")
        .and_then(Value::as_array)
        .or_else(|| payload.get("categories").and_then(Value::as_array));

    match items {
        Some(list) => list
            .iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    }
}
