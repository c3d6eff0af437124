//! WASM bindings for the meal-logging autocomplete.
//!
//! Called on every keystroke from JavaScript, so nothing here may throw:
//! bad input degrades to an empty suggestion list.

use crate::{clamp_limit_f64, rank, FoodEntry};
use wasm_bindgen::prelude::*;

/// Rank a JSON catalog for a query.
///
/// # Arguments
/// * `query` - Text currently in the input
/// * `catalog_json` - JSON array of entries (`id`, `name`, optional `category`, `frequency`, `lastUsed`)
/// * `limit` - Maximum results; negative, NaN, or zero returns none
///
/// # Returns
/// JSON array of the ranked entries, or `[]` if the catalog cannot be parsed
#[wasm_bindgen]
pub fn suggest_foods(query: &str, catalog_json: &str, limit: f64) -> String {
    let catalog: Vec<FoodEntry> = match serde_json::from_str(catalog_json) {
        Ok(entries) => entries,
        Err(_) => return "[]".to_string(),
    };

    let ranked = rank(query, &catalog, clamp_limit_f64(limit));
    serde_json::to_string(&ranked).unwrap_or_else(|_| "[]".to_string())
}

/// Normalized form of a query, or an empty string when it is too short to suggest for.
#[wasm_bindgen]
pub fn normalize_query_js(query: &str) -> String {
    crate::normalize_query(query).unwrap_or_default()
}
