//! WASM bindings for the catalog search box.

use festival_core::config::SearchConfig;
use festival_core::{Catalog, Searchable};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct Hit<'a> {
    id: String,
    kind: festival_core::RecordKind,
    title: &'a str,
    score: u32,
    title_html: String,
}

/// Search both fixtures and return ranked hits as JSON.
///
/// # Arguments
/// * `query` - Raw query from the search box
/// * `projects_json` - Projects fixture (array or wrapped object)
/// * `shop_json` - Shop fixture (array or wrapped object)
/// * `max_results` - Maximum results to return (0 for the default of 10)
///
/// # Returns
/// JSON array of `{id, kind, title, score, title_html}`; `[]` on bad input
#[wasm_bindgen]
pub fn search_catalog(query: &str, projects_json: &str, shop_json: &str, max_results: usize) -> String {
    let catalog = match Catalog::from_json(projects_json, shop_json) {
        Ok(catalog) => catalog,
        Err(_) => return "[]".to_string(),
    };

    let mut config = SearchConfig::default();
    if max_results > 0 {
        config.max_results = max_results;
    }

    let hits: Vec<Hit<'_>> = crate::SearchEngine::new(&catalog, config)
        .search(query)
        .into_iter()
        .map(|result| Hit {
            id: result.item.id().to_string(),
            kind: result.item.kind(),
            title: result.item.title(),
            score: result.score,
            title_html: crate::highlight_html(result.item.title(), query.trim()),
        })
        .collect();

    serde_json::to_string(&hits).unwrap_or_else(|_| "[]".to_string())
}

/// Score a single record given as JSON `{id, title, description, category?}`.
#[wasm_bindgen]
pub fn score_record(query: &str, record_json: &str) -> Result<u32, JsValue> {
    let record: festival_core::Project = serde_json::from_str(record_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let query_lower = crate::fold_case(query.trim());
    Ok(crate::Scorer::default().score(&query_lower, &record))
}

/// Escaped HTML with literal matches wrapped in `<mark>`.
#[wasm_bindgen]
pub fn highlight_matches(text: &str, query: &str) -> String {
    crate::highlight_html(text, query.trim())
}
