//! Structured data extraction.
//!
//! This module extracts:
//! - Open Graph meta tags (og:*)
//! - JSON-LD blocks (application/ld+json)
//! - Schema.org microdata markers (itemscope, itemtype)

use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error_handling::{ProcessingStats, WarningType};
use crate::utils::parse_selector_unsafe;

static OPEN_GRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"meta[property^="og:"]"#, "OPEN_GRAPH_SELECTOR"));
static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        r#"script[type="application/ld+json" i]"#,
        "JSON_LD_SELECTOR",
    )
});
static MICRODATA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[itemscope], [itemtype]", "MICRODATA_SELECTOR"));

/// Extracts Open Graph properties with non-empty content.
///
/// Later duplicates of a property overwrite earlier ones.
pub fn extract_open_graph(document: &Html) -> BTreeMap<String, String> {
    let mut og_tags = BTreeMap::new();
    for element in document.select(&OPEN_GRAPH_SELECTOR) {
        let value = element.value();
        if let (Some(property), Some(content)) = (value.attr("property"), value.attr("content")) {
            let property = property.trim();
            let content = content.trim();
            if !property.is_empty() && !content.is_empty() {
                og_tags.insert(property.to_string(), content.to_string());
            }
        }
    }
    og_tags
}

/// Extracts JSON-LD blocks.
///
/// Top-level arrays are flattened. A block that fails to parse, or an empty
/// array, still counts as one (empty) schema block so the page is credited
/// for attempting markup.
pub fn extract_json_ld(document: &Html, stats: &ProcessingStats) -> Vec<serde_json::Value> {
    let mut blocks = Vec::new();
    for element in document.select(&JSON_LD_SELECTOR) {
        let raw = element.text().collect::<String>();
        let raw = raw.trim();
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(items)) if items.is_empty() => {
                blocks.push(serde_json::Value::Object(serde_json::Map::new()));
            }
            Ok(serde_json::Value::Array(items)) => blocks.extend(items),
            Ok(value) => blocks.push(value),
            Err(e) => {
                log::debug!("Skipping invalid JSON-LD block: {e}");
                stats.increment_warning(WarningType::InvalidJsonLd);
                blocks.push(serde_json::Value::Object(serde_json::Map::new()));
            }
        }
    }
    blocks
}

/// True if any element carries `itemscope` or `itemtype`.
pub fn has_microdata(document: &Html) -> bool {
    document.select(&MICRODATA_SELECTOR).next().is_some()
}

/// Schema.org `@type` values found in JSON-LD blocks.
pub fn schema_types(blocks: &[serde_json::Value]) -> Vec<String> {
    let mut types = Vec::new();
    for block in blocks {
        match block.get("@type") {
            Some(serde_json::Value::String(t)) => types.push(t.clone()),
            Some(serde_json::Value::Array(items)) => types.extend(
                items
                    .iter()
                    .filter_map(|t| t.as_str())
                    .map(str::to_string),
            ),
            _ => {}
        }
    }
    types
}
