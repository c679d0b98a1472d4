//! CSS selector parsing.

use scraper::Selector;

/// Parses a constant selector.
///
/// # Panics
///
/// Panics if the selector does not parse; only use with string literals.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!("Failed to parse CSS selector '{selector_str}' in {context}: {e}")
    })
}
