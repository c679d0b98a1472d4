//! Head-level HTML extraction.
//!
//! This module extracts the page-level metadata used for scoring:
//! - Page title and meta description
//! - Canonical link and favicon
//! - Viewport, charset and robots meta tags
//! - `lang` attribute on the root element

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::error_handling::{ProcessingStats, WarningType};
use crate::utils::parse_selector_unsafe;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe("meta[name='description' i]", "META_DESCRIPTION_SELECTOR")
});
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[rel='canonical' i]", "CANONICAL_SELECTOR"));
static LINK_REL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[rel]", "LINK_REL_SELECTOR"));
static VIEWPORT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[name='viewport' i]", "VIEWPORT_SELECTOR"));
static CHARSET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[charset]", "CHARSET_SELECTOR"));
static ROBOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[name='robots' i]", "ROBOTS_SELECTOR"));
static HTTP_EQUIV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[http-equiv]", "HTTP_EQUIV_SELECTOR"));
static HTML_LANG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("html[lang]", "HTML_LANG_SELECTOR"));

/// Extracts the page title from an HTML document.
///
/// Returns the trimmed text of the first `<title>` element. A missing or
/// blank title is recorded as a warning and returned as an empty string.
pub fn extract_title(document: &Html, stats: &ProcessingStats) -> String {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    if title.is_empty() {
        log::debug!("No usable title element found in document");
        stats.increment_warning(WarningType::MissingTitle);
    }
    title
}

/// Extracts the meta description, trimmed. Missing descriptions come back empty.
pub fn extract_meta_description(document: &Html, stats: &ProcessingStats) -> String {
    let description = document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default();

    if description.is_empty() {
        stats.increment_warning(WarningType::MissingMetaDescription);
    }
    description
}

/// Extracts the canonical link `href`, if present and non-empty.
pub fn extract_canonical(document: &Html, stats: &ProcessingStats) -> Option<String> {
    let canonical = document
        .select(&CANONICAL_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .find(|href| !href.is_empty())
        .map(str::to_string);

    if canonical.is_none() {
        stats.increment_warning(WarningType::MissingCanonical);
    }
    canonical
}

/// True if any `<link rel>` declares an `icon` token (`icon`, `shortcut icon`).
pub fn has_favicon(document: &Html) -> bool {
    document.select(&LINK_REL_SELECTOR).any(|element| {
        element
            .value()
            .attr("rel")
            .map(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("icon"))
            })
            .unwrap_or(false)
    })
}

/// Viewport meta presence, and whether it declares `width=device-width`.
pub fn viewport_meta(document: &Html) -> (bool, bool) {
    match document.select(&VIEWPORT_SELECTOR).next() {
        Some(element) => {
            let content = element
                .value()
                .attr("content")
                .unwrap_or_default()
                .to_ascii_lowercase();
            let device_width = content
                .split(',')
                .any(|directive| directive.replace(' ', "") == "width=device-width");
            (true, device_width)
        }
        None => (false, false),
    }
}

/// True for `<meta charset>` or an `http-equiv="content-type"` carrying a charset.
pub fn has_charset_meta(document: &Html) -> bool {
    if document.select(&CHARSET_SELECTOR).next().is_some() {
        return true;
    }
    document.select(&HTTP_EQUIV_SELECTOR).any(|element| {
        let value = element.value();
        value
            .attr("http-equiv")
            .is_some_and(|h| h.eq_ignore_ascii_case("content-type"))
            && value
                .attr("content")
                .is_some_and(|c| c.to_ascii_lowercase().contains("charset="))
    })
}

pub fn has_meta_robots(document: &Html) -> bool {
    document.select(&ROBOTS_SELECTOR).next().is_some()
}

/// True if the root element carries a non-blank `lang` attribute.
pub fn has_lang_attribute(document: &Html) -> bool {
    document
        .select(&HTML_LANG_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("lang"))
        .is_some_and(|lang| !lang.trim().is_empty())
}
