//! HTML parsing and feature extraction.
//!
//! This module turns raw page markup into [`DocumentFeatures`]:
//! - Head metadata (title, description, canonical, viewport, charset, favicon)
//! - Structured data (Open Graph, JSON-LD, microdata)
//! - Body content (headings, words, paragraphs, images, links)
//! - Simple accessibility markers (lang, ARIA landmarks, form labels)
//!
//! All parsing is done using CSS selectors via the `scraper` crate. Extraction
//! never fails: malformed markup simply yields fewer features.

mod content;
mod html;
mod links;
mod structured;

use scraper::Html;
use url::Url;

use crate::error_handling::ProcessingStats;
use crate::models::DocumentFeatures;

pub use content::{
    count_paragraphs, count_unlabeled_form_fields, count_words, extract_heading_structure,
    extract_image_stats, extract_landmarks, heading_levels,
};
pub use html::{
    extract_canonical, extract_meta_description, extract_title, has_charset_meta, has_favicon,
    has_lang_attribute, has_meta_robots, viewport_meta,
};
pub use links::count_links;
pub use structured::{extract_json_ld, extract_open_graph, has_microdata, schema_types};

/// Extracts every document feature from `html`.
///
/// `page_url` is the final URL the markup was served from and is used to
/// resolve relative links. Fields only a browser can measure (load time,
/// mobile fit, contrast) are left unset, and `status_code` is 0 until the
/// caller fills it in.
pub fn extract_document_features(
    html: &str,
    page_url: &Url,
    stats: &ProcessingStats,
) -> DocumentFeatures {
    let document = Html::parse_document(html);
    let (has_viewport_meta, viewport_device_width) = viewport_meta(&document);

    DocumentFeatures {
        title: extract_title(&document, stats),
        description: extract_meta_description(&document, stats),
        canonical: extract_canonical(&document, stats),
        og_tags: extract_open_graph(&document),
        schema: extract_json_ld(&document, stats),
        has_microdata: has_microdata(&document),
        heading_structure: extract_heading_structure(&document),
        word_count: count_words(&document, stats),
        paragraph_count: count_paragraphs(&document),
        link_count: count_links(&document, page_url, stats),
        images: extract_image_stats(&document),
        has_viewport_meta,
        viewport_device_width,
        has_charset_meta: has_charset_meta(&document),
        has_meta_robots: has_meta_robots(&document),
        has_lang_attribute: has_lang_attribute(&document),
        has_favicon: has_favicon(&document),
        landmarks: extract_landmarks(&document),
        unlabeled_form_fields: count_unlabeled_form_fields(&document),
        page_size_bytes: html.len(),
        load_time_ms: None,
        status_code: 0,
        mobile_renders: None,
        good_contrast: None,
    }
}
