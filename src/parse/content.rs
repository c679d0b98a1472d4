//! Body content extraction: headings, words, paragraphs, images, and the
//! simple accessibility markers (ARIA landmarks, form labels).

use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error_handling::{ProcessingStats, WarningType};
use crate::models::{HeadingStructure, ImageStats, Landmarks};
use crate::utils::parse_selector_unsafe;

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h1, h2, h3, h4, h5, h6", "HEADING_SELECTOR"));
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("body", "BODY_SELECTOR"));
static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("p", "PARAGRAPH_SELECTOR"));
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMAGE_SELECTOR"));
static MAIN_LANDMARK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"main, [role="main"]"#, "MAIN_LANDMARK_SELECTOR"));
static NAV_LANDMARK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"nav, [role="navigation"]"#, "NAV_LANDMARK_SELECTOR")
});
static HEADER_LANDMARK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"header, [role="banner"]"#, "HEADER_LANDMARK_SELECTOR"));
static FOOTER_LANDMARK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"footer, [role="contentinfo"]"#, "FOOTER_LANDMARK_SELECTOR")
});
static FORM_FIELD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("input, select, textarea", "FORM_FIELD_SELECTOR"));
static LABEL_FOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("label[for]", "LABEL_FOR_SELECTOR"));

/// Elements whose text never reaches the reader.
const HIDDEN_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Input types that don't need a visible label.
const UNLABELED_INPUT_TYPES: &[&str] = &["submit", "button", "reset", "hidden"];

/// Heading levels in document order, e.g. `[1, 2, 2, 3]`.
pub fn heading_levels(document: &Html) -> Vec<u8> {
    document
        .select(&HEADING_SELECTOR)
        .filter_map(|element| {
            element
                .value()
                .name()
                .strip_prefix('h')
                .and_then(|level| level.parse::<u8>().ok())
        })
        .collect()
}

/// Heading counts and order flag for a document.
pub fn extract_heading_structure(document: &Html) -> HeadingStructure {
    HeadingStructure::from_levels(&heading_levels(document))
}

/// Concatenated text of an element, skipping script/style content.
fn visible_text(root: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in root.descendants() {
        if let Node::Text(chunk) = node.value() {
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| HIDDEN_TEXT_ELEMENTS.contains(&e.name()))
            });
            if !hidden {
                text.push_str(chunk);
                text.push(' ');
            }
        }
    }
    text
}

/// Whitespace-separated words in the `<body>` text.
pub fn count_words(document: &Html, stats: &ProcessingStats) -> usize {
    match document.select(&BODY_SELECTOR).next() {
        Some(body) => visible_text(body).split_whitespace().count(),
        None => {
            stats.increment_warning(WarningType::MissingBody);
            0
        }
    }
}

pub fn count_paragraphs(document: &Html) -> usize {
    document.select(&PARAGRAPH_SELECTOR).count()
}

/// Image count and alt-text coverage. Blank alt attributes count as missing.
pub fn extract_image_stats(document: &Html) -> ImageStats {
    let mut stats = ImageStats::default();
    for image in document.select(&IMAGE_SELECTOR) {
        stats.count += 1;
        let has_alt = image
            .value()
            .attr("alt")
            .is_some_and(|alt| !alt.trim().is_empty());
        if has_alt {
            stats.with_alt += 1;
        } else {
            stats.without_alt += 1;
        }
    }
    stats
}

/// Which of the main, navigation, banner and contentinfo landmarks the page declares.
pub fn extract_landmarks(document: &Html) -> Landmarks {
    let present = |selector: &Selector| document.select(selector).next().is_some();
    Landmarks {
        main: present(&MAIN_LANDMARK_SELECTOR),
        nav: present(&NAV_LANDMARK_SELECTOR),
        header: present(&HEADER_LANDMARK_SELECTOR),
        footer: present(&FOOTER_LANDMARK_SELECTOR),
    }
}

/// Form fields whose `id` is not referenced by any `<label for>`.
pub fn count_unlabeled_form_fields(document: &Html) -> usize {
    let labelled: HashSet<&str> = document
        .select(&LABEL_FOR_SELECTOR)
        .filter_map(|label| label.value().attr("for"))
        .collect();

    document
        .select(&FORM_FIELD_SELECTOR)
        .filter(|field| {
            let value = field.value();
            if value.name() == "input" {
                let input_type = value.attr("type").unwrap_or("text").to_ascii_lowercase();
                if UNLABELED_INPUT_TYPES.contains(&input_type.as_str()) {
                    return false;
                }
            }
            !value.id().is_some_and(|id| labelled.contains(id))
        })
        .count()
}
