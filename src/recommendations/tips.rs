//! Evergreen advice appended when a page yields few specific findings.
//!
//! A tip is skipped when a rule of the same category already fired, or when
//! the fetched document already covers it.

use super::tags::{Category, Level, RecommendationTags};
use super::Recommendation;
use crate::config::SLOW_LOAD_TIME_MS;
use crate::models::DocumentFeatures;

struct Tip {
    text: &'static str,
    category: Category,
    /// The document already follows the tip or a rule reports the gap.
    covered: fn(&DocumentFeatures) -> bool,
}

fn never(_: &DocumentFeatures) -> bool {
    false
}

const GENERIC_TIPS: &[Tip] = &[
    Tip {
        text: "Ensure your page has a descriptive title tag (ideally 50-60 characters).",
        category: Category::Meta,
        covered: |doc| (50..=60).contains(&doc.title_len()),
    },
    Tip {
        text: "Add a meta description that summarizes your page content (ideally 150-160 characters).",
        category: Category::Meta,
        covered: |doc| (150..=160).contains(&doc.description_len()),
    },
    Tip {
        text: "Use a single H1 heading that clearly describes your page content.",
        category: Category::Content,
        covered: |doc| doc.heading_structure.h1_count == 1,
    },
    Tip {
        text: "Structure your content with H2-H6 subheadings for better readability and SEO.",
        category: Category::Content,
        covered: |doc| {
            let headings = &doc.heading_structure;
            headings.h2_count + headings.h3_count + headings.other_headings_count() > 0
        },
    },
    Tip {
        text: "Include relevant keywords in your content naturally, avoiding keyword stuffing.",
        category: Category::Content,
        covered: never,
    },
    Tip {
        text: "Optimize images with descriptive file names and ALT text.",
        category: Category::Media,
        covered: |doc| doc.images.count > 0,
    },
    Tip {
        text: "Ensure your website is mobile-friendly and loads quickly.",
        category: Category::Mobile,
        covered: |doc| {
            doc.viewport_device_width
                && doc.mobile_renders != Some(false)
                && doc.load_time_ms.map_or(true, |ms| ms <= SLOW_LOAD_TIME_MS)
        },
    },
    Tip {
        text: "Add internal links to other relevant pages on your site.",
        category: Category::Links,
        covered: |doc| doc.link_count.internal > 0,
    },
    Tip {
        text: "Include external links to authoritative sources when appropriate.",
        category: Category::Links,
        covered: |doc| doc.link_count.external > 0,
    },
];

/// Tips that add something to `found`, in declaration order.
///
/// `document` is `None` for URL-only analysis, where only the category check applies.
pub(super) fn generic_tips(
    found: &[Recommendation],
    document: Option<&DocumentFeatures>,
) -> Vec<Recommendation> {
    GENERIC_TIPS
        .iter()
        .filter(|tip| !found.iter().any(|r| r.tags.category == tip.category))
        .filter(|tip| !document.is_some_and(|doc| (tip.covered)(doc)))
        .map(|tip| {
            Recommendation::new(
                tip.text,
                RecommendationTags::new(tip.category, Level::Low, Level::Low, Level::Low),
            )
        })
        .collect()
}
