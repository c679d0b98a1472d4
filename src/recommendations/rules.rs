//! Feature-derived recommendation rules.
//!
//! Rules run in a fixed order and that order is the priority order of the
//! output. Each rule attaches its tags directly instead of inferring them
//! from the message text.

use super::tags::{Category, Level, RecommendationTags};
use super::Recommendation;
use crate::config::SLOW_LOAD_TIME_MS;
use crate::models::{DocumentFeatures, PageFeatures};
use crate::url_features::{DomainForm, UrlFeatures};

/// Which document table the thresholds come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Variant {
    Static,
    Rendered,
}

const TITLE: RecommendationTags =
    RecommendationTags::new(Category::Meta, Level::High, Level::Low, Level::High);
const DESCRIPTION: RecommendationTags =
    RecommendationTags::new(Category::Meta, Level::High, Level::Low, Level::High);
const FAVICON: RecommendationTags =
    RecommendationTags::new(Category::Technical, Level::Low, Level::Low, Level::Low);
const CANONICAL: RecommendationTags =
    RecommendationTags::new(Category::Technical, Level::Medium, Level::Low, Level::Medium);
const OPEN_GRAPH: RecommendationTags =
    RecommendationTags::new(Category::Meta, Level::Low, Level::Low, Level::Low);
const H1: RecommendationTags =
    RecommendationTags::new(Category::Content, Level::High, Level::Low, Level::High);
const HEADING_ORDER: RecommendationTags =
    RecommendationTags::new(Category::Content, Level::Medium, Level::Medium, Level::Medium);
const WORD_COUNT: RecommendationTags =
    RecommendationTags::new(Category::Content, Level::Medium, Level::High, Level::Medium);
const ALT_TEXT: RecommendationTags =
    RecommendationTags::new(Category::Accessibility, Level::Medium, Level::Low, Level::Medium);
const INTERNAL_LINKS: RecommendationTags =
    RecommendationTags::new(Category::Links, Level::Medium, Level::Medium, Level::Medium);
const EXTERNAL_LINKS: RecommendationTags =
    RecommendationTags::new(Category::Links, Level::Low, Level::Low, Level::Low);
const HTTPS: RecommendationTags =
    RecommendationTags::new(Category::Technical, Level::High, Level::High, Level::High);
const LOAD_TIME: RecommendationTags =
    RecommendationTags::new(Category::Performance, Level::High, Level::High, Level::High);
const VIEWPORT: RecommendationTags =
    RecommendationTags::new(Category::Mobile, Level::High, Level::Low, Level::High);
const MOBILE_RENDERING: RecommendationTags =
    RecommendationTags::new(Category::Mobile, Level::High, Level::High, Level::High);
const H2: RecommendationTags =
    RecommendationTags::new(Category::Content, Level::Medium, Level::Low, Level::Medium);
const IMAGES: RecommendationTags =
    RecommendationTags::new(Category::Media, Level::Low, Level::Medium, Level::Low);
const CHARSET: RecommendationTags =
    RecommendationTags::new(Category::Technical, Level::Low, Level::Low, Level::Low);
const LANG: RecommendationTags =
    RecommendationTags::new(Category::Accessibility, Level::Medium, Level::Low, Level::Medium);
const MAIN_LANDMARK: RecommendationTags =
    RecommendationTags::new(Category::Accessibility, Level::Low, Level::Low, Level::Low);
const FORM_LABELS: RecommendationTags =
    RecommendationTags::new(Category::Accessibility, Level::Medium, Level::Low, Level::Medium);
const URL_STRUCTURE: RecommendationTags =
    RecommendationTags::new(Category::Technical, Level::Low, Level::Medium, Level::Low);
const DEEP_PATH: RecommendationTags =
    RecommendationTags::new(Category::Technical, Level::Medium, Level::High, Level::Medium);

const HTTPS_MESSAGE: &str = "Implement HTTPS to secure your website and improve search rankings.";

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Rules for fetched or rendered documents.
pub(super) fn document_rules(page: &PageFeatures, variant: Variant) -> Vec<Recommendation> {
    let doc = &page.document;
    let mut out = Vec::new();
    let mut add = |text: String, tags: RecommendationTags| out.push(Recommendation::new(text, tags));

    let title_len = doc.title_len();
    let min_title = match variant {
        Variant::Static => 10,
        Variant::Rendered => 30,
    };
    if title_len == 0 {
        add("Add a title tag to your page.".into(), TITLE);
    } else if title_len < min_title {
        let text = match variant {
            Variant::Static => format!(
                "Your title tag is too short. Make it more descriptive (10-60 characters). Current: {title_len} characters."
            ),
            Variant::Rendered => format!(
                "Your title tag is too short. Lengthen it to 30-60 characters. Current: {title_len} characters."
            ),
        };
        add(text, TITLE);
    } else if title_len > 60 {
        add(
            format!("Your title tag is too long. Shorten it to under 60 characters. Current: {title_len} characters."),
            TITLE,
        );
    }

    let description_len = doc.description_len();
    if description_len == 0 {
        add("Add a meta description to your page.".into(), DESCRIPTION);
    } else if description_len < 50 {
        add(
            format!("Your meta description is too short. Aim for 50-160 characters. Current: {description_len} characters."),
            DESCRIPTION,
        );
    } else if description_len > 160 {
        add(
            format!("Your meta description is too long. Keep it under 160 characters. Current: {description_len} characters."),
            DESCRIPTION,
        );
    }

    if variant == Variant::Static && !doc.has_favicon {
        add("Add a favicon to your website.".into(), FAVICON);
    }

    if doc.canonical.is_none() {
        add(
            "Add a canonical URL tag to prevent duplicate content issues.".into(),
            CANONICAL,
        );
    }

    if doc.og_tag_count() < 3 {
        add(
            "Add Open Graph meta tags to improve social media sharing.".into(),
            OPEN_GRAPH,
        );
    }

    match doc.heading_structure.h1_count {
        0 => add("Add an H1 heading to your page.".into(), H1),
        1 => {}
        n => add(format!("Use only one H1 heading per page. Current: {n}."), H1),
    }

    if !doc.heading_structure.has_proper_heading_order {
        add(
            "Fix your heading structure. Use headings in order (H1, then H2, then H3) without skipping levels.".into(),
            HEADING_ORDER,
        );
    }

    let words = doc.word_count;
    match variant {
        Variant::Static if words < 300 => add(
            format!("Add more content to your page. Aim for at least 300 words. Current word count: {words}."),
            WORD_COUNT,
        ),
        Variant::Rendered if words < 600 => add(
            format!("Expand your content to at least 600 words for in-depth coverage. Current word count: {words}."),
            WORD_COUNT,
        ),
        _ => {}
    }

    let missing_alt = doc.images.without_alt;
    if missing_alt > 0 {
        add(
            format!(
                "Add alt text to {missing_alt} {} missing it.",
                plural(missing_alt, "image that is", "images that are")
            ),
            ALT_TEXT,
        );
    }

    if doc.link_count.internal == 0 {
        add(
            "Add internal links to other pages on your site.".into(),
            INTERNAL_LINKS,
        );
    }
    if doc.link_count.external == 0 {
        add(
            "Add external links to authoritative sources to improve credibility.".into(),
            EXTERNAL_LINKS,
        );
    }

    if !page.url.https_protocol {
        add(HTTPS_MESSAGE.into(), HTTPS);
    }

    if let Some(ms) = doc.load_time_ms.filter(|&ms| ms > SLOW_LOAD_TIME_MS) {
        add(
            format!(
                "Improve page load speed. Current load time: {:.2} seconds.",
                ms as f64 / 1000.0
            ),
            LOAD_TIME,
        );
    }

    if !doc.has_viewport_meta {
        add(
            "Add a proper viewport meta tag for better mobile responsiveness.".into(),
            VIEWPORT,
        );
    }
    if variant == Variant::Rendered && doc.mobile_renders == Some(false) {
        add(
            "Fix mobile rendering issues. Your page does not display properly on mobile devices.".into(),
            MOBILE_RENDERING,
        );
    }

    if variant == Variant::Static {
        static_markup_rules(doc, &mut add);
    }

    out
}

/// Markup hygiene checks only the static table reports.
fn static_markup_rules(doc: &DocumentFeatures, add: &mut impl FnMut(String, RecommendationTags)) {
    if doc.heading_structure.h2_count == 0 {
        add("Add H2 headings to organize your content.".into(), H2);
    }
    if doc.images.count == 0 {
        add(
            "Add images to make your content more engaging.".into(),
            IMAGES,
        );
    }
    if !doc.has_charset_meta {
        add(
            "Add a meta charset tag to specify character encoding.".into(),
            CHARSET,
        );
    }
    if !doc.has_lang_attribute {
        add("Add a lang attribute to your HTML tag.".into(), LANG);
    }
    if !doc.landmarks.main {
        add(
            "Add a main landmark for better accessibility.".into(),
            MAIN_LANDMARK,
        );
    }
    let unlabeled = doc.unlabeled_form_fields;
    if unlabeled > 0 {
        add(
            format!(
                "Add proper labels to {unlabeled} {}.",
                plural(unlabeled, "form field", "form fields")
            ),
            FORM_LABELS,
        );
    }
}

/// Rules that only need the URL.
pub(super) fn url_rules(url: &UrlFeatures) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if !url.https_protocol {
        out.push(Recommendation::new(HTTPS_MESSAGE, HTTPS));
    }
    if url.domain_structure == DomainForm::Root && !url.domain_has_www {
        out.push(Recommendation::new(
            "Consider using a consistent www or non-www version of your domain and set up proper redirects.",
            URL_STRUCTURE,
        ));
    }
    if url.path_depth > 3 {
        out.push(Recommendation::new(
            "Your URL path is quite deep. Consider a flatter site structure for better SEO.",
            DEEP_PATH,
        ));
    }
    if url.has_query_params {
        out.push(Recommendation::new(
            "Your URL contains query parameters. Consider using clean, descriptive URLs without parameters when possible.",
            URL_STRUCTURE,
        ));
    }
    if url.has_fragment {
        out.push(Recommendation::new(
            "Your URL contains a fragment identifier (#). Search engines typically ignore content after the #.",
            URL_STRUCTURE,
        ));
    }
    out
}
