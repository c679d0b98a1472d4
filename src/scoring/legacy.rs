//! Point tables for static HTML and URL-only analyses.

use super::{
    alt_accessibility_points, clamp_score, content_points, h1_points, open_graph_points,
    CategoryScores,
};
use crate::config::{URL_ONLY_ACCESSIBILITY_SCORE, URL_ONLY_CONTENT_SCORE, URL_ONLY_META_SCORE};
use crate::models::{DocumentFeatures, PageFeatures};
use crate::url_features::{DomainForm, UrlFeatures};

/// Credit for factors raw HTML cannot show (SEO and performance tables).
const STATIC_BASELINE: u32 = 10;
const STATIC_ACCESSIBILITY_BASE: u32 = 50;
const LANDMARK_POINTS: u32 = 5;

const URL_ONLY_TECHNICAL_WEIGHT: f64 = 0.4;
const URL_ONLY_META_WEIGHT: f64 = 0.3;
const URL_ONLY_CONTENT_WEIGHT: f64 = 0.3;

pub(super) fn score_static(page: &PageFeatures) -> CategoryScores {
    CategoryScores::from_categories(
        static_seo(&page.document),
        static_performance(&page.url, &page.document),
        static_accessibility(&page.document),
        static_best_practices(&page.document),
    )
}

fn static_seo(doc: &DocumentFeatures) -> u32 {
    let mut points = STATIC_BASELINE;

    let title_len = doc.title_len();
    if title_len > 0 {
        points += 10;
        if (10..=60).contains(&title_len) {
            points += 10;
        }
    }
    let description_len = doc.description_len();
    if description_len > 0 {
        points += 10;
        if (50..=160).contains(&description_len) {
            points += 10;
        }
    }
    if doc.has_favicon {
        points += 10;
    }
    if doc.canonical.is_some() {
        points += 10;
    }
    points += open_graph_points(doc);
    if !doc.schema.is_empty() || doc.has_microdata {
        points += 10;
    }
    points + h1_points(doc)
}

fn static_performance(url: &UrlFeatures, doc: &DocumentFeatures) -> u32 {
    let mut points = STATIC_BASELINE;

    if url.https_protocol {
        points += 20;
    }
    points += domain_form_points(url.domain_structure);
    if url.path_depth <= 3 {
        points += 5;
    }
    if !url.has_query_params {
        points += 5;
    }
    if doc.status_code == 200 {
        points += 15;
    }
    if doc.has_viewport_meta {
        points += 10;
        if doc.viewport_device_width {
            points += 5;
        }
    }
    if doc.has_charset_meta {
        points += 10;
    }
    if doc.has_meta_robots {
        points += 10;
    }

    let size_kib = doc.page_size_bytes / 1024;
    points += match size_kib {
        0..=99 => 20,
        100..=199 => 15,
        200..=299 => 10,
        300..=399 => 5,
        _ => 0,
    };
    points
}

fn static_accessibility(doc: &DocumentFeatures) -> u32 {
    let mut points = STATIC_ACCESSIBILITY_BASE + alt_accessibility_points(&doc.images);
    points += LANDMARK_POINTS * doc.landmarks.count() as u32;
    if doc.heading_structure.has_proper_heading_order {
        points += 15;
    }
    if doc.has_lang_attribute {
        points += 10;
    }
    points
}

fn static_best_practices(doc: &DocumentFeatures) -> u32 {
    let image_points = if doc.images.count > 0 { 10 } else { 0 };
    content_points(doc) + image_points
}

/// Root and www hosts +10, a single subdomain +5.
fn domain_form_points(form: DomainForm) -> u32 {
    match form {
        DomainForm::Root | DomainForm::WwwSubdomain => 10,
        DomainForm::Subdomain => 5,
        DomainForm::MultiLevelSubdomain | DomainForm::Other => 0,
    }
}

/// Technical score from URL structure alone.
pub(super) fn url_technical_score(url: &UrlFeatures) -> u32 {
    let mut points = 0;
    if url.https_protocol {
        points += 20;
    }
    points += domain_form_points(url.domain_structure);
    points += match url.path_depth {
        0 => 15,
        1 | 2 => 10,
        3 | 4 => 5,
        _ => 0,
    };
    if !url.has_query_params {
        points += 5;
    }
    points
}

pub(super) fn score_url_only(url: &UrlFeatures) -> CategoryScores {
    let technical = clamp_score(url_technical_score(url));
    let overall = f64::from(technical) * URL_ONLY_TECHNICAL_WEIGHT
        + f64::from(URL_ONLY_META_SCORE) * URL_ONLY_META_WEIGHT
        + f64::from(URL_ONLY_CONTENT_SCORE) * URL_ONLY_CONTENT_WEIGHT;

    CategoryScores {
        seo: URL_ONLY_META_SCORE,
        performance: technical,
        accessibility: URL_ONLY_ACCESSIBILITY_SCORE,
        best_practices: URL_ONLY_CONTENT_SCORE,
        overall: clamp_score(overall.round() as u32),
    }
}
