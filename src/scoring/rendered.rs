//! Point table for pages rendered in a headless browser.

use super::{
    alt_accessibility_points, content_points, h1_points, open_graph_points, CategoryScores,
};
use crate::models::{DocumentFeatures, PageFeatures};
use crate::url_features::UrlFeatures;

pub(super) fn score(page: &PageFeatures) -> CategoryScores {
    CategoryScores::from_categories(
        seo(&page.document),
        performance(&page.url, &page.document),
        accessibility(&page.document),
        best_practices(&page.document),
    )
}

fn seo(doc: &DocumentFeatures) -> u32 {
    let mut points = 0;

    points += match doc.title_len() {
        0 => 0,
        30..=60 => 20,
        _ => 10,
    };
    points += match doc.description_len() {
        0 => 0,
        120..=160 => 20,
        _ => 10,
    };
    if doc.canonical.is_some() {
        points += 10;
    }
    points += open_graph_points(doc);
    if !doc.schema.is_empty() {
        points += 10;
    }
    points + h1_points(doc)
}

fn performance(url: &UrlFeatures, doc: &DocumentFeatures) -> u32 {
    let mut points = 0;

    if url.https_protocol {
        points += 15;
    }
    if url.domain_structure.is_primary() {
        points += 5;
    }
    if url.path_depth <= 3 {
        points += 5;
    }
    if !url.has_query_params {
        points += 5;
    }
    points += match doc.load_time_ms {
        Some(ms) if ms < 1000 => 25,
        Some(ms) if ms < 2000 => 20,
        Some(ms) if ms < 3000 => 15,
        Some(ms) if ms < 5000 => 10,
        Some(ms) if ms < 8000 => 5,
        _ => 0,
    };
    if doc.status_code == 200 {
        points += 15;
    }

    let responsive = doc.has_viewport_meta;
    let renders = doc.mobile_renders.unwrap_or(false);
    points += match (responsive, renders) {
        (true, true) => 15,
        (true, false) => 10,
        (false, true) => 5,
        (false, false) => 0,
    };
    points
}

fn accessibility(doc: &DocumentFeatures) -> u32 {
    let mut points = 50 + alt_accessibility_points(&doc.images);
    if doc.heading_structure.has_proper_heading_order {
        points += 15;
    }
    if doc.good_contrast.unwrap_or(false) {
        points += 15;
    }
    points
}

fn best_practices(doc: &DocumentFeatures) -> u32 {
    let coverage = doc.images.alt_coverage();
    let alt_points = if coverage >= 0.8 {
        20
    } else if coverage > 0.0 {
        10
    } else {
        0
    };
    content_points(doc) + alt_points
}
