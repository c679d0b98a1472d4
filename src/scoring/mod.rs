//! Score calculation.
//!
//! [`compute_scores`] maps a [`FeatureSet`] to four category scores and a
//! weighted overall score. Each analysis mode has its own point table:
//! - `Rendered`: the canonical table, fed by a headless browser
//! - `Static`: raw-HTML table with fixed baseline points for unmeasurable factors
//! - `UrlOnly`: URL structure only, weighted technical/meta/content
//!
//! Scoring is pure and never fails; every category is clamped to `0..=100`.

mod legacy;
mod rendered;

use serde::Serialize;

use crate::config::DEGRADED_CATEGORY_SCORE;
use crate::models::{DocumentFeatures, FeatureSet, ImageStats};

/// Category weights for the overall score of document analyses.
const SEO_WEIGHT: f64 = 0.30;
const PERFORMANCE_WEIGHT: f64 = 0.30;
const ACCESSIBILITY_WEIGHT: f64 = 0.20;
const BEST_PRACTICES_WEIGHT: f64 = 0.20;

/// Scores for one analysis, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub seo: u8,
    pub performance: u8,
    pub accessibility: u8,
    pub best_practices: u8,
    pub overall: u8,
}

impl CategoryScores {
    /// Clamps raw category sums and derives the overall score from the
    /// document-analysis weights.
    pub fn from_categories(seo: u32, performance: u32, accessibility: u32, best_practices: u32) -> Self {
        let seo = clamp_score(seo);
        let performance = clamp_score(performance);
        let accessibility = clamp_score(accessibility);
        let best_practices = clamp_score(best_practices);
        let overall = f64::from(seo) * SEO_WEIGHT
            + f64::from(performance) * PERFORMANCE_WEIGHT
            + f64::from(accessibility) * ACCESSIBILITY_WEIGHT
            + f64::from(best_practices) * BEST_PRACTICES_WEIGHT;
        Self {
            seo,
            performance,
            accessibility,
            best_practices,
            overall: clamp_score(overall.round() as u32),
        }
    }

    /// The fixed result used when a page could not be fetched or rendered.
    pub fn degraded() -> Self {
        Self {
            seo: DEGRADED_CATEGORY_SCORE,
            performance: DEGRADED_CATEGORY_SCORE,
            accessibility: DEGRADED_CATEGORY_SCORE,
            best_practices: DEGRADED_CATEGORY_SCORE,
            overall: DEGRADED_CATEGORY_SCORE,
        }
    }
}

/// Computes category scores with the point table of the feature set's mode.
pub fn compute_scores(features: &FeatureSet) -> CategoryScores {
    match features {
        FeatureSet::Rendered(page) => rendered::score(page),
        FeatureSet::Static(page) => legacy::score_static(page),
        FeatureSet::UrlOnly(url) => legacy::score_url_only(url),
    }
}

pub(crate) fn clamp_score(points: u32) -> u8 {
    points.min(100) as u8
}

// Point helpers shared by the document tables.

/// Open Graph: three or more tags +10, any +5.
fn open_graph_points(doc: &DocumentFeatures) -> u32 {
    match doc.og_tag_count() {
        0 => 0,
        1 | 2 => 5,
        _ => 10,
    }
}

/// Exactly one h1 +10, several +5.
fn h1_points(doc: &DocumentFeatures) -> u32 {
    match doc.heading_structure.h1_count {
        0 => 0,
        1 => 10,
        _ => 5,
    }
}

/// Accessibility credit for alt coverage; a page without images gets full credit.
fn alt_accessibility_points(images: &ImageStats) -> u32 {
    let coverage = images.alt_coverage();
    if coverage >= 1.0 {
        20
    } else if coverage >= 0.8 {
        15
    } else if coverage >= 0.5 {
        10
    } else if coverage > 0.0 {
        5
    } else {
        0
    }
}

/// Words, heading structure, paragraphs, and links.
fn content_points(doc: &DocumentFeatures) -> u32 {
    let mut points = 0;

    points += if doc.word_count >= 600 {
        20
    } else if doc.word_count >= 300 {
        10
    } else {
        0
    };

    let headings = &doc.heading_structure;
    if headings.h2_count > 0 {
        points += if headings.has_proper_heading_order { 20 } else { 10 };
    }

    points += match doc.paragraph_count {
        0 => 0,
        1..=4 => 5,
        _ => 10,
    };

    let links = doc.link_count;
    points += match (links.internal > 0, links.external > 0) {
        (true, true) => 20,
        (true, false) | (false, true) => 10,
        (false, false) => 0,
    };

    points
}
