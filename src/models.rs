//! Feature models shared by the extractors, the score calculator, and the
//! recommendation generator.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::AnalysisMode;
use crate::url_features::UrlFeatures;

/// Heading counts per level plus the derived order flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingStructure {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub h4_count: usize,
    pub h5_count: usize,
    pub h6_count: usize,
    /// First heading is h1 and no later heading skips a level downwards.
    pub has_proper_heading_order: bool,
}

impl HeadingStructure {
    /// Builds counts and the order flag from heading levels in document order.
    pub fn from_levels(levels: &[u8]) -> Self {
        let count = |level: u8| levels.iter().filter(|&&l| l == level).count();
        Self {
            h1_count: count(1),
            h2_count: count(2),
            h3_count: count(3),
            h4_count: count(4),
            h5_count: count(5),
            h6_count: count(6),
            has_proper_heading_order: has_proper_heading_order(levels),
        }
    }

    pub fn other_headings_count(&self) -> usize {
        self.h4_count + self.h5_count + self.h6_count
    }
}

/// A page without headings: all counts zero, order trivially proper.
impl Default for HeadingStructure {
    fn default() -> Self {
        Self::from_levels(&[])
    }
}

/// Checks that headings start at level 1 and never jump more than one level deeper.
///
/// A page without headings is considered ordered.
pub fn has_proper_heading_order(levels: &[u8]) -> bool {
    let mut previous: Option<u8> = None;
    for &level in levels {
        match previous {
            None if level != 1 => return false,
            Some(prev) if level > prev && level - prev > 1 => return false,
            _ => {}
        }
        previous = Some(level);
    }
    true
}

/// Internal/external anchor counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
}

/// Image alt-text coverage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStats {
    pub count: usize,
    pub with_alt: usize,
    pub without_alt: usize,
}

impl ImageStats {
    /// Share of images with non-blank alt text; a page without images has full coverage.
    pub fn alt_coverage(&self) -> f64 {
        if self.count == 0 {
            1.0
        } else {
            self.with_alt as f64 / self.count as f64
        }
    }
}

/// ARIA landmark presence, by element or explicit role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Landmarks {
    /// `<main>` or `role="main"`.
    pub main: bool,
    /// `<nav>` or `role="navigation"`.
    pub nav: bool,
    /// `<header>` or `role="banner"`.
    pub header: bool,
    /// `<footer>` or `role="contentinfo"`.
    pub footer: bool,
}

impl Landmarks {
    pub fn count(&self) -> usize {
        [self.main, self.nav, self.header, self.footer]
            .into_iter()
            .filter(|&present| present)
            .count()
    }
}

/// Content facts extracted from fetched or rendered markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFeatures {
    pub title: String,
    pub description: String,
    pub canonical: Option<String>,
    pub og_tags: BTreeMap<String, String>,
    pub schema: Vec<serde_json::Value>,
    /// Schema.org microdata (`itemscope` or `itemtype`) appears in the markup.
    pub has_microdata: bool,
    pub heading_structure: HeadingStructure,
    pub word_count: usize,
    pub paragraph_count: usize,
    pub link_count: LinkCounts,
    pub images: ImageStats,
    pub has_viewport_meta: bool,
    /// Viewport meta declares `width=device-width`.
    pub viewport_device_width: bool,
    pub has_charset_meta: bool,
    pub has_meta_robots: bool,
    pub has_lang_attribute: bool,
    pub has_favicon: bool,
    pub landmarks: Landmarks,
    pub unlabeled_form_fields: usize,
    pub page_size_bytes: usize,
    /// Navigation start to network settle; only measured when rendering.
    pub load_time_ms: Option<u64>,
    pub status_code: u16,
    /// Page width fits the mobile viewport; `None` when not measurable.
    pub mobile_renders: Option<bool>,
    /// Dark paragraph text on a light body background; `None` when not measurable.
    pub good_contrast: Option<bool>,
}

impl DocumentFeatures {
    /// Title length in characters.
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    /// Description length in characters.
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    pub fn og_tag_count(&self) -> usize {
        self.og_tags.len()
    }
}

/// URL and document facts for one fetched page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFeatures {
    pub url: UrlFeatures,
    pub document: DocumentFeatures,
}

/// The facts an analysis produced, tagged by how they were obtained.
///
/// Scoring and recommendations dispatch on this single type so the point
/// tables of the different modes live side by side.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureSet {
    UrlOnly(UrlFeatures),
    Static(PageFeatures),
    Rendered(PageFeatures),
}

impl FeatureSet {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            FeatureSet::UrlOnly(_) => AnalysisMode::UrlOnly,
            FeatureSet::Static(_) => AnalysisMode::Static,
            FeatureSet::Rendered(_) => AnalysisMode::Rendered,
        }
    }

    pub fn url_features(&self) -> &UrlFeatures {
        match self {
            FeatureSet::UrlOnly(url) => url,
            FeatureSet::Static(page) | FeatureSet::Rendered(page) => &page.url,
        }
    }

    pub fn page(&self) -> Option<&PageFeatures> {
        match self {
            FeatureSet::UrlOnly(_) => None,
            FeatureSet::Static(page) | FeatureSet::Rendered(page) => Some(page),
        }
    }
}
