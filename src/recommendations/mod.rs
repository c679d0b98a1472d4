//! Recommendation generation.
//!
//! [`generate_recommendations`] turns a [`FeatureSet`] into an ordered list of
//! remediation messages. Order is priority order: feature-derived rules come
//! first in a fixed sequence, then (when there are few of them) generic tips.
//! The list is capped at `MAX_RECOMMENDATIONS`.

mod rules;
mod tags;
mod tips;

use serde::Serialize;

use crate::config::{MAX_RECOMMENDATIONS, MIN_FEATURE_RECOMMENDATIONS};
use crate::models::FeatureSet;
use rules::Variant;

pub use tags::{classify_text, Category, Level, RecommendationTags};

/// Shown when a page could not be fetched or rendered.
pub const DEGRADED_MESSAGES: [&str; 4] = [
    "We couldn't fully analyze your website. Please ensure it's publicly accessible.",
    "Check that your URL is correct and the site is online.",
    "Make sure your website allows robots to crawl it.",
    "Try again later or contact support if the problem persists.",
];

/// A remediation message and its tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub text: String,
    #[serde(flatten)]
    pub tags: RecommendationTags,
}

impl Recommendation {
    pub fn new(text: impl Into<String>, tags: RecommendationTags) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    /// Wraps free text, inferring tags from keywords.
    pub fn from_text(text: impl Into<String>, index: usize) -> Self {
        let text = text.into();
        let tags = classify_text(&text, index);
        Self { text, tags }
    }

    /// First sentence of the text, used as a short heading.
    pub fn title(&self) -> String {
        match self.text.split_once('.') {
            Some((head, _)) => format!("{head}."),
            None => format!("{}.", self.text),
        }
    }
}

/// Generates recommendations for a feature set. Pure and deterministic.
pub fn generate_recommendations(features: &FeatureSet) -> Vec<Recommendation> {
    let (mut recommendations, with_tips) = match features {
        FeatureSet::UrlOnly(url) => (rules::url_rules(url), true),
        FeatureSet::Static(page) => {
            let found = rules::document_rules(page, Variant::Static);
            let few = found.len() < MIN_FEATURE_RECOMMENDATIONS;
            (found, few)
        }
        FeatureSet::Rendered(page) => {
            let found = rules::document_rules(page, Variant::Rendered);
            let few = found.len() < MIN_FEATURE_RECOMMENDATIONS;
            (found, few)
        }
    };

    if with_tips {
        let document = features.page().map(|page| &page.document);
        let extra = tips::generic_tips(&recommendations, document);
        recommendations.extend(extra);
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// The fixed messages of a degraded result, tagged by keyword.
pub fn degraded_recommendations() -> Vec<Recommendation> {
    DEGRADED_MESSAGES
        .iter()
        .enumerate()
        .map(|(index, text)| Recommendation::from_text(*text, index))
        .collect()
}
