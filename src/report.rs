//! Analysis results and the record shape handed to persistence layers.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{AnalysisMode, PRIORITY_FIX_COUNT};
use crate::error_handling::AnalysisError;
use crate::models::{FeatureSet, HeadingStructure, ImageStats, Landmarks, LinkCounts};
use crate::parse::schema_types;
use crate::recommendations::{degraded_recommendations, Level, Recommendation};
use crate::scoring::CategoryScores;
use crate::url_features::UrlFeatures;

/// Mobile fit as measured by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MobileViewport {
    /// `None` when not measurable (static analyses).
    pub renders: Option<bool>,
    pub responsive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    #[serde(flatten)]
    pub url: UrlFeatures,
    pub load_time_ms: Option<u64>,
    pub status_code: Option<u16>,
    pub page_size_bytes: Option<usize>,
    pub mobile_viewport: Option<MobileViewport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDetails {
    pub title: String,
    pub description: String,
    pub canonical: Option<String>,
    pub og_tags: BTreeMap<String, String>,
    pub schema: Vec<serde_json::Value>,
    /// Schema.org `@type` values declared in `schema`.
    pub schema_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub heading_structure: HeadingStructure,
    pub word_count: usize,
    pub paragraph_count: usize,
    pub link_count: LinkCounts,
    pub images: ImageStats,
    pub landmarks: Landmarks,
}

/// The facts behind the scores, grouped the way reports display them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetails {
    pub technical: TechnicalDetails,
    /// Absent for URL-only analyses.
    pub metadata: Option<MetadataDetails>,
    pub content: Option<ContentDetails>,
}

impl AnalysisDetails {
    pub fn from_features(features: &FeatureSet) -> Self {
        let url = features.url_features().clone();
        let Some(page) = features.page() else {
            return Self {
                technical: TechnicalDetails {
                    url,
                    load_time_ms: None,
                    status_code: None,
                    page_size_bytes: None,
                    mobile_viewport: None,
                },
                metadata: None,
                content: None,
            };
        };

        let doc = &page.document;
        Self {
            technical: TechnicalDetails {
                url,
                load_time_ms: doc.load_time_ms,
                status_code: Some(doc.status_code),
                page_size_bytes: Some(doc.page_size_bytes),
                mobile_viewport: Some(MobileViewport {
                    renders: doc.mobile_renders,
                    responsive: doc.has_viewport_meta,
                }),
            },
            metadata: Some(MetadataDetails {
                title: doc.title.clone(),
                description: doc.description.clone(),
                canonical: doc.canonical.clone(),
                og_tags: doc.og_tags.clone(),
                schema: doc.schema.clone(),
                schema_types: schema_types(&doc.schema),
            }),
            content: Some(ContentDetails {
                heading_structure: doc.heading_structure.clone(),
                word_count: doc.word_count,
                paragraph_count: doc.paragraph_count,
                link_count: doc.link_count,
                images: doc.images,
                landmarks: doc.landmarks,
            }),
        }
    }
}

/// The outcome of analyzing one URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The normalized URL.
    pub url: String,
    pub analyzed_at: DateTime<Utc>,
    pub mode: AnalysisMode,
    pub scores: CategoryScores,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<AnalysisDetails>,
    /// Set when the page could not be fetched or rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_error: Option<String>,
}

impl AnalysisResult {
    /// The fixed low-confidence result for a page that could not be analyzed.
    pub fn degraded(url: &str, mode: AnalysisMode, error: &AnalysisError) -> Self {
        Self {
            url: url.to_string(),
            analyzed_at: Utc::now(),
            mode,
            scores: CategoryScores::degraded(),
            recommendations: degraded_recommendations(),
            details: None,
            analysis_error: Some(error.to_string()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.analysis_error.is_some()
    }
}

/// A top recommendation as shown in a report's "fix first" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityFix {
    pub title: String,
    pub description: String,
    pub impact: Level,
    pub effort: Level,
}

/// What a persistence layer stores for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    /// `report_<unix millis>_<sequence>`
    pub report_id: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub scores: CategoryScores,
    pub recommendations: Vec<String>,
    pub priority_fixes: Vec<PriorityFix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<TechnicalDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_error: Option<String>,
}

impl ReportRecord {
    pub fn from_result(result: &AnalysisResult, ids: &ReportIds) -> Self {
        Self {
            report_id: ids.next_id(result.analyzed_at),
            url: result.url.clone(),
            created_at: result.analyzed_at,
            scores: result.scores,
            recommendations: result
                .recommendations
                .iter()
                .map(|r| r.text.clone())
                .collect(),
            priority_fixes: priority_fixes(&result.recommendations),
            technical: result.details.as_ref().map(|d| d.technical.clone()),
            analysis_error: result.analysis_error.clone(),
        }
    }
}

/// Issues report ids for one output stream.
///
/// Ids are unique per generator: the sequence keeps records created in the
/// same millisecond apart.
#[derive(Debug, Default)]
pub struct ReportIds {
    sequence: AtomicU64,
}

impl ReportIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// `report_<unix millis>_<sequence>`
    pub fn next_id(&self, at: DateTime<Utc>) -> String {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("report_{}_{sequence}", at.timestamp_millis())
    }
}

/// The first recommendations, the leading two marked high impact.
pub fn priority_fixes(recommendations: &[Recommendation]) -> Vec<PriorityFix> {
    recommendations
        .iter()
        .take(PRIORITY_FIX_COUNT)
        .enumerate()
        .map(|(index, rec)| PriorityFix {
            title: rec.title(),
            description: rec.text.clone(),
            impact: if index < 2 { Level::High } else { Level::Medium },
            effort: rec.tags.effort,
        })
        .collect()
}
