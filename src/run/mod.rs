//! Analysis orchestration.
//!
//! [`Analyzer`] runs one URL through the pipeline for a given mode:
//! validate, acquire markup, extract features, score, recommend. Fetch and
//! render failures never surface as errors; they become the degraded result.
//! [`analyze_all`] drives several URLs concurrently.

mod batch;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};
use url::Url;

use crate::config::{AnalysisMode, Config};
use crate::error_handling::{
    AnalysisError, InfoType, InitializationError, ProcessingStats, RenderError, RenderErrorKind,
};
use crate::fetch::{BrowserRenderer, FetchedPage, HttpFetcher, PageSource};
use crate::initialization::init_client;
use crate::models::{DocumentFeatures, FeatureSet, PageFeatures};
use crate::parse::extract_document_features;
use crate::recommendations::generate_recommendations;
use crate::report::{AnalysisDetails, AnalysisResult};
use crate::scoring::compute_scores;
use crate::url_features::{extract_url_features, validate_and_normalize_url};

pub use batch::{analyze_all, UrlOutcome};

/// Scores pages. Cheap to share behind an `Arc`; all state is read-only
/// apart from the atomic counters in [`ProcessingStats`].
pub struct Analyzer {
    config: Config,
    stats: Arc<ProcessingStats>,
    sources: HashMap<AnalysisMode, Arc<dyn PageSource>>,
}

impl Analyzer {
    /// Builds the HTTP client and registers it as the static page source.
    ///
    /// Rendered analysis needs a browser; see [`Analyzer::with_renderer`].
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let stats = Arc::new(ProcessingStats::new());
        let client = init_client(&config)?;
        let fetcher: Arc<dyn PageSource> =
            Arc::new(HttpFetcher::new(client, Arc::clone(&stats)));

        let mut sources = HashMap::new();
        sources.insert(AnalysisMode::Static, fetcher);
        Ok(Self {
            config,
            stats,
            sources,
        })
    }

    /// Uses `renderer` for [`AnalysisMode::Rendered`].
    pub fn with_renderer(self, renderer: Arc<BrowserRenderer>) -> Self {
        self.with_source(AnalysisMode::Rendered, renderer)
    }

    /// Replaces the page source used for `mode`. `UrlOnly` never fetches, so a
    /// source registered for it is ignored.
    pub fn with_source(mut self, mode: AnalysisMode, source: Arc<dyn PageSource>) -> Self {
        self.sources.insert(mode, source);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Analyzes `url` in the configured mode.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_with_mode(url, self.config.mode).await
    }

    /// Analyzes `url` in `mode`.
    ///
    /// # Errors
    ///
    /// Only [`AnalysisError::InvalidUrl`]. A page that cannot be fetched or
    /// rendered yields `Ok` with the degraded result and `analysis_error` set.
    pub async fn analyze_with_mode(
        &self,
        url: &str,
        mode: AnalysisMode,
    ) -> Result<AnalysisResult, AnalysisError> {
        let parsed = validate_and_normalize_url(url)?;
        let url_features = extract_url_features(&parsed);

        if mode == AnalysisMode::UrlOnly {
            return Ok(analyze_features(parsed.as_str(), FeatureSet::UrlOnly(url_features)));
        }

        let page = match self.fetch(&parsed, mode).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Falling back to default scores for {parsed} ({mode}): {e}");
                self.stats.increment_info(InfoType::DegradedResult);
                return Ok(AnalysisResult::degraded(parsed.as_str(), mode, &e));
            }
        };

        debug!(
            "Fetched {} (final {}, status {}, {} bytes)",
            page.requested_url,
            page.final_url,
            page.status,
            page.body.len()
        );

        let page_features = PageFeatures {
            url: url_features,
            document: self.document_features(&page),
        };
        let features = match mode {
            AnalysisMode::Rendered => FeatureSet::Rendered(page_features),
            _ => FeatureSet::Static(page_features),
        };
        Ok(analyze_features(parsed.as_str(), features))
    }

    async fn fetch(&self, url: &Url, mode: AnalysisMode) -> Result<FetchedPage, AnalysisError> {
        match self.sources.get(&mode) {
            Some(source) => source.fetch_page(url).await,
            None => Err(RenderError::new(
                RenderErrorKind::Launch,
                format!("no page source configured for {mode} analysis"),
            )
            .into()),
        }
    }

    fn document_features(&self, page: &FetchedPage) -> DocumentFeatures {
        let mut document = extract_document_features(&page.body, &page.final_url, &self.stats);
        document.status_code = page.status;
        document.load_time_ms = page.load_time_ms;
        if let Some(probe) = &page.probe {
            document.mobile_renders = Some(probe.fits_viewport());
            document.good_contrast = Some(probe.good_contrast());
        }
        document
    }
}

/// Assembles a result from already-extracted features. Pure apart from the timestamp.
pub fn analyze_features(url: &str, features: FeatureSet) -> AnalysisResult {
    AnalysisResult {
        url: url.to_string(),
        analyzed_at: Utc::now(),
        mode: features.mode(),
        scores: compute_scores(&features),
        recommendations: generate_recommendations(&features),
        details: Some(AnalysisDetails::from_features(&features)),
        analysis_error: None,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
