//! Page acquisition.
//!
//! Two collaborators produce the markup the extractors run on:
//! - [`HttpFetcher`]: a single GET through a shared `reqwest::Client`
//! - [`BrowserRenderer`]: a headless Chromium page on a mobile viewport
//!
//! Both implement [`PageSource`] so the analyzer can be driven by either one,
//! or by a stub in tests.

mod http;
mod probe;
mod render;
mod request;

use async_trait::async_trait;
use url::Url;

use crate::error_handling::AnalysisError;

pub use http::HttpFetcher;
pub use probe::{has_good_contrast, luminance, parse_rgb, RenderProbe};
pub use render::BrowserRenderer;
pub(crate) use request::RequestHeaders;

/// Markup and response facts captured for one URL.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    /// The normalized URL that was requested.
    pub requested_url: Url,
    /// URL after redirects; relative links resolve against it.
    pub final_url: Url,
    pub status: u16,
    pub body: String,
    /// Navigation start to network settle. Only the renderer measures it.
    pub load_time_ms: Option<u64>,
    /// Layout and colour facts read from the rendered page.
    pub probe: Option<RenderProbe>,
}

/// Produces markup for a URL.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, AnalysisError>;
}
