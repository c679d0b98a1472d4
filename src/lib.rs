//! seo_report library: page scoring and remediation advice
//!
//! This library fetches a page (plain HTTP or headless Chromium), extracts
//! the facts search engines and audit tools look at, and turns them into four
//! category scores (SEO, performance, accessibility, best practices), an
//! overall score, and an ordered list of tagged recommendations.
//!
//! # Example
//!
//! ```no_run
//! use seo_report::{AnalysisMode, Analyzer, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = Analyzer::new(Config {
//!     mode: AnalysisMode::Static,
//!     ..Default::default()
//! })?;
//!
//! let result = analyzer.analyze("example.com").await?;
//! println!("overall {}", result.scores.overall);
//! for rec in &result.recommendations {
//!     println!("- {}", rec.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Rendered analysis additionally
//! needs a Chromium binary, or a running instance reachable through
//! `CHROMIUM_REMOTE_DEBUGGING_URL`.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod recommendations;
pub mod report;
mod run;
pub mod scoring;
pub mod url_features;
mod utils;

// Re-export public API
pub use config::{AnalysisMode, Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{AnalysisError, FetchError, InitializationError, RenderError};
pub use fetch::{BrowserRenderer, FetchedPage, PageSource};
pub use models::{DocumentFeatures, FeatureSet, PageFeatures};
pub use recommendations::{Category, Level, Recommendation, RecommendationTags};
pub use report::{AnalysisResult, PriorityFix, ReportIds, ReportRecord};
pub use run::{analyze_all, analyze_features, Analyzer, UrlOutcome};
pub use scoring::CategoryScores;
pub use url_features::{analyze_url_structure, UrlFeatures};
