//! Error handling and processing statistics.
//!
//! This module provides:
//! - Library error types (`AnalysisError`, `FetchError`, `RenderError`, `InitializationError`)
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Categorization of `reqwest` and render failures
//!
//! Statistics are categorized into:
//! - **Errors**: Fetch or render failures that forced a degraded result
//! - **Warnings**: Features that could not be extracted and were treated as absent
//! - **Info**: Notable events (redirects, truncated bodies, degraded results)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_reqwest_error, error_type_for_fetch, error_type_for_render,
    fetch_error_from_reqwest, update_fetch_error_stats, update_render_error_stats,
};
pub use stats::ProcessingStats;
pub use types::{
    AnalysisError, ErrorType, FetchError, FetchErrorKind, InfoType, InitializationError,
    RenderError, RenderErrorKind, WarningType,
};
