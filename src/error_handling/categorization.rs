//! Error categorization.
//!
//! Maps low-level `reqwest` failures and render failures onto the tagged
//! `FetchError`/`RenderError` values and the `ErrorType` counters.

use super::stats::ProcessingStats;
use super::types::{ErrorType, FetchError, FetchErrorKind, RenderError, RenderErrorKind};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Converts a `reqwest::Error` into a tagged `FetchError`.
pub fn fetch_error_from_reqwest(error: &reqwest::Error) -> FetchError {
    let kind = match categorize_reqwest_error(error) {
        ErrorType::HttpRequestTimeoutError => FetchErrorKind::Timeout,
        ErrorType::HttpRequestConnectError => FetchErrorKind::Connect,
        ErrorType::HttpRequestRedirectError => FetchErrorKind::Redirect,
        ErrorType::HttpRequestBodyError | ErrorType::HttpRequestDecodeError => FetchErrorKind::Body,
        ErrorType::HttpRequestStatusError => error
            .status()
            .map(|s| FetchErrorKind::Status(s.as_u16()))
            .unwrap_or(FetchErrorKind::Other),
        _ => FetchErrorKind::Other,
    };
    FetchError::new(kind, error.to_string())
}

/// The counter a tagged fetch failure is recorded under.
pub fn error_type_for_fetch(error: &FetchError) -> ErrorType {
    match error.kind {
        FetchErrorKind::Timeout => ErrorType::HttpRequestTimeoutError,
        FetchErrorKind::Connect => ErrorType::HttpRequestConnectError,
        FetchErrorKind::Status(_) => ErrorType::HttpRequestStatusError,
        FetchErrorKind::Redirect => ErrorType::HttpRequestRedirectError,
        FetchErrorKind::Body => ErrorType::HttpRequestBodyError,
        FetchErrorKind::Other => ErrorType::HttpRequestOtherError,
    }
}

/// The counter a tagged render failure is recorded under.
pub fn error_type_for_render(error: &RenderError) -> ErrorType {
    match error.kind {
        RenderErrorKind::Launch => ErrorType::RenderLaunchError,
        RenderErrorKind::Navigation => ErrorType::RenderNavigationError,
        RenderErrorKind::Timeout => ErrorType::RenderTimeoutError,
        RenderErrorKind::Evaluation => ErrorType::RenderEvaluationError,
        RenderErrorKind::Snapshot => ErrorType::RenderSnapshotError,
    }
}

/// Records a fetch failure in the statistics tracker.
pub fn update_fetch_error_stats(stats: &ProcessingStats, error: &FetchError) {
    stats.increment_error(error_type_for_fetch(error));
}

/// Records a render failure in the statistics tracker.
pub fn update_render_error_stats(stats: &ProcessingStats, error: &RenderError) {
    stats.increment_error(error_type_for_render(error));
}
