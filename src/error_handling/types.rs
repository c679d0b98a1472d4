//! Error type definitions.
//!
//! This module defines the error enums returned by the library and the error,
//! warning, and info categories tracked by `ProcessingStats`.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error launching or connecting to the headless browser.
    #[error("Browser initialization error: {0}")]
    BrowserError(String),
}

/// Errors surfaced by an analysis.
///
/// Only `InvalidUrl` ever leaves `Analyzer::analyze`; fetch and render
/// failures are turned into the degraded default result there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input could not be normalized into an absolute http(s) URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The page could not be fetched over HTTP.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page could not be rendered in the headless browser.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AnalysisError {
    pub(crate) fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/// Broad cause of a failed HTTP fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Timeout,
    Connect,
    /// Non-success status without a body to analyze.
    Status(u16),
    Redirect,
    Body,
    Other,
}

/// A failed HTTP fetch, tagged with its cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Fetch failed ({kind:?}): {message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Broad cause of a failed headless render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderErrorKind {
    /// Opening the page or applying the viewport failed.
    Launch,
    Navigation,
    Timeout,
    /// A script evaluated in the page failed or returned an unexpected shape.
    Evaluation,
    /// The rendered DOM could not be captured.
    Snapshot,
}

/// A failed headless render, tagged with its cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Render failed ({kind:?}): {message}")]
pub struct RenderError {
    pub kind: RenderErrorKind,
    pub message: String,
}

impl RenderError {
    pub fn new(kind: RenderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Types of errors that can occur while fetching or rendering a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Headless rendering errors
    RenderLaunchError,
    RenderNavigationError,
    RenderTimeoutError,
    RenderEvaluationError,
    RenderSnapshotError,
}

/// Types of warnings that can occur while extracting features.
///
/// Warnings mark a feature that was treated as absent; they never stop an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum WarningType {
    MissingTitle,
    MissingMetaDescription,
    MissingCanonical,
    MissingBody,
    InvalidJsonLd,
    UnresolvableLink,
    MissingRenderProbe,
}

/// Types of informational metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    HttpRedirect,
    NonSuccessStatus,
    TruncatedBody,
    DegradedResult,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::RenderLaunchError => "Render launch error",
            ErrorType::RenderNavigationError => "Render navigation error",
            ErrorType::RenderTimeoutError => "Render timeout error",
            ErrorType::RenderEvaluationError => "Render evaluation error",
            ErrorType::RenderSnapshotError => "Render snapshot error",
        }
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingMetaDescription => "Missing meta description",
            WarningType::MissingCanonical => "Missing canonical link",
            WarningType::MissingBody => "Missing body element",
            WarningType::InvalidJsonLd => "Invalid JSON-LD block",
            WarningType::UnresolvableLink => "Unresolvable link",
            WarningType::MissingRenderProbe => "Missing render probe",
        }
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HttpRedirect => "HTTP redirect",
            InfoType::NonSuccessStatus => "Non-success status analyzed",
            InfoType::TruncatedBody => "Response body truncated",
            InfoType::DegradedResult => "Degraded result returned",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(
            ErrorType::HttpRequestTimeoutError.as_str(),
            "HTTP request timeout error"
        );
        assert_eq!(ErrorType::RenderTimeoutError.as_str(), "Render timeout error");
    }

    #[test]
    fn test_all_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(!error_type.as_str().is_empty(), "{:?}", error_type);
        }
        for warning_type in WarningType::iter() {
            assert!(!warning_type.as_str().is_empty(), "{:?}", warning_type);
        }
        for info_type in InfoType::iter() {
            assert!(!info_type.as_str().is_empty(), "{:?}", info_type);
        }
    }

    #[test]
    fn test_analysis_error_display() {
        let err = AnalysisError::invalid_url("not a url", "relative URL without a base");
        assert_eq!(
            err.to_string(),
            "Invalid URL 'not a url': relative URL without a base"
        );

        let err = AnalysisError::from(FetchError::new(FetchErrorKind::Timeout, "timed out"));
        assert_eq!(err.to_string(), "Fetch failed (Timeout): timed out");

        let err = AnalysisError::from(RenderError::new(RenderErrorKind::Navigation, "net::ERR"));
        assert_eq!(err.to_string(), "Render failed (Navigation): net::ERR");
    }

    #[test]
    fn test_fetch_status_kind_carries_code() {
        let err = FetchError::new(FetchErrorKind::Status(503), "empty body");
        assert_eq!(err.kind, FetchErrorKind::Status(503));
        assert!(err.to_string().contains("Status(503)"));
    }
}
