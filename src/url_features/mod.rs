//! URL normalization and structural feature extraction.
//!
//! Everything here is derived from the URL string alone; no network I/O.
//!
//! Key functions:
//! - `normalize_url()` - Adds `https://` when no http(s) scheme is present
//! - `validate_and_normalize_url()` - Normalizes and rejects anything that isn't an absolute http(s) URL
//! - `extract_url_features()` - Protocol, subdomain form, path depth, query and fragment presence

use log::{debug, warn};
use serde::{Serialize, Serializer};
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalysisError;

/// Classification of a hostname's subdomain structure by label count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainForm {
    /// Exactly two labels (`example.com`)
    Root,
    /// Three labels starting with `www`
    WwwSubdomain,
    /// Three labels otherwise (`blog.example.com`)
    Subdomain,
    /// More than three labels
    MultiLevelSubdomain,
    /// Single-label hosts and anything else
    Other,
}

impl DomainForm {
    /// Classifies a hostname. Pure function of label count and first label.
    pub fn classify(host: &str) -> Self {
        let labels: Vec<&str> = host.split('.').collect();
        match labels.len() {
            2 => DomainForm::Root,
            3 if labels[0] == "www" => DomainForm::WwwSubdomain,
            3 => DomainForm::Subdomain,
            n if n > 3 => DomainForm::MultiLevelSubdomain,
            _ => DomainForm::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainForm::Root => "Root Domain",
            DomainForm::WwwSubdomain => "WWW Subdomain",
            DomainForm::Subdomain => "Subdomain",
            DomainForm::MultiLevelSubdomain => "Multi-level Subdomain",
            DomainForm::Other => "Other",
        }
    }

    /// Root and www forms are the canonical shapes for a site's primary host.
    pub fn is_primary(&self) -> bool {
        matches!(self, DomainForm::Root | DomainForm::WwwSubdomain)
    }
}

impl std::fmt::Display for DomainForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DomainForm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Structural facts derived from a normalized URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlFeatures {
    pub https_protocol: bool,
    pub domain_has_www: bool,
    pub domain_structure: DomainForm,
    pub path_depth: usize,
    pub has_query_params: bool,
    pub has_fragment: bool,
}

/// Adds an `https://` prefix when the string has no http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Validates and normalizes a URL.
///
/// Adds `https://` if missing, then requires an absolute http(s) URL with a
/// host. Rejects URLs longer than `MAX_URL_LENGTH`.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` for empty, oversized, unparsable,
/// non-http(s), or host-less input.
pub fn validate_and_normalize_url(url: &str) -> Result<Url, AnalysisError> {
    if url.trim().is_empty() {
        return Err(AnalysisError::invalid_url(url, "URL is empty"));
    }

    let normalized = normalize_url(url);
    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return Err(AnalysisError::invalid_url(
            url,
            format!("URL exceeds {MAX_URL_LENGTH} characters"),
        ));
    }

    let parsed = Url::parse(&normalized).map_err(|e| {
        warn!("Rejecting invalid URL: {url}");
        AnalysisError::invalid_url(url, e.to_string())
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AnalysisError::invalid_url(
                url,
                format!("unsupported scheme '{other}'"),
            ))
        }
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(AnalysisError::invalid_url(url, "URL has no host")),
    }

    debug!("Normalized '{url}' to '{parsed}'");
    Ok(parsed)
}

/// Counts the non-empty `/`-separated segments of a path; `/` has depth 0.
pub fn path_depth(path: &str) -> usize {
    path.split('/').filter(|segment| !segment.is_empty()).count()
}

/// Derives `UrlFeatures` from a parsed URL. Never fails.
pub fn extract_url_features(url: &Url) -> UrlFeatures {
    let host = url.host_str().unwrap_or_default();
    UrlFeatures {
        https_protocol: url.scheme() == "https",
        domain_has_www: host.starts_with("www."),
        domain_structure: DomainForm::classify(host),
        path_depth: path_depth(url.path()),
        has_query_params: url.query().is_some_and(|q| !q.is_empty()),
        has_fragment: url.fragment().is_some_and(|f| !f.is_empty()),
    }
}

/// Normalizes, validates, and extracts features in one step.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` when the input cannot be normalized.
pub fn analyze_url_structure(url: &str) -> Result<UrlFeatures, AnalysisError> {
    let parsed = validate_and_normalize_url(url)?;
    Ok(extract_url_features(&parsed))
}
