//! Browser-like request headers.

/// Headers sent with every static fetch so servers return the same markup a
/// desktop browser would get.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    const ACCEPT: &'static str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
    const ACCEPT_LANGUAGE: &'static str = "en-US,en;q=0.9";

    /// Headers as `(name, value)` pairs, for logging.
    pub(crate) fn as_vec() -> Vec<(&'static str, &'static str)> {
        vec![
            ("accept", Self::ACCEPT),
            ("accept-language", Self::ACCEPT_LANGUAGE),
            ("cache-control", "no-cache"),
            ("upgrade-insecure-requests", "1"),
        ]
    }

    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, Self::ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}
