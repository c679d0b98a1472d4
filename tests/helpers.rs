// Shared test helpers for mock servers and analyzer setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use httptest::{matchers::*, responders::*, Expectation, Server};

use seo_report::{AnalysisMode, Analyzer, Config, LogFormat, LogLevel};

/// A page that passes most checks but has no canonical link or Open Graph tags.
#[allow(dead_code)] // Used by other test files
pub const PAGE_WITHOUT_SOCIAL_TAGS: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Acme Widgets: Durable Widgets for Every Workshop</title>
  <meta name="description" content="Acme builds durable widgets for workshops of every size, with free shipping and a lifetime warranty on all parts.">
  <link rel="icon" href="/favicon.ico">
</head>
<body>
  <main>
    <h1>Widgets</h1>
    <h2>Why Acme</h2>
    <p>Our widgets last for decades and come with a lifetime warranty.</p>
    <a href="/about">About us</a>
    <a href="https://partner.example.org/">Our partner</a>
    <img src="/widget.png" alt="A widget">
  </main>
</body>
</html>"#;

/// Creates a test config with quiet logging and short timeouts.
pub fn test_config(mode: AnalysisMode) -> Config {
    Config {
        mode,
        timeout_seconds: 5,
        max_concurrency: 2,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        user_agent: "seo_report-test/1.0".to_string(),
        ..Default::default()
    }
}

#[allow(dead_code)] // Used by other test files
pub fn test_analyzer(mode: AnalysisMode) -> Analyzer {
    Analyzer::new(test_config(mode)).expect("Failed to build analyzer")
}

/// Serves `body` as HTML at `path`, expecting exactly `times` requests.
#[allow(dead_code)] // Used by other test files
pub fn serve_html(server: &Server, path: &'static str, body: &'static str, times: usize) {
    server.expect(
        Expectation::matching(request::method_path("GET", path))
            .times(times)
            .respond_with(
                status_code(200)
                    .insert_header("Content-Type", "text/html; charset=utf-8")
                    .body(body),
            ),
    );
}
