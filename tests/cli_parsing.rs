//! Tests for command-line parsing into `Config`.

use clap::Parser;
use seo_report::{AnalysisMode, Config, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["seo_report", "example.com"]).expect("parses");
    assert_eq!(config.urls, vec!["example.com".to_string()]);
    assert_eq!(config.mode, AnalysisMode::Static);
    assert_eq!(config.output, OutputFormat::Pretty);
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.render_timeout_seconds, 30);
    assert!(config.file.is_none());
}

#[test]
fn test_mode_and_output_values() {
    let config = Config::try_parse_from([
        "seo_report",
        "--mode",
        "url-only",
        "--output",
        "jsonl",
        "a.example.com",
        "b.example.com",
    ])
    .expect("parses");
    assert_eq!(config.mode, AnalysisMode::UrlOnly);
    assert_eq!(config.output, OutputFormat::Jsonl);
    assert_eq!(config.urls.len(), 2);

    let config = Config::try_parse_from(["seo_report", "--mode", "rendered", "x.com"]).expect("parses");
    assert_eq!(config.mode, AnalysisMode::Rendered);
}

#[test]
fn test_file_and_limits() {
    let config = Config::try_parse_from([
        "seo_report",
        "--file",
        "-",
        "--max-concurrency",
        "8",
        "--timeout-seconds",
        "3",
        "--render-timeout-seconds",
        "12",
        "--user-agent",
        "audit-bot/2.0",
    ])
    .expect("parses");
    assert_eq!(config.file, Some(PathBuf::from("-")));
    assert_eq!(config.max_concurrency, 8);
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.render_timeout_seconds, 12);
    assert_eq!(config.user_agent, "audit-bot/2.0");
    assert!(config.urls.is_empty());
}

#[test]
fn test_invalid_mode_rejected() {
    let err = Config::try_parse_from(["seo_report", "--mode", "lighthouse", "x.com"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn test_invalid_log_format_rejected() {
    let err = Config::try_parse_from(["seo_report", "--log-format", "xml", "x.com"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}
