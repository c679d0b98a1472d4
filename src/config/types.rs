//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::constants::{
    DEFAULT_RENDER_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, SEMAPHORE_LIMIT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How much of the page an analysis looks at.
///
/// `Rendered` is the canonical formula. `Static` and `UrlOnly` are kept for
/// callers that cannot run a browser or must not touch the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMode {
    /// URL structure only, no network I/O
    UrlOnly,
    /// Raw HTML fetched over HTTP, no script execution
    Static,
    /// Headless Chromium with a mobile viewport
    Rendered,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::UrlOnly => "url-only",
            AnalysisMode::Static => "static",
            AnalysisMode::Rendered => "rendered",
        }
    }
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the CLI prints results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Pretty,
    /// One pretty-printed JSON document per URL
    Json,
    /// One compact JSON record per line
    Jsonl,
}

/// Library configuration, also parsed from the command line by the binary.
///
/// # Examples
///
/// ```no_run
/// use seo_report::{AnalysisMode, Config};
///
/// let config = Config {
///     mode: AnalysisMode::Static,
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seo_report",
    about = "Fetch a page and score its SEO, performance, accessibility and best practices"
)]
pub struct Config {
    /// URLs to analyze (a missing scheme defaults to https://)
    pub urls: Vec<String>,

    /// File with one URL per line ('-' for stdin); blank lines and '#' comments are skipped
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Analysis mode
    #[arg(long, value_enum, default_value_t = AnalysisMode::Static)]
    pub mode: AnalysisMode,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,

    /// Maximum URLs analyzed at the same time
    #[arg(long, default_value_t = SEMAPHORE_LIMIT)]
    pub max_concurrency: usize,

    /// HTTP fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Headless render timeout in seconds
    #[arg(long, default_value_t = DEFAULT_RENDER_TIMEOUT_SECS)]
    pub render_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Connect to an already running Chrome (DevTools websocket URL) instead of launching one
    #[arg(long, env = "CHROMIUM_REMOTE_DEBUGGING_URL")]
    pub chrome_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            file: None,
            mode: AnalysisMode::Static,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Pretty,
            max_concurrency: SEMAPHORE_LIMIT,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            render_timeout_seconds: DEFAULT_RENDER_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            chrome_url: None,
        }
    }
}
