//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_report` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Browser lifecycle for rendered runs
//! - User-facing output formatting and the exit code
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::warn;

use seo_report::app::{collect_urls, print_error_statistics, render_outcome, RunSummary};
use seo_report::initialization::init_logger_with;
use seo_report::{analyze_all, AnalysisMode, Analyzer, BrowserRenderer, Config, ReportIds};

#[tokio::main]
async fn main() {
    match run(Config::parse()).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("seo_report error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(config: Config) -> Result<i32> {
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let urls = collect_urls(&config).await?;
    if urls.is_empty() {
        bail!("No URLs given; pass them as arguments or with --file");
    }

    let analyzer = Analyzer::new(config.clone()).context("Failed to initialize HTTP client")?;
    let renderer = if config.mode == AnalysisMode::Rendered {
        let stats = Arc::clone(analyzer.stats());
        Some(Arc::new(
            BrowserRenderer::launch(&config, stats)
                .await
                .context("Failed to start headless browser")?,
        ))
    } else {
        None
    };
    let analyzer = match &renderer {
        Some(renderer) => analyzer.with_renderer(Arc::clone(renderer)),
        None => analyzer,
    };
    let analyzer = Arc::new(analyzer);

    let start = Instant::now();
    let total = urls.len();
    let outcomes = analyze_all(Arc::clone(&analyzer), urls, config.max_concurrency).await;

    let report_ids = ReportIds::new();
    for outcome in &outcomes {
        println!(
            "{}",
            render_outcome(outcome, config.output, &report_ids)
                .context("Failed to serialize result")?
        );
    }

    let summary = RunSummary::from_outcomes(total, &outcomes);
    summary.log(start.elapsed().as_secs_f64());
    print_error_statistics(analyzer.stats());

    drop(analyzer);
    if let Some(renderer) = renderer {
        match Arc::try_unwrap(renderer) {
            Ok(renderer) => renderer.shutdown().await,
            Err(_) => warn!("Browser still in use at exit; leaving it to the OS"),
        }
    }

    Ok(summary.exit_code())
}
