//! Concurrent analysis of several URLs.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use log::{info, warn};

use crate::error_handling::AnalysisError;
use crate::initialization::init_semaphore;
use crate::report::AnalysisResult;

use super::Analyzer;

/// The outcome for one input, in input order.
#[derive(Debug, Clone)]
pub struct UrlOutcome {
    /// The URL as given, before normalization.
    pub input: String,
    pub result: Result<AnalysisResult, AnalysisError>,
}

/// Analyzes `urls` with at most `max_concurrency` in flight.
///
/// Outcomes come back in input order. A task that panics is logged and
/// left out of the returned list.
pub async fn analyze_all(
    analyzer: Arc<Analyzer>,
    urls: Vec<String>,
    max_concurrency: usize,
) -> Vec<UrlOutcome> {
    let total = urls.len();
    let semaphore = init_semaphore(max_concurrency);
    let mut tasks = FuturesUnordered::new();

    for (index, input) in urls.into_iter().enumerate() {
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(e) => {
                warn!("Semaphore closed, stopping after {index} of {total} URLs: {e}");
                break;
            }
        };
        let analyzer = Arc::clone(&analyzer);
        tasks.push(tokio::spawn(async move {
            let _permit = permit;
            let result = analyzer.analyze(&input).await;
            (index, UrlOutcome { input, result })
        }));
    }

    let mut outcomes = Vec::with_capacity(total);
    while let Some(task_result) = tasks.next().await {
        match task_result {
            Ok((index, outcome)) => {
                log_outcome(&outcome);
                outcomes.push((index, outcome));
            }
            Err(join_error) => warn!("Task panicked: {join_error:?}"),
        }
    }

    outcomes.sort_by_key(|(index, _)| *index);
    info!("Analyzed {} of {total} URLs", outcomes.len());
    outcomes.into_iter().map(|(_, outcome)| outcome).collect()
}

fn log_outcome(outcome: &UrlOutcome) {
    match &outcome.result {
        Ok(result) if result.is_degraded() => {
            info!("{}: default scores (page could not be analyzed)", result.url)
        }
        Ok(result) => info!(
            "{}: overall {} (seo {}, performance {}, accessibility {}, best practices {})",
            result.url,
            result.scores.overall,
            result.scores.seo,
            result.scores.performance,
            result.scores.accessibility,
            result.scores.best_practices
        ),
        Err(e) => warn!("{}: {e}", outcome.input),
    }
}
