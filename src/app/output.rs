//! Rendering of analysis outcomes for the terminal and for machines.

use colored::{ColoredString, Colorize};
use log::info;
use serde_json::json;

use crate::config::OutputFormat;
use crate::report::{ReportIds, ReportRecord};
use crate::run::UrlOutcome;

/// Renders one outcome.
///
/// `Json` emits the full [`AnalysisResult`](crate::AnalysisResult)
/// pretty-printed, `Jsonl` the compact [`ReportRecord`] on one line. An
/// invalid input becomes `{"input": ..., "error": ...}` in both. Report ids
/// for `Jsonl` come from `ids`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_outcome(
    outcome: &UrlOutcome,
    format: OutputFormat,
    ids: &ReportIds,
) -> Result<String, serde_json::Error> {
    match (format, &outcome.result) {
        (OutputFormat::Pretty, _) => Ok(render_pretty(outcome)),
        (OutputFormat::Json, Ok(result)) => serde_json::to_string_pretty(result),
        (OutputFormat::Jsonl, Ok(result)) => serde_json::to_string(&ReportRecord::from_result(result, ids)),
        (OutputFormat::Json, Err(e)) => {
            serde_json::to_string_pretty(&json!({ "input": outcome.input, "error": e.to_string() }))
        }
        (OutputFormat::Jsonl, Err(e)) => {
            serde_json::to_string(&json!({ "input": outcome.input, "error": e.to_string() }))
        }
    }
}

fn render_pretty(outcome: &UrlOutcome) -> String {
    let result = match &outcome.result {
        Ok(result) => result,
        Err(e) => return format!("{} {}: {}", "✗".red(), outcome.input.bold(), e),
    };

    let scores = &result.scores;
    let mut lines = vec![
        format!("{} ({})", result.url.bold(), result.mode),
        format!(
            "  Overall {}  SEO {}  Performance {}  Accessibility {}  Best practices {}",
            paint(scores.overall),
            paint(scores.seo),
            paint(scores.performance),
            paint(scores.accessibility),
            paint(scores.best_practices)
        ),
    ];
    if let Some(error) = &result.analysis_error {
        lines.push(format!("  {} {}", "⚠️  Default scores:".yellow(), error));
    }
    for (index, rec) in result.recommendations.iter().enumerate() {
        lines.push(format!(
            "  {:>2}. [{}] {}",
            index + 1,
            rec.tags.category.as_ref(),
            rec.text
        ));
    }
    lines.join("\n")
}

fn paint(score: u8) -> ColoredString {
    let text = score.to_string();
    match score {
        90..=100 => text.green(),
        50..=89 => text.yellow(),
        _ => text.red(),
    }
}

/// Counts for the end-of-run summary and the exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub analyzed: usize,
    /// Analyzed, but only the default scores could be produced.
    pub degraded: usize,
    pub invalid: usize,
}

impl RunSummary {
    /// `total` is the number of inputs; an input without an outcome counts as failed.
    pub fn from_outcomes(total: usize, outcomes: &[UrlOutcome]) -> Self {
        let mut summary = Self {
            total,
            ..Default::default()
        };
        for outcome in outcomes {
            match &outcome.result {
                Ok(result) => {
                    summary.analyzed += 1;
                    if result.is_degraded() {
                        summary.degraded += 1;
                    }
                }
                Err(_) => summary.invalid += 1,
            }
        }
        summary
    }

    /// 0 when every input produced a result, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.invalid > 0 || self.analyzed < self.total {
            1
        } else {
            0
        }
    }

    pub fn log(&self, elapsed_seconds: f64) {
        info!(
            "✅ Analyzed {} URL{} ({} with default scores, {} invalid) in {:.1}s",
            self.analyzed,
            if self.analyzed == 1 { "" } else { "s" },
            self.degraded,
            self.invalid,
            elapsed_seconds
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisMode;
    use crate::error_handling::{AnalysisError, FetchError, FetchErrorKind};
    use crate::report::AnalysisResult;
    use crate::run::analyze_features;
    use crate::models::FeatureSet;
    use crate::url_features::analyze_url_structure;

    fn analyzed(url: &str) -> UrlOutcome {
        let features = FeatureSet::UrlOnly(analyze_url_structure(url).expect("valid url"));
        UrlOutcome {
            input: url.to_string(),
            result: Ok(analyze_features(url, features)),
        }
    }

    fn degraded(url: &str) -> UrlOutcome {
        let error = AnalysisError::Fetch(FetchError::new(FetchErrorKind::Connect, "refused"));
        UrlOutcome {
            input: url.to_string(),
            result: Ok(AnalysisResult::degraded(url, AnalysisMode::Static, &error)),
        }
    }

    fn invalid(input: &str) -> UrlOutcome {
        UrlOutcome {
            input: input.to_string(),
            result: Err(AnalysisError::InvalidUrl {
                url: input.to_string(),
                reason: "URL is empty".to_string(),
            }),
        }
    }

    #[test]
    fn test_jsonl_is_one_report_record_per_line() {
        let line = render_outcome(&analyzed("https://example.com/"), OutputFormat::Jsonl, &ReportIds::new()).expect("serializes");
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert!(value.get("reportId").is_some());
        assert!(value.get("priorityFixes").is_some());
    }

    #[test]
    fn test_json_is_full_result() {
        let text = render_outcome(&analyzed("https://example.com/"), OutputFormat::Json, &ReportIds::new()).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["mode"], "url-only");
        assert!(value["details"]["technical"].is_object());
    }

    #[test]
    fn test_invalid_input_renders_error_object() {
        let line = render_outcome(&invalid(" "), OutputFormat::Jsonl, &ReportIds::new()).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(value["input"], " ");
        assert!(value["error"].as_str().is_some_and(|e| e.contains("URL is empty")));
    }

    #[test]
    fn test_pretty_lists_recommendations() {
        colored::control::set_override(false);
        let text = render_outcome(&degraded("https://example.com/"), OutputFormat::Pretty, &ReportIds::new()).expect("renders");
        assert!(text.starts_with("https://example.com/ (static)"));
        assert!(text.contains("Overall 50"));
        assert!(text.contains("Default scores:"));
        assert!(text.contains(" 1. ["));
    }

    #[test]
    fn test_run_summary_exit_code() {
        let ok = [analyzed("https://example.com/"), degraded("https://example.org/")];
        let summary = RunSummary::from_outcomes(ok.len(), &ok);
        assert_eq!(summary.analyzed, 2);
        assert_eq!(summary.degraded, 1);
        assert_eq!(summary.exit_code(), 0);

        let mixed = [analyzed("https://example.com/"), invalid("")];
        let summary = RunSummary::from_outcomes(mixed.len(), &mixed);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.exit_code(), 1);

        let lost = RunSummary::from_outcomes(3, &ok);
        assert_eq!(lost.exit_code(), 1);
    }
}
