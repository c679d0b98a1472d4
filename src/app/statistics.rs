//! End-of-run statistics, grouped by pipeline stage.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};

/// Where in the pipeline a counter fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Render,
    Extraction,
    Outcome,
}

impl Stage {
    const ALL: [Stage; 4] = [Stage::Fetch, Stage::Render, Stage::Extraction, Stage::Outcome];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Fetch => "Fetch",
            Stage::Render => "Render",
            Stage::Extraction => "Extraction",
            Stage::Outcome => "Outcome",
        }
    }
}

fn error_stage(error: ErrorType) -> Stage {
    match error {
        ErrorType::RenderLaunchError
        | ErrorType::RenderNavigationError
        | ErrorType::RenderTimeoutError
        | ErrorType::RenderEvaluationError
        | ErrorType::RenderSnapshotError => Stage::Render,
        _ => Stage::Fetch,
    }
}

fn warning_stage(warning: WarningType) -> Stage {
    match warning {
        WarningType::MissingRenderProbe => Stage::Render,
        _ => Stage::Extraction,
    }
}

fn info_stage(info_type: InfoType) -> Stage {
    match info_type {
        InfoType::DegradedResult => Stage::Outcome,
        _ => Stage::Fetch,
    }
}

/// Non-zero counters of one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCounts {
    pub stage: Stage,
    pub failures: usize,
    pub notices: usize,
    /// `(label, count)` in declaration order; failures first.
    pub entries: Vec<(&'static str, usize)>,
}

impl StageCounts {
    fn summary_line(&self) -> String {
        let details = self
            .entries
            .iter()
            .map(|(label, count)| format!("{label} {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}: {} failed, {} noted ({details})",
            self.stage.as_str(),
            self.failures,
            self.notices
        )
    }
}

/// Groups the counters that fired into per-stage totals. Quiet stages are omitted.
pub fn stage_counts(stats: &ProcessingStats) -> Vec<StageCounts> {
    Stage::ALL
        .into_iter()
        .filter_map(|stage| {
            let mut counts = StageCounts {
                stage,
                failures: 0,
                notices: 0,
                entries: Vec::new(),
            };
            for error in ErrorType::iter().filter(|&e| error_stage(e) == stage) {
                let count = stats.get_error_count(error);
                if count > 0 {
                    counts.failures += count;
                    counts.entries.push((error.as_str(), count));
                }
            }
            for warning in WarningType::iter().filter(|&w| warning_stage(w) == stage) {
                let count = stats.get_warning_count(warning);
                if count > 0 {
                    counts.notices += count;
                    counts.entries.push((warning.as_str(), count));
                }
            }
            for info_type in InfoType::iter().filter(|&i| info_stage(i) == stage) {
                let count = stats.get_info_count(info_type);
                if count > 0 {
                    counts.notices += count;
                    counts.entries.push((info_type.as_str(), count));
                }
            }
            (!counts.entries.is_empty()).then_some(counts)
        })
        .collect()
}

/// Logs one line per pipeline stage that recorded anything during the run.
pub fn print_error_statistics(stats: &ProcessingStats) {
    for counts in stage_counts(stats) {
        info!("{}", counts.summary_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_run_has_no_stages() {
        assert!(stage_counts(&ProcessingStats::new()).is_empty());
        print_error_statistics(&ProcessingStats::new());
    }

    #[test]
    fn test_counters_group_by_stage() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_info(InfoType::HttpRedirect);
        stats.increment_error(ErrorType::RenderNavigationError);
        stats.increment_warning(WarningType::MissingRenderProbe);
        stats.increment_warning(WarningType::MissingMetaDescription);
        stats.increment_info(InfoType::DegradedResult);

        let counts = stage_counts(&stats);
        let stages: Vec<Stage> = counts.iter().map(|c| c.stage).collect();
        assert_eq!(
            stages,
            vec![Stage::Fetch, Stage::Render, Stage::Extraction, Stage::Outcome]
        );

        let fetch = &counts[0];
        assert_eq!((fetch.failures, fetch.notices), (2, 1));
        assert_eq!(fetch.entries[0], (ErrorType::HttpRequestTimeoutError.as_str(), 2));

        let render = &counts[1];
        assert_eq!((render.failures, render.notices), (1, 1));
        assert_eq!(counts[2].entries, vec![("Missing meta description", 1)]);
        assert_eq!(counts[3].notices, 1);
    }

    #[test]
    fn test_summary_line_names_stage_and_counters() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::RenderTimeoutError);
        let counts = stage_counts(&stats);
        assert_eq!(
            counts[0].summary_line(),
            "Render: 1 failed, 0 noted (Render timeout error 1)"
        );
    }
}
