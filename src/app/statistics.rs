//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FetchFailure, ProcessingStats};
use crate::run::DiscoveryReport;

/// Prints fetch failure and task failure counts to the log.
pub fn print_failure_statistics(stats: &ProcessingStats) {
    let total_failures = stats.total_failures();
    if total_failures > 0 {
        info!("Fetch failures ({} total):", total_failures);
        for failure in FetchFailure::iter() {
            let count = stats.get_failure_count(failure);
            if count > 0 {
                info!("   {}: {}", failure.as_str(), count);
            }
        }
    }

    let task_failures = stats.task_failures();
    if task_failures > 0 {
        info!("Script tasks that failed during extraction: {}", task_failures);
    }
}

/// Prints a one-line summary of the run.
pub fn print_run_summary(report: &DiscoveryReport) {
    let pages = report.targets.iter().filter(|t| t.page_fetched).count();
    let scripts_found: usize = report.targets.iter().map(|t| t.scripts_found).sum();
    let scripts_fetched: usize = report.targets.iter().map(|t| t.scripts_fetched).sum();
    info!(
        "✅ Processed {} target{} ({} page{} fetched, {}/{} scripts fetched): {} unique path{} in {:.1}s",
        report.targets.len(),
        if report.targets.len() == 1 { "" } else { "s" },
        pages,
        if pages == 1 { "" } else { "s" },
        scripts_fetched,
        scripts_found,
        report.paths.len(),
        if report.paths.len() == 1 { "" } else { "s" },
        report.elapsed_seconds
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::TargetOutcome;

    #[test]
    fn test_print_failure_statistics_no_failures() {
        let stats = ProcessingStats::new();
        // Should not panic when there are no failures
        print_failure_statistics(&stats);
    }

    #[test]
    fn test_print_failure_statistics_with_failures() {
        let stats = ProcessingStats::new();
        stats.increment_failure(FetchFailure::Timeout);
        stats.increment_failure(FetchFailure::NotFound);
        stats.increment_task_failure();
        print_failure_statistics(&stats);
    }

    #[test]
    fn test_print_run_summary() {
        let report = DiscoveryReport {
            targets: vec![TargetOutcome {
                target: "https://example.com".to_string(),
                page_fetched: true,
                scripts_found: 2,
                scripts_fetched: 1,
                paths: vec!["/api/a".to_string()],
            }],
            paths: vec!["/api/a".to_string()],
            elapsed_seconds: 0.5,
        };
        print_run_summary(&report);
    }
}
