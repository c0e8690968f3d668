//! Command implementations.

pub mod export;
pub mod import;
pub mod wipe;

use redsync::report::RunReport;

/// Per-category failures and per-item skips are surfaced as warnings; they
/// never turn into a nonzero exit.
pub(crate) fn print_report(report: &RunReport) {
    for failure in &report.failures {
        eprintln!("Warning: {} failed: {}", failure.category, failure.error);
    }
    if report.skipped > 0 {
        eprintln!("Warning: {} item(s) skipped.", report.skipped);
    }
}
