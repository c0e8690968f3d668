//! Outcome accounting for mutating runs.

use crate::error::{Error, Result};
use crate::model::Category;

/// What happened to each category in one import or wipe run.
///
/// Per-item recoverable skips are counted; a category-level failure carries
/// the error that stopped that category. A non-clean report is surfaced as
/// warnings, not a nonzero exit.
#[derive(Debug, Default)]
pub struct RunReport {
    pub failures: Vec<CategoryFailure>,
    pub skipped: u64,
}

#[derive(Debug)]
pub struct CategoryFailure {
    pub category: Category,
    pub error: Error,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.skipped == 0
    }
}

/// Fold one category's outcome into the report. Auth errors abort the whole
/// run; anything else is recorded and the next category still runs.
pub(crate) fn record(
    report: &mut RunReport,
    category: Category,
    outcome: Result<u64>,
    done: &str,
) -> Result<()> {
    match outcome {
        Ok(skipped) => {
            report.skipped += skipped;
            println!("{}", done);
            Ok(())
        }
        Err(e) if e.is_auth() => Err(e),
        Err(e) => {
            tracing::error!(category = %category, error = %e, "category failed, continuing with the next");
            report.failures.push(CategoryFailure { category, error: e });
            Ok(())
        }
    }
}
