//! Collector for accumulating issues across checking passes.
//!
//! The [`IssueCollector`] lets every pass report as many findings as it
//! can instead of stopping at the first problem. A single run surfaces
//! the maximal set of issues.

use crate::error::{Issue, ValidationReport};

/// A collector for accumulating issues during validation.
///
/// # Example
///
/// ```
/// use diregram_parser::error::{Issue, IssueCode, IssueCollector};
///
/// let mut collector = IssueCollector::new();
///
/// collector.emit(Issue::error(
///     IssueCode::UnknownTagId,
///     "Line 2 references unknown tag id \"t\" (not present in tag-store).",
/// ));
/// collector.emit(Issue::warning(
///     IssueCode::CrossTimeframeSignal,
///     "Line 5 (#flow#) contains a cross-timeframe/async signal.",
/// ));
///
/// let report = collector.finish();
/// assert_eq!(report.error_count(), 1);
/// assert_eq!(report.warning_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<Issue>,
}

impl IssueCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an issue to this collector.
    ///
    /// Issues are kept in discovery order.
    pub fn emit(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Emit every issue of an iterator, preserving order.
    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    /// Number of issues collected so far.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Finish collection and build the report.
    ///
    /// Unlike a fail-fast error path this always succeeds: warnings-only
    /// runs are valid, and even an error-laden report is the run's
    /// ordinary result.
    pub fn finish(self) -> ValidationReport {
        ValidationReport::new(self.issues)
    }

    /// Take the collected issues without building a report.
    ///
    /// Used by phases whose findings are carried forward into a later
    /// collector rather than reported directly.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

#[cfg(test)]
mod tests {
    use crate::error::IssueCode;

    use super::*;

    #[test]
    fn test_collector_new_finish_empty() {
        let collector = IssueCollector::new();
        let report = collector.finish();

        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_collector_preserves_discovery_order() {
        let mut collector = IssueCollector::new();
        collector.emit(Issue::warning(IssueCode::CrossTimeframeSignal, "first"));
        collector.emit(Issue::error(IssueCode::UnknownTagId, "second"));
        collector.emit(Issue::warning(IssueCode::SwimlaneActorMismatch, "third"));

        let report = collector.finish();
        let messages: Vec<_> = report.issues().iter().map(|i| i.message()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_collector_extend() {
        let mut collector = IssueCollector::new();
        collector.extend(vec![
            Issue::error(IssueCode::InvalidJson, "a"),
            Issue::error(IssueCode::InvalidJson, "b"),
        ]);

        assert_eq!(collector.len(), 2);
        assert!(!collector.is_empty());
    }
}
