//! The final result of a validation run.
//!
//! A [`ValidationReport`] holds every issue in discovery order and
//! derives the counts that decide the process exit status.

use crate::error::{Issue, Severity};

/// The ordered set of issues found by one validation run.
///
/// The report is the run's only externally observable result besides the
/// exit status. Errors decide success; warnings never do.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    /// Create a report from issues in discovery order.
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// All issues in discovery order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// The error issues, in discovery order.
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.by_severity(Severity::Error)
    }

    /// The warning issues, in discovery order.
    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.by_severity(Severity::Warning)
    }

    /// Number of errors.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Whether at least one error was found.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity().is_error())
    }

    /// Whether nothing at all was found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Keep only the issues matching a predicate.
    ///
    /// Callers use this to suppress configured issue codes without
    /// re-running validation; the counts and exit status follow the
    /// retained set.
    pub fn retain(&mut self, f: impl FnMut(&Issue) -> bool) {
        self.issues.retain(f);
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity() == severity)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::IssueCode;

    use super::*;

    fn sample_report() -> ValidationReport {
        ValidationReport::new(vec![
            Issue::warning(IssueCode::CrossTimeframeSignal, "w1"),
            Issue::error(IssueCode::UnknownTagId, "e1"),
            Issue::warning(IssueCode::SwimlaneActorMismatch, "w2"),
            Issue::error(IssueCode::MissingActorTag, "e2"),
        ])
    }

    #[test]
    fn test_counts() {
        let report = sample_report();

        assert_eq!(report.error_count(), 2);
        assert_eq!(report.warning_count(), 2);
        assert!(report.has_errors());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_severity_iteration_preserves_order() {
        let report = sample_report();

        let errors: Vec<_> = report.errors().map(|i| i.message()).collect();
        assert_eq!(errors, vec!["e1", "e2"]);

        let warnings: Vec<_> = report.warnings().map(|i| i.message()).collect();
        assert_eq!(warnings, vec!["w1", "w2"]);
    }

    #[test]
    fn test_retain_drops_suppressed_codes() {
        let mut report = sample_report();
        report.retain(|issue| issue.code() != IssueCode::UnknownTagId);

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 2);
    }

    #[test]
    fn test_warnings_only_is_not_an_error() {
        let report = ValidationReport::new(vec![Issue::warning(
            IssueCode::UnknownDataObjectAttributeId,
            "w",
        )]);

        assert!(!report.has_errors());
        assert!(!report.is_clean());
    }
}
