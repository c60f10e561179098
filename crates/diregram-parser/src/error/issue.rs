//! The core issue type for the Diregram reporting system.
//!
//! An [`Issue`] is one reported finding: a severity, a code from the
//! closed [`IssueCode`] set, and a human-readable message. Issues are
//! created once and never mutated.

use std::fmt;

use crate::error::{IssueCode, Severity};

/// A single reported finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    severity: Severity,
    code: IssueCode,
    message: String,
}

impl Issue {
    /// Create an error issue.
    ///
    /// # Example
    ///
    /// ```
    /// # use diregram_parser::error::{Issue, IssueCode};
    /// let issue = Issue::error(
    ///     IssueCode::MissingActorTag,
    ///     "Line 4 is #flow# but has no actor tag (group tg-actors).",
    /// );
    /// assert!(issue.severity().is_error());
    /// ```
    pub fn error(code: IssueCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Create a warning issue.
    pub fn warning(code: IssueCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Get the severity of this issue.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the issue code.
    pub fn code(&self) -> IssueCode {
        self.code
    }

    /// Get the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn new(severity: Severity, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[UNKNOWN_TAG_ID]: message"
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

impl std::error::Error for Issue {}
