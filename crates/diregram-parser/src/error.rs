//! Issue and report system for the Diregram parser and validator.
//!
//! This module provides the reporting backbone:
//! - Issue codes for documentation and searchability
//! - Severity levels
//! - An issue collector for accumulating findings across passes
//! - The final [`ValidationReport`]
//!
//! # Overview
//!
//! Every reportable condition becomes an [`Issue`] — a severity, a code
//! from the closed [`IssueCode`] set, and a human-readable message.
//! Passes emit issues into an [`IssueCollector`]; nothing aborts the run.
//! The collector finishes into a [`ValidationReport`] that preserves
//! discovery order and derives the error/warning counts the process exit
//! status is based on. Warnings never fail a run, which is why the report
//! is an ordinary value rather than an error type.
//!
//! # Example
//!
//! ```
//! use diregram_parser::error::{Issue, IssueCode, IssueCollector};
//!
//! let mut collector = IssueCollector::new();
//! collector.emit(Issue::error(
//!     IssueCode::UnknownTagId,
//!     "Line 3 references unknown tag id \"x\" (not present in tag-store).",
//! ));
//!
//! let report = collector.finish();
//! assert_eq!(report.error_count(), 1);
//! assert!(report.has_errors());
//! ```

mod collector;
mod issue;
mod issue_code;
mod report;
mod severity;

pub use collector::IssueCollector;
pub use issue::Issue;
pub use issue_code::IssueCode;
pub use report::ValidationReport;
pub use severity::Severity;
