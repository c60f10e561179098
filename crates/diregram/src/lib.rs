//! Diregram - a validator for the Diregram process-flow notation.
//!
//! Diregram documents are markdown outlines annotated with HTML-comment
//! markers (tags, data-object bindings, UI-surface ids) plus fenced JSON
//! metadata blocks (tag taxonomy, data-object catalog, UI-surface
//! expansions, swimlane placement). This crate checks that the document
//! structure is well-formed, that every inline marker resolves to a
//! declared entity, and that the cross-cutting consistency rules hold —
//! and reports everything it finds as a severity-ranked
//! [`ValidationReport`].
//!
//! Validation never stops at the first problem: one run surfaces the
//! maximal set of issues, and only errors (never warnings) make a
//! document fail.
//!
//! # Examples
//!
//! ```
//! let source = "Greet the applicant #flow# <!-- tags:actor-staff -->\n---\n```tag-store\n{\"groups\": [{\"id\": \"tg-actors\"}], \"tags\": [{\"id\": \"actor-staff\", \"groupId\": \"tg-actors\"}]}\n```\n";
//!
//! let report = diregram::validate(source);
//!
//! assert!(!report.has_errors());
//! assert_eq!(report.warning_count(), 0);
//! ```

mod check;

pub use diregram_core::{ActorCategory, DataObjectCatalog, MetadataBlock, TagStore};
pub use diregram_parser::error::{
    Issue, IssueCode, IssueCollector, Severity, ValidationReport,
};
pub use diregram_parser::{LineMarkers, ParsedDocument, TreeLine, parse};

use log::{debug, info};

/// Validate Diregram source text.
///
/// This is the main entry point. It orchestrates the full checking
/// pipeline over one document:
///
/// 1. **Parse** - Scan regions, fences, markers, and metadata blocks
/// 2. **Cross-reference** - Tag existence, actor and UI-surface
///    cardinality, data-object attribute linkage, the cross-timeframe
///    heuristic
/// 3. **Expanded metadata** - Attribute linkage inside
///    `expanded-metadata-*` and `expanded-grid-*` blocks
/// 4. **Swimlanes** - Lane labels against node actor tags
///
/// Issues appear in the report in discovery order. The run is a
/// deterministic function of the source text: identical input yields a
/// byte-identical report.
///
/// # Arguments
///
/// * `source` - Diregram document text
pub fn validate(source: &str) -> ValidationReport {
    info!("Validating document");

    let document = diregram_parser::parse(source);

    let mut issues = IssueCollector::new();
    issues.extend(document.issues().iter().cloned());
    check::run(&document, &mut issues);

    let report = issues.finish();
    debug!(
        errors = report.error_count(),
        warnings = report.warning_count();
        "Validation finished"
    );

    report
}
