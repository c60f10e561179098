//! The checking passes run over a parsed document.
//!
//! Passes run in a fixed order so the report is deterministic: the
//! cross-reference pass over tree lines (with its trailing
//! cross-timeframe scan), the expanded-metadata pass over
//! `expanded-metadata-*`/`expanded-grid-*` blocks, then the swimlane
//! consistency pass.

mod context;
mod crossref;
mod expanded;
mod swimlane;

use diregram_parser::{ParsedDocument, error::IssueCollector};

use self::context::ValidationContext;

/// Run every checking pass, emitting issues in discovery order.
pub(crate) fn run(document: &ParsedDocument, issues: &mut IssueCollector) {
    let ctx = ValidationContext::new(document);

    crossref::check(document, &ctx, issues);
    expanded::check(document, &ctx, issues);
    swimlane::check(document, &ctx, issues);
}
