//! Cross-reference validation over tree lines.
//!
//! Walks the scanned tree lines in order and checks, per line: the
//! actor-prefix-in-title rule, tag existence against the tag store, flow
//! actor cardinality, doattrs/do co-occurrence and attribute existence,
//! and expid UI-surface cardinality. A trailing scan over the raw tree
//! region flags flow lines carrying cross-timeframe vocabulary.

use std::sync::LazyLock;

use regex::Regex;

use diregram_core::tag_store::{self, ACTOR_GROUP_ID, UI_SURFACE_GROUP_ID};
use diregram_parser::{
    ParsedDocument,
    error::{Issue, IssueCode, IssueCollector},
    markers,
};

use crate::check::context::{TagStoreRequirement, ValidationContext};

/// A title that opens with a role name and a colon.
static ACTOR_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:system|staff|applicant|partner)\s*:").expect("pattern is valid")
});

/// Vocabulary that marks a step as spanning session boundaries: waiting,
/// queues, calendar ranges, postal mail, external assessments.
static TIMEFRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:await|waiting|wait|queued|queue|2-4\s*weeks|weeks?|months?|within\s+one\s+month|mail|postal|partner\s+assessment|assessment|ica)\b",
    )
    .expect("pattern is valid")
});

/// Run the per-line cross-reference pass, then the cross-timeframe scan.
pub(crate) fn check(
    document: &ParsedDocument,
    ctx: &ValidationContext<'_>,
    issues: &mut IssueCollector,
) {
    for tree_line in document.tree_lines() {
        let line_no = tree_line.number;
        let line = &tree_line.markers;
        let mut requirement = TagStoreRequirement::new();

        if ACTOR_PREFIX_RE.is_match(&line.title) {
            issues.emit(Issue::error(
                IssueCode::ActorPrefixInTitle,
                format!(
                    "Line {line_no} encodes an actor in the title ('System:/Staff:/Applicant:/Partner:'). Use actor tags + swimlanes instead."
                ),
            ));
        }

        if !line.tag_ids.is_empty() {
            if let Some(store) = requirement.require(ctx, issues) {
                for tag_id in &line.tag_ids {
                    if store.group_of(tag_id).is_none() {
                        issues.emit(Issue::error(
                            IssueCode::UnknownTagId,
                            format!(
                                "Line {line_no} references unknown tag id \"{tag_id}\" (not present in tag-store)."
                            ),
                        ));
                    }
                }
            }
        }

        if line.is_flow {
            let store = requirement.require(ctx, issues);
            if let Some(store) = store {
                if !store.declares_group(ACTOR_GROUP_ID) {
                    issues.emit(Issue::error(
                        IssueCode::MissingRequiredTagGroup,
                        format!("tag-store missing required group \"{ACTOR_GROUP_ID}\"."),
                    ));
                }
            }

            let actors = tag_store::actor_tags(&line.tag_ids, store);
            if actors.is_empty() {
                issues.emit(Issue::error(
                    IssueCode::MissingActorTag,
                    format!(
                        "Line {line_no} is #flow# but has no actor tag (group {ACTOR_GROUP_ID})."
                    ),
                ));
            } else if actors.len() > 1 {
                issues.emit(Issue::error(
                    IssueCode::MultipleActorTags,
                    format!(
                        "Line {line_no} is #flow# but has multiple actor tags: {}",
                        actors.join(", ")
                    ),
                ));
            }
        }

        if !line.doattr_ids.is_empty() {
            match line.do_id.as_deref() {
                None => {
                    issues.emit(Issue::error(
                        IssueCode::DoattrsWithoutDo,
                        format!(
                            "Line {line_no} uses <!-- doattrs:... --> but has no <!-- do:... --> on the same line."
                        ),
                    ));
                }
                Some(do_id) => {
                    if let Some(catalog) = ctx.catalog_in_effect() {
                        if let Some(allowed) = catalog.attributes(do_id) {
                            for attr_id in &line.doattr_ids {
                                if !allowed.contains(attr_id.as_str()) {
                                    issues.emit(Issue::warning(
                                        IssueCode::UnknownDataObjectAttributeId,
                                        format!(
                                            "Line {line_no} references unknown attribute \"{attr_id}\" for data object \"{do_id}\"."
                                        ),
                                    ));
                                }
                            }
                        }
                    }
                }
            }
        }

        if line.has_expid {
            let store = requirement.require(ctx, issues);
            if let Some(store) = store {
                if !store.declares_group(UI_SURFACE_GROUP_ID) {
                    issues.emit(Issue::error(
                        IssueCode::MissingRequiredTagGroup,
                        format!("tag-store missing required group \"{UI_SURFACE_GROUP_ID}\"."),
                    ));
                }
            }

            let surfaces = tag_store::ui_surface_tags(&line.tag_ids, store);
            if surfaces.is_empty() {
                issues.emit(Issue::error(
                    IssueCode::MissingUiSurfaceTag,
                    format!(
                        "Line {line_no} has expid but no ui-surface tag (group {UI_SURFACE_GROUP_ID})."
                    ),
                ));
            }
        }
    }

    // The lexical scan runs over the raw tree region, matching the flow
    // literal the same way the marker scan does.
    for (index, raw_line) in document.tree_region().iter().enumerate() {
        if !raw_line.contains(markers::FLOW_MARKER) {
            continue;
        }
        if TIMEFRAME_RE.is_match(raw_line) {
            issues.emit(Issue::warning(
                IssueCode::CrossTimeframeSignal,
                format!(
                    "Line {} (#flow#) contains a cross-timeframe/async signal. Non-swimlane #flow# processes should be session-scoped; consider splitting via Flowtab/lifecycle hubs.",
                    index + 1
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_prefix_pattern() {
        assert!(ACTOR_PREFIX_RE.is_match("Staff: review the case"));
        assert!(ACTOR_PREFIX_RE.is_match("system : start job"));
        assert!(ACTOR_PREFIX_RE.is_match("APPLICANT:submit"));
        assert!(!ACTOR_PREFIX_RE.is_match("The staff: note"));
        assert!(!ACTOR_PREFIX_RE.is_match("Partners: plural does not count"));
    }

    #[test]
    fn test_timeframe_pattern() {
        assert!(TIMEFRAME_RE.is_match("Wait for confirmation"));
        assert!(TIMEFRAME_RE.is_match("queued for review"));
        assert!(TIMEFRAME_RE.is_match("response within one month"));
        assert!(TIMEFRAME_RE.is_match("takes 2-4 weeks to arrive"));
        assert!(TIMEFRAME_RE.is_match("partner assessment pending"));
        assert!(!TIMEFRAME_RE.is_match("instant confirmation"));
        // Word boundaries: "email" does not contain the word "mail".
        assert!(!TIMEFRAME_RE.is_match("send email"));
    }
}
