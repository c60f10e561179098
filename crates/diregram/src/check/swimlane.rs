//! Swimlane consistency checking.
//!
//! Each `flowtab-swimlane-*` block places nodes into labeled lanes. A
//! lane label can imply an actor category; the placed node's tree line
//! must then carry a matching actor tag. Findings are warnings: lane
//! labels are prose and the inference is heuristic.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use diregram_core::{ActorCategory, MetadataBlock, tag_store};
use diregram_parser::{
    ParsedDocument,
    error::{Issue, IssueCode, IssueCollector},
    markers,
};

use crate::check::context::ValidationContext;

/// Staff-side vocabulary, matched on whole words of the lowercased label.
static STAFF_WORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:staff|admin|reviewer|operator|agent)\b").expect("pattern is valid")
});

/// Applicant-side vocabulary.
static APPLICANT_WORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:applicant|customer|user|visitor|student)\b").expect("pattern is valid")
});

/// Derive the expected actor category of a lane label.
///
/// The keyword policy is fixed and ordered; the first match wins. A
/// label matching nothing implies no expectation.
fn expected_actor(label: &str) -> Option<ActorCategory> {
    let lowered = label.to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    if lowered.contains("system") {
        return Some(ActorCategory::System);
    }
    if STAFF_WORDS_RE.is_match(&lowered) {
        return Some(ActorCategory::Staff);
    }
    if lowered.contains("partner") {
        return Some(ActorCategory::Partner);
    }
    if APPLICANT_WORDS_RE.is_match(&lowered) {
        return Some(ActorCategory::Applicant);
    }
    None
}

/// Decode a `node-<integer>` placement key into a 0-based line index.
fn node_line_index(node_id: &str) -> Option<usize> {
    let digits = node_id.strip_prefix("node-")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Run the swimlane pass over every `flowtab-swimlane-*` block.
pub(crate) fn check(
    document: &ParsedDocument,
    ctx: &ValidationContext<'_>,
    issues: &mut IssueCollector,
) {
    for (label, block) in document.blocks() {
        let MetadataBlock::Swimlane(swimlane) = block else {
            continue;
        };

        let lane_labels: HashMap<&str, &str> = swimlane
            .lanes
            .iter()
            .map(|lane| (lane.id.as_str(), lane.label.as_str()))
            .collect();

        for placed in &swimlane.placement {
            let lane_label = lane_labels
                .get(placed.lane_id.as_str())
                .copied()
                .unwrap_or("");
            let Some(expected) = expected_actor(lane_label) else {
                continue;
            };
            let Some(line_index) = node_line_index(&placed.node_id) else {
                continue;
            };
            let Some(line) = document.line(line_index) else {
                continue;
            };

            let tag_ids = markers::tag_ids(line);
            let actors = tag_store::actor_tags(&tag_ids, ctx.tag_store());

            if actors.is_empty() {
                issues.emit(Issue::warning(
                    IssueCode::SwimlaneNodeMissingActorTag,
                    format!(
                        "{label} places {} in lane \"{lane_label}\" but node has no actor tag.",
                        placed.node_id
                    ),
                ));
            } else if actors.len() == 1 && actors[0] != expected.tag_id() {
                issues.emit(Issue::warning(
                    IssueCode::SwimlaneActorMismatch,
                    format!(
                        "{label} places {} in lane \"{lane_label}\" (implies {expected}) but node actor tag is \"{}\".",
                        placed.node_id, actors[0]
                    ),
                ));
            }
        }
    }
}
