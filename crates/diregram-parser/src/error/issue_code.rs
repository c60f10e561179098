//! Issue codes for the Diregram reporting system.
//!
//! Codes are organized by phase:
//! - Document scanning (fences, JSON blocks)
//! - Cross-reference validation (tags, actors, data objects)
//! - Heuristic and swimlane findings

use std::fmt;

/// Issue codes for categorizing reported findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    // =========================================================================
    // Document scanning
    // =========================================================================
    /// Unterminated fenced code block.
    ///
    /// A fence was opened with ``` but never closed before end of input.
    UnclosedCodeBlock,

    /// Invalid JSON in a labeled metadata block.
    ///
    /// The block body could not be parsed; the block is omitted from the
    /// lookup tables and processing continues.
    InvalidJson,

    // =========================================================================
    // Cross-reference validation
    // =========================================================================
    /// A tree-line title starts with a literal actor-name prefix.
    ///
    /// Actor information belongs in tags and swimlanes, not in prose.
    ActorPrefixInTitle,

    /// The `tag-store` block is missing but a feature requiring it is
    /// used on a tree line.
    MissingTagStore,

    /// A `tags:` marker references a tag id the tag-store does not
    /// declare.
    UnknownTagId,

    /// The tag-store does not declare a required tag group.
    MissingRequiredTagGroup,

    /// A flow line carries no actor tag.
    MissingActorTag,

    /// A flow line carries more than one actor tag.
    MultipleActorTags,

    /// An expid line carries no UI-surface tag.
    MissingUiSurfaceTag,

    /// A `doattrs:` marker appears without a `do:` marker, or an expanded
    /// metadata record lists attribute ids without a data-object id.
    DoattrsWithoutDo,

    /// A referenced attribute id is not in the data object's allowed set.
    ///
    /// A warning: the catalog mapping is best-effort.
    UnknownDataObjectAttributeId,

    // =========================================================================
    // Heuristic and swimlane findings
    // =========================================================================
    /// A flow line contains cross-timeframe/async vocabulary.
    CrossTimeframeSignal,

    /// A swimlane places a node whose tree line has no actor tag.
    SwimlaneNodeMissingActorTag,

    /// A swimlane lane implies an actor category that disagrees with the
    /// node's actor tag.
    SwimlaneActorMismatch,
}

impl IssueCode {
    /// Returns the code's report name (e.g., "UNKNOWN_TAG_ID").
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::UnclosedCodeBlock => "UNCLOSED_CODE_BLOCK",
            IssueCode::InvalidJson => "INVALID_JSON",
            IssueCode::ActorPrefixInTitle => "ACTOR_PREFIX_IN_TITLE",
            IssueCode::MissingTagStore => "MISSING_TAG_STORE",
            IssueCode::UnknownTagId => "UNKNOWN_TAG_ID",
            IssueCode::MissingRequiredTagGroup => "MISSING_REQUIRED_TAG_GROUP",
            IssueCode::MissingActorTag => "MISSING_ACTOR_TAG",
            IssueCode::MultipleActorTags => "MULTIPLE_ACTOR_TAGS",
            IssueCode::MissingUiSurfaceTag => "MISSING_UI_SURFACE_TAG",
            IssueCode::DoattrsWithoutDo => "DOATTRS_WITHOUT_DO",
            IssueCode::UnknownDataObjectAttributeId => "UNKNOWN_DATA_OBJECT_ATTRIBUTE_ID",
            IssueCode::CrossTimeframeSignal => "CROSS_TIMEFRAME_SIGNAL",
            IssueCode::SwimlaneNodeMissingActorTag => "SWIMLANE_NODE_MISSING_ACTOR_TAG",
            IssueCode::SwimlaneActorMismatch => "SWIMLANE_ACTOR_MISMATCH",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            IssueCode::UnclosedCodeBlock => "unterminated fenced code block",
            IssueCode::InvalidJson => "invalid JSON in metadata block",
            IssueCode::ActorPrefixInTitle => "actor name encoded in title",
            IssueCode::MissingTagStore => "missing tag-store block",
            IssueCode::UnknownTagId => "unknown tag id",
            IssueCode::MissingRequiredTagGroup => "required tag group not declared",
            IssueCode::MissingActorTag => "flow line without actor tag",
            IssueCode::MultipleActorTags => "flow line with multiple actor tags",
            IssueCode::MissingUiSurfaceTag => "expid line without ui-surface tag",
            IssueCode::DoattrsWithoutDo => "attribute ids without data-object id",
            IssueCode::UnknownDataObjectAttributeId => "unknown data-object attribute id",
            IssueCode::CrossTimeframeSignal => "cross-timeframe signal on flow line",
            IssueCode::SwimlaneNodeMissingActorTag => "placed node without actor tag",
            IssueCode::SwimlaneActorMismatch => "lane and actor tag disagree",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_code_display() {
        assert_eq!(IssueCode::UnclosedCodeBlock.to_string(), "UNCLOSED_CODE_BLOCK");
        assert_eq!(IssueCode::UnknownTagId.to_string(), "UNKNOWN_TAG_ID");
        assert_eq!(
            IssueCode::SwimlaneActorMismatch.to_string(),
            "SWIMLANE_ACTOR_MISMATCH"
        );
    }

    #[test]
    fn test_issue_code_as_str() {
        assert_eq!(IssueCode::InvalidJson.as_str(), "INVALID_JSON");
        assert_eq!(
            IssueCode::UnknownDataObjectAttributeId.as_str(),
            "UNKNOWN_DATA_OBJECT_ATTRIBUTE_ID"
        );
    }

    #[test]
    fn test_issue_code_description() {
        assert_eq!(
            IssueCode::UnclosedCodeBlock.description(),
            "unterminated fenced code block"
        );
        assert_eq!(IssueCode::MissingActorTag.description(), "flow line without actor tag");
    }
}
