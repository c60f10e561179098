//! # Diregram Parser
//!
//! Parser for Diregram documents. This crate turns raw document text into
//! a [`ParsedDocument`]: the normalized line sequence, the tree region
//! with its per-line markers, and the classified metadata blocks — plus
//! any issues found while scanning (unterminated fences, unparsable JSON
//! bodies).
//!
//! Scanning never aborts: a malformed block or an unclosed fence becomes
//! an issue and the rest of the document is still processed.
//!
//! ## Usage
//!
//! ```
//! let source = "Greet the applicant #flow# <!-- tags:actor-staff -->\n---\n";
//! let document = diregram_parser::parse(source);
//!
//! assert_eq!(document.tree_lines().len(), 1);
//! assert!(document.tree_lines()[0].markers.is_flow);
//! assert!(document.issues().is_empty());
//! ```

mod blocks;
mod scanner;

pub mod error;
pub mod markers;

pub use markers::LineMarkers;

use indexmap::IndexMap;
use log::debug;

use diregram_core::{DataObjectCatalog, MetadataBlock, TagStore, metadata};

use crate::{
    error::{Issue, IssueCode, IssueCollector},
    scanner::LineClass,
};

/// One scanned line of the tree region.
#[derive(Debug, Clone)]
pub struct TreeLine {
    /// 1-based line number in the document.
    pub number: usize,
    /// The markers extracted from the line.
    pub markers: LineMarkers,
}

/// A parsed Diregram document.
///
/// Owned exclusively by one validation run and immutable after parsing.
#[derive(Debug)]
pub struct ParsedDocument {
    lines: Vec<String>,
    tree_end: usize,
    tree_lines: Vec<TreeLine>,
    blocks: IndexMap<String, MetadataBlock>,
    issues: Vec<Issue>,
}

impl ParsedDocument {
    /// All normalized lines of the document.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// One line by 0-based index.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// The raw lines of the tree region (everything before the
    /// separator, or the whole document when there is none).
    pub fn tree_region(&self) -> &[String] {
        &self.lines[..self.tree_end]
    }

    /// The scanned tree lines: non-blank, outside fences, with their
    /// extracted markers.
    pub fn tree_lines(&self) -> &[TreeLine] {
        &self.tree_lines
    }

    /// The classified metadata blocks in first-seen label order.
    pub fn blocks(&self) -> &IndexMap<String, MetadataBlock> {
        &self.blocks
    }

    /// The tag store, when a well-shaped `tag-store` block exists.
    pub fn tag_store(&self) -> Option<&TagStore> {
        match self.blocks.get(metadata::TAG_STORE_LABEL) {
            Some(MetadataBlock::TagStore(store)) => Some(store),
            _ => None,
        }
    }

    /// The data-object catalog, when a well-shaped `data-objects` block
    /// exists.
    pub fn data_objects(&self) -> Option<&DataObjectCatalog> {
        match self.blocks.get(metadata::DATA_OBJECTS_LABEL) {
            Some(MetadataBlock::DataObjects(catalog)) => Some(catalog),
            _ => None,
        }
    }

    /// Issues found while scanning, in discovery order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

/// Parse document text into a [`ParsedDocument`].
///
/// This is the main entry point for parsing Diregram source. It
/// orchestrates the scanning pipeline:
///
/// 1. **Normalize** - Canonicalize line endings, split into lines
/// 2. **Scan** - One linear fence scan producing line classes, the
///    region separator, the raw fenced blocks, and any unclosed fence
/// 3. **Load** - Parse labeled block bodies as JSON and classify them
/// 4. **Tokenize** - Extract the markers of every tree line
pub fn parse(source: &str) -> ParsedDocument {
    let lines = scanner::normalize(source);
    let outcome = scanner::scan(&lines);

    let mut issues = IssueCollector::new();
    if let Some(start) = outcome.unclosed_fence_start {
        issues.emit(Issue::error(
            IssueCode::UnclosedCodeBlock,
            format!("Unclosed fenced code block starting near line {start}."),
        ));
    }

    let blocks = blocks::load(&outcome.blocks, &mut issues);

    let tree_end = outcome.separator.unwrap_or(lines.len());
    let tree_lines: Vec<TreeLine> = lines[..tree_end]
        .iter()
        .enumerate()
        .filter(|(index, _)| outcome.classes[*index] == LineClass::Text)
        .map(|(index, line)| TreeLine {
            number: index + 1,
            markers: markers::extract(line),
        })
        .collect();

    debug!(
        tree_lines = tree_lines.len(),
        blocks = blocks.len();
        "Parsed document"
    );

    ParsedDocument {
        lines,
        tree_end,
        tree_lines,
        blocks,
        issues: issues.into_issues(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_regions() {
        let doc = parse("one\ntwo\n---\nafter\n```tag-store\n{}\n```");

        assert_eq!(doc.tree_region().len(), 2);
        assert_eq!(doc.tree_lines().len(), 2);
        assert_eq!(doc.tree_lines()[0].number, 1);
        assert_eq!(doc.tree_lines()[1].number, 2);
        // Blocks are collected from the whole document.
        assert!(doc.tag_store().is_some());
    }

    #[test]
    fn test_parse_without_separator_treats_all_as_tree() {
        let doc = parse("one\n\ntwo");

        assert_eq!(doc.tree_region().len(), 3);
        // Blank lines are not tree lines.
        assert_eq!(doc.tree_lines().len(), 2);
    }

    #[test]
    fn test_fenced_lines_are_not_tree_lines() {
        let doc = parse("keep\n```\n#flow# not scanned\n```\nalso kept\n---\n");

        let numbers: Vec<_> = doc.tree_lines().iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 5]);
    }

    #[test]
    fn test_unclosed_fence_issue() {
        let doc = parse("a\n```json\n{\"x\": 1}");

        assert_eq!(doc.issues().len(), 1);
        assert_eq!(doc.issues()[0].code(), IssueCode::UnclosedCodeBlock);
        assert_eq!(
            doc.issues()[0].message(),
            "Unclosed fenced code block starting near line 2."
        );
    }

    #[test]
    fn test_metadata_after_separator_is_loaded() {
        let doc = parse(concat!(
            "Step #flow# <!-- tags:actor-staff -->\n",
            "---\n",
            "```data-objects\n",
            "{\"objects\": [{\"id\": \"do1\"}]}\n",
            "```\n",
        ));

        let catalog = doc.data_objects().expect("catalog should load");
        assert!(catalog.attributes("do1").is_some());
    }
}
