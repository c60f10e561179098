//! Single-pass document scanner.
//!
//! One linear scan over the normalized line sequence produces everything
//! that depends on fence state: the per-line classification used by
//! region splitting and marker extraction, the first bare `---` separator
//! outside any fence, the raw fenced blocks (type label plus body), and
//! the start of an unterminated fence if one exists. Sharing the scan
//! guarantees every consumer agrees on what is inside a fence.

use log::debug;

/// A fenced block as it appears in the document: its type label (the text
/// after the opening backticks, trimmed) and its body lines joined by
/// `\n`. The label may be empty; such blocks are ignored downstream.
#[derive(Debug, Clone)]
pub(crate) struct RawBlock {
    pub label: String,
    pub body: String,
}

/// Classification of one line by the fence scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineClass {
    /// Ordinary text outside any fence.
    Text,
    /// Blank (whitespace-only) line outside any fence.
    Blank,
    /// A fence marker line (opening or closing).
    FenceMarker,
    /// A line inside a fenced block.
    FenceInterior,
}

/// Everything the single scan derives from the line sequence.
#[derive(Debug)]
pub(crate) struct ScanOutcome {
    /// One entry per input line.
    pub classes: Vec<LineClass>,
    /// Index of the first bare separator line outside any fence.
    pub separator: Option<usize>,
    /// 1-based line number of an unterminated fence's opening marker.
    pub unclosed_fence_start: Option<usize>,
    /// Fenced blocks in document order.
    pub blocks: Vec<RawBlock>,
}

/// A fence marker: a line whose trimmed text begins with three backticks.
pub(crate) const FENCE_MARKER: &str = "```";

/// The region separator: a line whose trimmed text is exactly this.
pub(crate) const REGION_SEPARATOR: &str = "---";

/// Canonicalize line endings and split into lines.
pub(crate) fn normalize(source: &str) -> Vec<String> {
    source
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_owned)
        .collect()
}

/// Run the linear fence scan over the line sequence.
pub(crate) fn scan(lines: &[String]) -> ScanOutcome {
    let mut classes = Vec::with_capacity(lines.len());
    let mut separator = None;
    let mut blocks = Vec::new();

    let mut in_fence = false;
    let mut fence_start = 0usize;
    let mut label = String::new();
    let mut body: Vec<&str> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with(FENCE_MARKER) {
            if in_fence {
                in_fence = false;
                blocks.push(RawBlock {
                    label: std::mem::take(&mut label),
                    body: body.join("\n"),
                });
                body.clear();
            } else {
                in_fence = true;
                fence_start = index + 1;
                label = trimmed[FENCE_MARKER.len()..].trim().to_string();
            }
            classes.push(LineClass::FenceMarker);
            continue;
        }

        if in_fence {
            body.push(line);
            classes.push(LineClass::FenceInterior);
            continue;
        }

        if trimmed.is_empty() {
            classes.push(LineClass::Blank);
            continue;
        }

        if separator.is_none() && trimmed == REGION_SEPARATOR {
            separator = Some(index);
        }
        classes.push(LineClass::Text);
    }

    if in_fence {
        debug!(start_line = fence_start; "Fence left open at end of input");
    }

    ScanOutcome {
        classes,
        separator,
        unclosed_fence_start: in_fence.then_some(fence_start),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(source: &str) -> Vec<String> {
        normalize(source)
    }

    #[test]
    fn test_normalize_line_endings() {
        let lines = normalize("a\r\nb\rc\nd");
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_separator_outside_fence() {
        let lines = lines("top\n---\nbottom");
        let outcome = scan(&lines);

        assert_eq!(outcome.separator, Some(1));
        assert_eq!(outcome.classes[1], LineClass::Text);
    }

    #[test]
    fn test_separator_inside_fence_is_ignored() {
        let lines = lines("top\n```\n---\n```\n---\nbottom");
        let outcome = scan(&lines);

        assert_eq!(outcome.separator, Some(4));
        assert_eq!(outcome.classes[2], LineClass::FenceInterior);
    }

    #[test]
    fn test_missing_separator() {
        let outcome = scan(&lines("just\ntree\nlines"));
        assert_eq!(outcome.separator, None);
        assert_eq!(outcome.unclosed_fence_start, None);
    }

    #[test]
    fn test_block_extraction() {
        let lines = lines("intro\n```tag-store\n{\"a\": 1}\n```\nafter");
        let outcome = scan(&lines);

        assert_eq!(outcome.blocks.len(), 1);
        assert_eq!(outcome.blocks[0].label, "tag-store");
        assert_eq!(outcome.blocks[0].body, "{\"a\": 1}");
    }

    #[test]
    fn test_multi_line_body_and_unlabeled_block() {
        let lines = lines("```\nline one\nline two\n```");
        let outcome = scan(&lines);

        assert_eq!(outcome.blocks.len(), 1);
        assert_eq!(outcome.blocks[0].label, "");
        assert_eq!(outcome.blocks[0].body, "line one\nline two");
    }

    #[test]
    fn test_unclosed_fence_reports_start_line() {
        let lines = lines("a\nb\n```json\nnever closed");
        let outcome = scan(&lines);

        assert_eq!(outcome.unclosed_fence_start, Some(3));
        // The partial block is not collected.
        assert!(outcome.blocks.is_empty());
    }

    #[test]
    fn test_line_classes() {
        let lines = lines("text\n\n```x\nbody\n```");
        let outcome = scan(&lines);

        assert_eq!(
            outcome.classes,
            vec![
                LineClass::Text,
                LineClass::Blank,
                LineClass::FenceMarker,
                LineClass::FenceInterior,
                LineClass::FenceMarker,
            ]
        );
    }
}
