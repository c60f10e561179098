//! Per-line marker tokenizer.
//!
//! Tree lines carry markers as HTML comments with a fixed grammar:
//! `<!-- tags:a,b -->`, `<!-- expid:12 -->`, `<!-- do:some-id -->`,
//! `<!-- doattrs:a,b -->`, plus the inline `#flow#` literal. This module
//! tokenizes one line into a [`LineMarkers`] value.
//!
//! Resolution policies, kept deliberately asymmetric with the
//! last-block-wins rule for metadata labels: for every marker kind the
//! first matching comment on a line wins, and in particular a `do:`
//! comment with a non-empty payload consumes the slot even when its
//! payload trims away to nothing.

use winnow::{Parser, combinator::delimited, token::take_until};

/// Inline literal marking a flow line.
pub const FLOW_MARKER: &str = "#flow#";

/// Inline literal marking a flow-tab line.
pub const FLOWTAB_MARKER: &str = "#flowtab#";

/// Inline literal marking a common (shared) line.
pub const COMMON_MARKER: &str = "#common#";

/// Sanitization cap for `doattrs:` ids.
const MAX_ATTR_ID_LEN: usize = 64;

/// The markers extracted from one tree line.
#[derive(Debug, Clone, Default)]
pub struct LineMarkers {
    /// Normalized title used only by the actor-prefix check: indentation,
    /// comment spans, and the inline literals removed, whitespace
    /// collapsed.
    pub title: String,
    /// De-duplicated tag ids in first-seen order.
    pub tag_ids: Vec<String>,
    /// Whether the line carries the `#flow#` literal.
    pub is_flow: bool,
    /// Whether the line carries a digits-only `expid:` marker.
    pub has_expid: bool,
    /// The data-object binding, when a `do:` marker with a usable id is
    /// present.
    pub do_id: Option<String>,
    /// De-duplicated `doattrs:` ids in first-seen order, each capped at
    /// 64 characters.
    pub doattr_ids: Vec<String>,
}

/// One HTML comment: `<!--`, shortest body, `-->`.
fn comment<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    delimited("<!--", take_until(0.., "-->"), "-->").parse_next(input)
}

/// The bodies of every terminated HTML comment on the line, left to
/// right. An unterminated `<!--` ends the scan.
fn comment_bodies(line: &str) -> Vec<&str> {
    let mut bodies = Vec::new();
    let mut rest = line;
    while let Some(position) = rest.find("<!--") {
        let mut input = &rest[position..];
        match comment(&mut input) {
            Ok(body) => {
                bodies.push(body);
                rest = input;
            }
            Err(_) => break,
        }
    }
    bodies
}

/// Sanitize one raw id: strip embedded newlines and angle brackets,
/// collapse the `--` comment-terminator sequence, trim.
fn sanitize_id(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '<' | '>'))
        .collect();
    cleaned.replace("--", "").trim().to_string()
}

/// Split a comma-separated payload into sanitized, de-duplicated ids,
/// preserving first-seen order. `truncate` caps each id's length after
/// sanitization.
fn id_list(payload: &str, truncate: Option<usize>) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for part in payload.split(',') {
        let mut id = sanitize_id(part);
        if let Some(max) = truncate {
            id = id.chars().take(max).collect();
        }
        if id.is_empty() || ids.contains(&id) {
            continue;
        }
        ids.push(id);
    }
    ids
}

/// `true` when an `expid:` payload is digits followed only by trailing
/// whitespace.
fn is_expid_payload(payload: &str) -> bool {
    let digits = payload.trim_end();
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Remove every terminated comment span, keeping an unterminated tail.
fn strip_comment_spans(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start + 4..].find("-->") {
            Some(end) => rest = &rest[start + 4 + end + 3..],
            None => {
                rest = &rest[start..];
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Normalize a line into the title used by the actor-prefix check.
fn title_for_prefix_checks(line: &str) -> String {
    let stripped = strip_comment_spans(line.trim_start());
    let collapsed = stripped
        .replace(FLOWTAB_MARKER, " ")
        .replace(FLOW_MARKER, " ")
        .replace(COMMON_MARKER, " ");
    collapsed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the tag ids of an arbitrary document line.
///
/// Used on its own by the swimlane checker, which resolves placed nodes
/// to lines anywhere in the document (fence state is not consulted
/// there).
pub fn tag_ids(line: &str) -> Vec<String> {
    for body in comment_bodies(line) {
        if let Some(payload) = body.trim_start().strip_prefix("tags:") {
            return id_list(payload, None);
        }
    }
    Vec::new()
}

/// Tokenize one tree line into its markers.
pub fn extract(line: &str) -> LineMarkers {
    let mut tag_ids: Option<Vec<String>> = None;
    let mut doattr_ids: Option<Vec<String>> = None;
    let mut do_binding: Option<String> = None;
    let mut has_expid = false;

    for body in comment_bodies(line) {
        let content = body.trim_start();
        if let Some(payload) = content.strip_prefix("tags:") {
            if tag_ids.is_none() {
                tag_ids = Some(id_list(payload, None));
            }
        } else if let Some(payload) = content.strip_prefix("doattrs:") {
            if doattr_ids.is_none() {
                doattr_ids = Some(id_list(payload, Some(MAX_ATTR_ID_LEN)));
            }
        } else if let Some(payload) = content.strip_prefix("do:") {
            if do_binding.is_none() && !payload.is_empty() {
                do_binding = Some(payload.trim().to_string());
            }
        } else if let Some(payload) = content.strip_prefix("expid:") {
            if !has_expid {
                has_expid = is_expid_payload(payload);
            }
        }
    }

    LineMarkers {
        title: title_for_prefix_checks(line),
        tag_ids: tag_ids.unwrap_or_default(),
        is_flow: line.contains(FLOW_MARKER),
        has_expid,
        do_id: do_binding.filter(|id| !id.is_empty()),
        doattr_ids: doattr_ids.unwrap_or_default(),
    }
}
