//! Metadata block loading.
//!
//! Every labeled fenced block's body is parsed as JSON. A body that does
//! not parse becomes an [`IssueCode::InvalidJson`] error and is omitted
//! from the lookup, leaving any earlier good block for the same label in
//! place. A later block that parses overwrites an earlier one for the
//! same label: last-wins is the documented policy for repeated labels.
//! Classification into the closed [`MetadataBlock`] set happens after
//! that resolution, so only a label's final value decides its variant.

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use diregram_core::metadata::{self, MetadataBlock};

use crate::{
    error::{Issue, IssueCode, IssueCollector},
    scanner::RawBlock,
};

/// Parse, resolve, and classify the document's labeled fenced blocks.
pub(crate) fn load(
    raw_blocks: &[RawBlock],
    issues: &mut IssueCollector,
) -> IndexMap<String, MetadataBlock> {
    let mut values: IndexMap<String, Value> = IndexMap::new();

    for block in raw_blocks {
        if block.label.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(&block.body) {
            Ok(value) => {
                // IndexMap keeps the first-seen position on overwrite,
                // which matches the documented last-wins resolution.
                values.insert(block.label.clone(), value);
            }
            Err(err) => {
                issues.emit(Issue::error(
                    IssueCode::InvalidJson,
                    format!("Invalid JSON in ```{}```: {}", block.label, err),
                ));
            }
        }
    }

    debug!(count = values.len(); "Resolved labeled metadata blocks");
    metadata::classify_blocks(&values)
}
