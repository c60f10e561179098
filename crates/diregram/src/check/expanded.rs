//! Attribute linkage inside expanded metadata blocks.
//!
//! `expanded-metadata-*` blocks carry one data-object reference;
//! `expanded-grid-*` blocks carry a list of them. Both re-use the
//! do/doattrs rule from the tree pass: attribute ids require an object
//! id, and when the catalog knows the object, every attribute id must be
//! in its allowed set. The whole pass is best-effort and only runs when
//! the catalog declares at least one object.

use diregram_core::{DataObjectCatalog, MetadataBlock, metadata::ExpandedRecord};
use diregram_parser::{
    ParsedDocument,
    error::{Issue, IssueCode, IssueCollector},
};

use crate::check::context::ValidationContext;

/// Run the expanded-metadata pass over every block, in label order.
pub(crate) fn check(
    document: &ParsedDocument,
    ctx: &ValidationContext<'_>,
    issues: &mut IssueCollector,
) {
    let Some(catalog) = ctx.catalog_in_effect() else {
        return;
    };

    for (label, block) in document.blocks() {
        match block {
            MetadataBlock::ExpandedMetadata(record) => {
                check_record(label, None, record, catalog, issues);
            }
            MetadataBlock::ExpandedGrid(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    if let Some(record) = entry {
                        check_record(label, Some(index + 1), record, catalog, issues);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Check one expanded record. `grid_index` is the 1-based position for
/// grid entries and `None` for single-object blocks.
fn check_record(
    label: &str,
    grid_index: Option<usize>,
    record: &ExpandedRecord,
    catalog: &DataObjectCatalog,
    issues: &mut IssueCollector,
) {
    let Some(attribute_ids) = record.attribute_ids.as_ref() else {
        return;
    };
    if attribute_ids.is_empty() {
        return;
    }

    let subject = match grid_index {
        Some(position) => format!("```{label}``` grid node #{position}"),
        None => format!("```{label}```"),
    };

    let data_object_id = record
        .data_object_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());
    let Some(data_object_id) = data_object_id else {
        issues.emit(Issue::error(
            IssueCode::DoattrsWithoutDo,
            format!("{subject} includes dataObjectAttributeIds but has no dataObjectId."),
        ));
        return;
    };

    let Some(allowed) = catalog.attributes(data_object_id) else {
        return;
    };

    for value in attribute_ids {
        let Some(attribute_id) = value.as_str() else {
            continue;
        };
        let attribute_id = attribute_id.trim();
        if attribute_id.is_empty() || allowed.contains(attribute_id) {
            continue;
        }
        issues.emit(Issue::warning(
            IssueCode::UnknownDataObjectAttributeId,
            format!(
                "{subject} references unknown attribute \"{attribute_id}\" for data object \"{data_object_id}\"."
            ),
        ));
    }
}
