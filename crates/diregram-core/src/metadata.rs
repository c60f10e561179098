//! The closed set of recognized metadata blocks.
//!
//! Fenced JSON blocks are keyed by their type label. After repeated labels
//! are resolved last-wins, each surviving value is classified into one
//! [`MetadataBlock`] variant; a label whose final value does not have the
//! expected JSON shape is demoted to [`MetadataBlock::Ignored`], as are
//! labels the validator does not recognize.

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::{catalog::DataObjectCatalog, tag_store::TagStore};

/// Label of the tag taxonomy block.
pub const TAG_STORE_LABEL: &str = "tag-store";

/// Label of the data-object catalog block.
pub const DATA_OBJECTS_LABEL: &str = "data-objects";

/// Label prefix of single-object UI-surface expansion records.
pub const EXPANDED_METADATA_PREFIX: &str = "expanded-metadata-";

/// Label prefix of list-shaped UI-surface expansion records.
pub const EXPANDED_GRID_PREFIX: &str = "expanded-grid-";

/// Label prefix of swimlane placement blocks.
pub const SWIMLANE_PREFIX: &str = "flowtab-swimlane-";

/// A data-object reference carried by an expanded metadata record.
#[derive(Debug, Clone, Default)]
pub struct ExpandedRecord {
    /// The referenced data-object id, when present as a string.
    pub data_object_id: Option<String>,
    /// The raw `dataObjectAttributeIds` list, when present as a list.
    ///
    /// Elements stay untyped: non-string entries count toward the
    /// list-is-non-empty gate but are skipped by the attribute check.
    pub attribute_ids: Option<Vec<Value>>,
}

impl ExpandedRecord {
    fn from_object(value: &Value) -> Self {
        ExpandedRecord {
            data_object_id: value
                .get("dataObjectId")
                .and_then(Value::as_str)
                .map(str::to_owned),
            attribute_ids: value
                .get("dataObjectAttributeIds")
                .and_then(Value::as_array)
                .cloned(),
        }
    }
}

/// A named lane of a swimlane block.
#[derive(Debug, Clone, Deserialize)]
pub struct LaneRecord {
    pub id: String,
    pub label: String,
}

/// A node placed into a lane.
#[derive(Debug, Clone)]
pub struct PlacedNode {
    /// Placement key, expected to be of the `node-<integer>` shape.
    pub node_id: String,
    /// The lane the node is placed in.
    pub lane_id: String,
}

/// Lanes and node placement of a `flowtab-swimlane-*` block.
#[derive(Debug, Clone, Default)]
pub struct SwimlaneBlock {
    pub lanes: Vec<LaneRecord>,
    /// Placement entries in document order.
    pub placement: Vec<PlacedNode>,
}

impl SwimlaneBlock {
    fn from_object(value: &Value) -> Self {
        let mut block = SwimlaneBlock::default();

        if let Some(lanes) = value.get("lanes").and_then(Value::as_array) {
            for entry in lanes {
                match serde_json::from_value::<LaneRecord>(entry.clone()) {
                    Ok(lane) => block.lanes.push(lane),
                    Err(_) => debug!("Skipping malformed swimlane lane entry"),
                }
            }
        }

        if let Some(placement) = value.get("placement").and_then(Value::as_object) {
            for (node_id, entry) in placement {
                let Some(lane_id) = entry
                    .as_object()
                    .and_then(|p| p.get("laneId"))
                    .and_then(Value::as_str)
                else {
                    debug!(node_id = node_id.as_str(); "Skipping swimlane placement entry without laneId");
                    continue;
                };
                block.placement.push(PlacedNode {
                    node_id: node_id.clone(),
                    lane_id: lane_id.to_string(),
                });
            }
        }

        block
    }
}

/// A classified metadata block.
#[derive(Debug, Clone)]
pub enum MetadataBlock {
    /// The `tag-store` taxonomy.
    TagStore(TagStore),
    /// The `data-objects` catalog.
    DataObjects(DataObjectCatalog),
    /// An `expanded-metadata-*` record (single object).
    ExpandedMetadata(ExpandedRecord),
    /// An `expanded-grid-*` record list. `None` entries mark list
    /// positions whose value was not an object; they keep the original
    /// 1-based indices stable for reporting.
    ExpandedGrid(Vec<Option<ExpandedRecord>>),
    /// A `flowtab-swimlane-*` placement block.
    Swimlane(SwimlaneBlock),
    /// Anything else: unknown labels, or known labels whose final value
    /// has the wrong JSON shape.
    Ignored,
}

impl MetadataBlock {
    /// Classify a label/value pair into the closed variant set.
    pub fn classify(label: &str, value: &Value) -> MetadataBlock {
        if label == TAG_STORE_LABEL {
            return match value.as_object() {
                Some(_) => MetadataBlock::TagStore(TagStore::from_value(value)),
                None => MetadataBlock::Ignored,
            };
        }
        if label == DATA_OBJECTS_LABEL {
            return match value.as_object() {
                Some(_) => MetadataBlock::DataObjects(DataObjectCatalog::from_value(value)),
                None => MetadataBlock::Ignored,
            };
        }
        if label.starts_with(EXPANDED_METADATA_PREFIX) {
            return match value.as_object() {
                Some(_) => MetadataBlock::ExpandedMetadata(ExpandedRecord::from_object(value)),
                None => MetadataBlock::Ignored,
            };
        }
        if label.starts_with(EXPANDED_GRID_PREFIX) {
            return match value.as_array() {
                Some(entries) => MetadataBlock::ExpandedGrid(
                    entries
                        .iter()
                        .map(|entry| entry.as_object().map(|_| ExpandedRecord::from_object(entry)))
                        .collect(),
                ),
                None => MetadataBlock::Ignored,
            };
        }
        if label.starts_with(SWIMLANE_PREFIX) {
            return match value.as_object() {
                Some(_) => MetadataBlock::Swimlane(SwimlaneBlock::from_object(value)),
                None => MetadataBlock::Ignored,
            };
        }
        MetadataBlock::Ignored
    }
}

/// Classify every resolved label/value pair, preserving order.
pub fn classify_blocks(values: &IndexMap<String, Value>) -> IndexMap<String, MetadataBlock> {
    values
        .iter()
        .map(|(label, value)| (label.clone(), MetadataBlock::classify(label, value)))
        .collect()
}
