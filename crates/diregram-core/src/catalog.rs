//! The data-object catalog declared by a document's `data-objects` block.
//!
//! Maps each declared data-object id to the set of attribute ids a
//! `doattrs:` marker (or an expanded metadata block) may reference.

use indexmap::{IndexMap, IndexSet};
use log::debug;
use serde_json::Value;

/// Synthetic attribute id representing the object's own name.
///
/// Every object allows it in addition to its declared attribute ids.
pub const OBJECT_NAME_ATTRIBUTE_ID: &str = "__objectName__";

/// Lookup table built from a `data-objects` metadata block.
#[derive(Debug, Clone, Default)]
pub struct DataObjectCatalog {
    objects: IndexMap<String, IndexSet<String>>,
}

impl DataObjectCatalog {
    /// Build a catalog from the JSON value of a `data-objects` block.
    ///
    /// The value is expected to be an object with an `objects` sequence;
    /// each entry contributes its string `id` (trimmed, non-empty) and the
    /// string `id`s of its nested `data.attributes` list. Malformed
    /// entries are skipped individually. A repeated object id overwrites
    /// the earlier entry.
    pub fn from_value(value: &Value) -> Self {
        let mut catalog = DataObjectCatalog::default();

        let Some(objects) = value.get("objects").and_then(Value::as_array) else {
            return catalog;
        };

        for entry in objects {
            let Some(object) = entry.as_object() else {
                debug!("Skipping non-object data-objects entry");
                continue;
            };
            let Some(id) = object.get("id").and_then(Value::as_str) else {
                debug!("Skipping data-objects entry without a string id");
                continue;
            };
            let id = id.trim();
            if id.is_empty() {
                continue;
            }

            let mut attributes = IndexSet::new();
            attributes.insert(OBJECT_NAME_ATTRIBUTE_ID.to_string());

            if let Some(declared) = object
                .get("data")
                .and_then(Value::as_object)
                .and_then(|data| data.get("attributes"))
                .and_then(Value::as_array)
            {
                for attribute in declared {
                    let Some(attribute_id) = attribute
                        .as_object()
                        .and_then(|a| a.get("id"))
                        .and_then(Value::as_str)
                    else {
                        continue;
                    };
                    let attribute_id = attribute_id.trim();
                    if !attribute_id.is_empty() {
                        attributes.insert(attribute_id.to_string());
                    }
                }
            }

            catalog.objects.insert(id.to_string(), attributes);
        }

        catalog
    }

    /// The allowed attribute ids of a data object, if it is declared.
    pub fn attributes(&self, object_id: &str) -> Option<&IndexSet<String>> {
        self.objects.get(object_id)
    }

    /// Whether no objects are declared at all.
    ///
    /// The attribute-existence checks are best-effort and only run when
    /// the catalog carries at least one object.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of declared objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_value_builds_attribute_sets() {
        let catalog = DataObjectCatalog::from_value(&json!({
            "objects": [
                {
                    "id": "do-application",
                    "data": {"attributes": [{"id": "status"}, {"id": " submittedAt "}]}
                },
                {"id": "do-bare"}
            ]
        }));

        assert_eq!(catalog.len(), 2);

        let attrs = catalog.attributes("do-application").unwrap();
        assert!(attrs.contains(OBJECT_NAME_ATTRIBUTE_ID));
        assert!(attrs.contains("status"));
        assert!(attrs.contains("submittedAt"));

        // Objects without declared attributes still allow the own-name id.
        let attrs = catalog.attributes("do-bare").unwrap();
        assert_eq!(attrs.len(), 1);
        assert!(attrs.contains(OBJECT_NAME_ATTRIBUTE_ID));
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let catalog = DataObjectCatalog::from_value(&json!({
            "objects": [
                {"id": "  "},
                {"id": 9},
                "junk",
                {"id": "ok", "data": {"attributes": [{"id": ""}, {"name": "x"}, 3]}}
            ]
        }));

        assert_eq!(catalog.len(), 1);
        let attrs = catalog.attributes("ok").unwrap();
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_missing_or_invalid_objects_field() {
        assert!(DataObjectCatalog::from_value(&json!({})).is_empty());
        assert!(DataObjectCatalog::from_value(&json!({"objects": "nope"})).is_empty());
    }

    #[test]
    fn test_non_list_attributes_keep_object() {
        let catalog = DataObjectCatalog::from_value(&json!({
            "objects": [{"id": "do1", "data": {"attributes": "oops"}}]
        }));

        let attrs = catalog.attributes("do1").unwrap();
        assert_eq!(attrs.len(), 1);
        assert!(attrs.contains(OBJECT_NAME_ATTRIBUTE_ID));
    }
}
