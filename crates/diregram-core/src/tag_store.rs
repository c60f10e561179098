//! The tag taxonomy declared by a document's `tag-store` block.
//!
//! A [`TagStore`] holds the declared tag-group ids and the tag-id →
//! group-id table. It is built once per document from the last `tag-store`
//! block and consulted by every tag-related check.

use indexmap::{IndexMap, IndexSet};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Group id every flow line's actor tag must belong to.
pub const ACTOR_GROUP_ID: &str = "tg-actors";

/// Group id every expid line's UI-surface tag must belong to.
pub const UI_SURFACE_GROUP_ID: &str = "tg-uiSurface";

/// Fallback id prefix classifying a tag as an actor tag even when the
/// tag-store does not place it in the actor group.
pub const ACTOR_TAG_PREFIX: &str = "actor-";

/// A declared tag group.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupRecord {
    pub id: String,
}

/// A declared tag and the group it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct TagRecord {
    pub id: String,
    #[serde(rename = "groupId")]
    pub group_id: String,
}

/// Lookup tables built from a `tag-store` metadata block.
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    groups: IndexSet<String>,
    tag_to_group: IndexMap<String, String>,
}

impl TagStore {
    /// Build a tag store from the JSON value of a `tag-store` block.
    ///
    /// The value is expected to be an object with `groups` (sequence of
    /// objects with a string `id`) and `tags` (sequence of objects with
    /// string `id` and `groupId`). Entries that do not match are skipped
    /// individually.
    pub fn from_value(value: &Value) -> Self {
        let mut store = TagStore::default();

        if let Some(groups) = value.get("groups").and_then(Value::as_array) {
            for entry in groups {
                match serde_json::from_value::<GroupRecord>(entry.clone()) {
                    Ok(group) => {
                        store.groups.insert(group.id);
                    }
                    Err(_) => debug!("Skipping malformed tag-store group entry"),
                }
            }
        }

        if let Some(tags) = value.get("tags").and_then(Value::as_array) {
            for entry in tags {
                match serde_json::from_value::<TagRecord>(entry.clone()) {
                    Ok(tag) => {
                        store.tag_to_group.insert(tag.id, tag.group_id);
                    }
                    Err(_) => debug!("Skipping malformed tag-store tag entry"),
                }
            }
        }

        store
    }

    /// Whether the given group id is declared.
    pub fn declares_group(&self, group_id: &str) -> bool {
        self.groups.contains(group_id)
    }

    /// The group a tag id belongs to, if the tag is declared.
    pub fn group_of(&self, tag_id: &str) -> Option<&str> {
        self.tag_to_group.get(tag_id).map(String::as_str)
    }

    /// Number of declared tags.
    pub fn tag_count(&self) -> usize {
        self.tag_to_group.len()
    }
}

/// Classify the tags of a line that belong to the actor group.
///
/// A tag qualifies when the store places it in [`ACTOR_GROUP_ID`] or when
/// its id carries the [`ACTOR_TAG_PREFIX`] fallback. Works with a missing
/// store: the prefix fallback still applies.
pub fn actor_tags<'a>(tag_ids: &'a [String], store: Option<&TagStore>) -> Vec<&'a str> {
    tag_ids
        .iter()
        .filter(|id| {
            store.is_some_and(|s| s.group_of(id) == Some(ACTOR_GROUP_ID))
                || id.starts_with(ACTOR_TAG_PREFIX)
        })
        .map(String::as_str)
        .collect()
}

/// Classify the tags of a line that belong to the UI-surface group.
///
/// Unlike actor tags there is no id-prefix fallback; membership is decided
/// by the store alone.
pub fn ui_surface_tags<'a>(tag_ids: &'a [String], store: Option<&TagStore>) -> Vec<&'a str> {
    tag_ids
        .iter()
        .filter(|id| store.is_some_and(|s| s.group_of(id) == Some(UI_SURFACE_GROUP_ID)))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_store() -> TagStore {
        TagStore::from_value(&json!({
            "groups": [{"id": "tg-actors"}, {"id": "tg-uiSurface"}],
            "tags": [
                {"id": "actor-staff", "groupId": "tg-actors"},
                {"id": "ui-portal", "groupId": "tg-uiSurface"},
                {"id": "topic-billing", "groupId": "tg-topics"}
            ]
        }))
    }

    #[test]
    fn test_from_value_builds_tables() {
        let store = sample_store();

        assert!(store.declares_group("tg-actors"));
        assert!(store.declares_group("tg-uiSurface"));
        assert!(!store.declares_group("tg-missing"));
        assert_eq!(store.group_of("actor-staff"), Some("tg-actors"));
        assert_eq!(store.group_of("topic-billing"), Some("tg-topics"));
        assert_eq!(store.group_of("nope"), None);
        assert_eq!(store.tag_count(), 3);
    }

    #[test]
    fn test_malformed_entries_skipped_individually() {
        let store = TagStore::from_value(&json!({
            "groups": [{"id": "tg-actors"}, {"id": 7}, "junk"],
            "tags": [
                {"id": "actor-staff", "groupId": "tg-actors"},
                {"id": "missing-group"},
                {"groupId": "tg-actors"},
                42
            ]
        }));

        assert!(store.declares_group("tg-actors"));
        assert_eq!(store.tag_count(), 1);
        assert_eq!(store.group_of("actor-staff"), Some("tg-actors"));
    }

    #[test]
    fn test_non_object_fields_yield_empty_store() {
        let store = TagStore::from_value(&json!({"groups": "oops", "tags": null}));

        assert_eq!(store.tag_count(), 0);
        assert!(!store.declares_group("tg-actors"));
    }

    #[test]
    fn test_actor_tags_by_group_and_prefix() {
        let store = sample_store();
        let ids = vec![
            "actor-staff".to_string(),
            "actor-undeclared".to_string(),
            "topic-billing".to_string(),
        ];

        let actors = actor_tags(&ids, Some(&store));
        assert_eq!(actors, vec!["actor-staff", "actor-undeclared"]);

        // Prefix fallback works without a store.
        let actors = actor_tags(&ids, None);
        assert_eq!(actors, vec!["actor-staff", "actor-undeclared"]);
    }

    #[test]
    fn test_ui_surface_tags_have_no_prefix_fallback() {
        let store = sample_store();
        let ids = vec!["ui-portal".to_string(), "ui-undeclared".to_string()];

        assert_eq!(ui_surface_tags(&ids, Some(&store)), vec!["ui-portal"]);
        assert!(ui_surface_tags(&ids, None).is_empty());
    }
}
