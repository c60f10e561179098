//! Shared lookup context for the checking passes.
//!
//! [`ValidationContext`] is an immutable view of the document's lookup
//! tables, threaded explicitly through every pass. The tag-store
//! requirement — "the store must exist once a feature needing it is
//! used" — is tracked by a per-line [`TagStoreRequirement`] probe, which
//! records the violation at most once per triggering line.

use diregram_core::{DataObjectCatalog, TagStore};
use diregram_parser::{
    ParsedDocument,
    error::{Issue, IssueCode, IssueCollector},
};

/// Immutable lookup state shared by all passes of one run.
pub(crate) struct ValidationContext<'a> {
    tag_store: Option<&'a TagStore>,
    catalog: Option<&'a DataObjectCatalog>,
}

impl<'a> ValidationContext<'a> {
    pub(crate) fn new(document: &'a ParsedDocument) -> Self {
        Self {
            tag_store: document.tag_store(),
            catalog: document.data_objects(),
        }
    }

    /// The tag store, when the document declares one of the right shape.
    pub(crate) fn tag_store(&self) -> Option<&'a TagStore> {
        self.tag_store
    }

    /// The data-object catalog, when it declares at least one object.
    ///
    /// Attribute-existence checks are best-effort and stay silent when
    /// the catalog is absent or empty.
    pub(crate) fn catalog_in_effect(&self) -> Option<&'a DataObjectCatalog> {
        self.catalog.filter(|catalog| !catalog.is_empty())
    }
}

/// Per-line probe for the tag-store requirement.
///
/// Each tree line creates one probe; every feature on the line that
/// needs the store calls [`require`](TagStoreRequirement::require). When
/// the store is missing, the first call on the line records
/// [`IssueCode::MissingTagStore`] and later calls stay silent.
#[derive(Debug, Default)]
pub(crate) struct TagStoreRequirement {
    reported: bool,
}

impl TagStoreRequirement {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn require<'a>(
        &mut self,
        ctx: &ValidationContext<'a>,
        issues: &mut IssueCollector,
    ) -> Option<&'a TagStore> {
        match ctx.tag_store() {
            Some(store) => Some(store),
            None => {
                if !self.reported {
                    issues.emit(Issue::error(
                        IssueCode::MissingTagStore,
                        "Missing ```tag-store``` block (required when using tags and for actor enforcement).",
                    ));
                    self.reported = true;
                }
                None
            }
        }
    }
}
