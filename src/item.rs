//! The item value type
//!
//! [`Item`] is a pure data structure representing one entry from a backend.
//! Fields are public for direct access; construction goes through `new` plus
//! chained `with_*` setters so the path invariant holds from the start.

use std::collections::BTreeMap;

/// One entry from a backend's data source
///
/// `value` is the opaque backend-specific key used by forms and selection;
/// `id` identifies the item inside the backend's hierarchy. For navigable
/// locations the two usually coincide.
///
/// # Invariant
///
/// `path` lists ancestor ids from the backend's own root down to this item,
/// inclusive, so it always ends with the item's own id. Leading entries may
/// lie outside the configured root set; the tree navigator filters them out
/// when computing the visible ancestor path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Identifier inside the backend's hierarchy
    pub id: String,

    /// Display name
    pub name: String,

    /// Opaque backend-specific key used by forms and selection
    pub value: String,

    /// Parent id in the backend's native tree, if any
    pub parent_id: Option<String>,

    /// Ancestor ids from the backend's native root to this item, inclusive
    pub path: Vec<String>,

    /// Whether the item is enabled for selection
    pub is_enabled: bool,

    /// Backend-supplied column values, merged into serialized output
    /// without overriding the standard fields
    pub additional_columns: BTreeMap<String, String>,
}

impl Item {
    /// Create a new enabled item whose path contains only its own id
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            path: vec![id.clone()],
            id,
            name: name.into(),
            value: value.into(),
            parent_id: None,
            is_enabled: true,
            additional_columns: BTreeMap::new(),
        }
    }

    /// Set the parent id
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Set the ancestor path, appending the item's own id when missing
    #[must_use]
    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        if self.path.last() != Some(&self.id) {
            self.path.push(self.id.clone());
        }
        self
    }

    /// Set the enabled flag
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    /// Add a backend-supplied column value
    #[must_use]
    pub fn with_column(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_columns.insert(id.into(), value.into());
        self
    }
}
