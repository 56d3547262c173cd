//! Root-scoped tree navigation
//!
//! [`TreeNavigator`] answers hierarchy queries for one browsing session,
//! given a backend, a configuration and an item renderer. It produces the
//! wire DTOs of the tree surface:
//!
//! - tree config: root set plus configuration-derived metadata
//! - children / categories of a location, each annotated with its own
//!   existence flag, together with the root-truncated ancestor path
//!
//! # Serialization policy
//!
//! Every surfaced location is serialized with `parent_id` forced to null
//! when the location is itself a configured root, so a client can never
//! navigate above its session scope. Backend-supplied extra columns are
//! merged into the output without overriding the standard fields.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::backend::Backend;
use crate::columns::ItemRenderer;
use crate::config::Configuration;
use crate::error::Result;
use crate::item::Item;

/// One entry of a backend's static column catalog
#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    pub id: String,
    pub label: String,
}

/// Tree config response: session roots plus selection/column metadata
#[derive(Debug, Serialize)]
pub struct TreeConfig {
    pub name: String,
    pub root_locations: Vec<Value>,
    pub min_selected: Option<u32>,
    pub max_selected: Option<u32>,
    pub default_columns: Vec<String>,
    pub available_columns: Vec<ColumnInfo>,
}

/// One ancestor entry of a location's visible path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub id: String,
    pub name: String,
}

/// Children or categories of a location, with its visible ancestor path
#[derive(Debug, Serialize)]
pub struct LocationList {
    pub path: Vec<PathEntry>,
    pub children: Vec<Value>,

    /// Number of ancestors dropped from `path` because they lie outside
    /// the configured roots. Diagnostic only, never serialized; callers
    /// that need to detect unexpected truncation can inspect it.
    #[serde(skip)]
    pub truncated_ancestors: usize,
}

/// Stateless navigator over one `(backend, configuration)` pair
pub struct TreeNavigator<'a> {
    backend: &'a dyn Backend,
    config: &'a Configuration,
    renderer: &'a dyn ItemRenderer,
}

impl<'a> TreeNavigator<'a> {
    /// Create a navigator for one browsing session
    #[must_use]
    pub fn new(
        backend: &'a dyn Backend,
        config: &'a Configuration,
        renderer: &'a dyn ItemRenderer,
    ) -> Self {
        Self {
            backend,
            config,
            renderer,
        }
    }

    /// The tree config: annotated root set plus configuration metadata
    ///
    /// Root annotation uses the backend's cheap existence checks; full
    /// child sets are never loaded here.
    ///
    /// # Errors
    ///
    /// Propagates backend and renderer failures.
    pub fn tree_config(&self) -> Result<TreeConfig> {
        debug!(item_type = self.config.item_type(), "tree config query");

        let mut root_locations = Vec::new();
        for root in self.backend.root_locations()? {
            let has_children = self.backend.has_children(&root)?;
            let mut serialized = self.serialize_location(&root, has_children)?;
            if let Value::Object(map) = &mut serialized {
                map.insert(
                    "has_children_categories".to_string(),
                    json!(self.backend.has_children_categories(&root)?),
                );
            }
            root_locations.push(serialized);
        }

        let available_columns = self
            .backend
            .available_columns()
            .into_iter()
            .map(|(id, label)| ColumnInfo { id, label })
            .collect();

        Ok(TreeConfig {
            name: self.config.name().to_string(),
            root_locations,
            min_selected: self.config.min_selected(),
            max_selected: self.config.max_selected(),
            default_columns: self.config.default_columns(),
            available_columns,
        })
    }

    /// Navigable children of a location, with its visible ancestor path
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::NotFound` for an unknown location id and
    /// propagates backend and renderer failures.
    pub fn children(&self, location_id: &str) -> Result<LocationList> {
        debug!(item_type = self.config.item_type(), location_id, "children query");

        let location = self.backend.load_item(location_id)?;
        let children = self.backend.children(&location)?;

        let mut serialized = Vec::with_capacity(children.len());
        for child in &children {
            let has_children = self.backend.has_children(child)?;
            serialized.push(self.serialize_location(child, has_children)?);
        }

        let (path, truncated_ancestors) = self.location_path(&location)?;
        Ok(LocationList {
            path,
            children: serialized,
            truncated_ancestors,
        })
    }

    /// Category children of a location, with its visible ancestor path
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::NotFound` for an unknown location id and
    /// propagates backend and renderer failures.
    pub fn categories(&self, location_id: &str) -> Result<LocationList> {
        debug!(item_type = self.config.item_type(), location_id, "categories query");

        let location = self.backend.load_item(location_id)?;
        let categories = self.backend.categories(&location)?;

        let mut serialized = Vec::with_capacity(categories.len());
        for category in &categories {
            let has_children = self.backend.has_children_categories(category)?;
            serialized.push(self.serialize_location(category, has_children)?);
        }

        let (path, truncated_ancestors) = self.location_path(&location)?;
        Ok(LocationList {
            path,
            children: serialized,
            truncated_ancestors,
        })
    }

    /// Compute the visible ancestor path of a location
    ///
    /// Walks the location's native path in order, resolves each ancestor
    /// through the backend and keeps only ancestors inside the configured
    /// roots. The location's own entry is never included. Returns the
    /// surviving entries plus the count of silently dropped ancestors.
    fn location_path(&self, location: &Item) -> Result<(Vec<PathEntry>, usize)> {
        let mut path = Vec::new();
        let mut truncated = 0;

        for ancestor_id in &location.path {
            if *ancestor_id == location.id {
                continue;
            }

            let ancestor = self.backend.load_item(ancestor_id)?;
            if !self.backend.is_inside_root_locations(&ancestor) {
                truncated += 1;
                continue;
            }

            path.push(PathEntry {
                id: ancestor.id,
                name: ancestor.name,
            });
        }

        Ok((path, truncated))
    }

    /// Serialize one location per the serialization policy
    fn serialize_location(&self, location: &Item, has_children: bool) -> Result<Value> {
        let html = match self.config.template() {
            Some(template) => self.renderer.render_item(location, template)?,
            None => String::new(),
        };

        // Roots never claim a parent, even when the backend's native tree
        // gives them one
        let parent_id = if self.backend.is_root_location(location) {
            Value::Null
        } else {
            json!(location.parent_id)
        };

        let mut map = serde_json::Map::new();
        map.insert("id".to_string(), json!(location.id));
        map.insert("parent_id".to_string(), parent_id);
        map.insert("name".to_string(), json!(location.name));
        map.insert("enabled".to_string(), json!(location.is_enabled));
        map.insert("has_children".to_string(), json!(has_children));
        map.insert("html".to_string(), json!(html));

        for (column, value) in &location.additional_columns {
            map.entry(column.clone()).or_insert_with(|| json!(value));
        }

        Ok(Value::Object(map))
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod navigator_tests;
