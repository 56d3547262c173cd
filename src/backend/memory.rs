//! In-memory tree backend
//!
//! A backend over a programmatically built tree, used for fixtures, doc
//! examples and tests. Nodes carry an explicit category flag, an enabled
//! flag and extra column values. The configured root set defaults to the
//! native top-level nodes but can be re-scoped to any subset of the tree,
//! which is how out-of-root ancestor truncation is exercised.

use std::collections::BTreeMap;

use super::Backend;
use crate::error::{BrowserError, Result};
use crate::item::Item;

struct Node {
    name: String,
    parent: Option<String>,
    children: Vec<String>,
    is_category: bool,
    is_enabled: bool,
    columns: BTreeMap<String, String>,
}

/// Backend over an in-memory tree
#[derive(Default)]
pub struct MemoryBackend {
    nodes: BTreeMap<String, Node>,
    roots: Vec<String>,
    available_columns: Vec<(String, String)>,
}

impl MemoryBackend {
    /// Create an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a native top-level node and register it as a root location
    pub fn add_root(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        self.nodes.insert(
            id.clone(),
            Node {
                name: name.into(),
                parent: None,
                children: Vec::new(),
                is_category: false,
                is_enabled: true,
                columns: BTreeMap::new(),
            },
        );
        self.roots.push(id);
    }

    /// Add a navigable child under an existing node
    ///
    /// # Panics
    ///
    /// Panics if the parent id is unknown or the id is already taken;
    /// fixtures are built up front and a dangling parent or duplicate id
    /// is a bug in the fixture itself.
    pub fn add_child(
        &mut self,
        parent: &str,
        id: impl Into<String>,
        name: impl Into<String>,
    ) {
        self.insert_node(parent, id.into(), name.into(), false);
    }

    /// Add a category child under an existing node
    ///
    /// # Panics
    ///
    /// Panics if the parent id is unknown or the id is already taken.
    pub fn add_category(
        &mut self,
        parent: &str,
        id: impl Into<String>,
        name: impl Into<String>,
    ) {
        self.insert_node(parent, id.into(), name.into(), true);
    }

    fn insert_node(&mut self, parent: &str, id: String, name: String, is_category: bool) {
        assert!(self.nodes.contains_key(parent), "unknown parent '{parent}'");
        assert!(!self.nodes.contains_key(&id), "duplicate node '{id}'");
        self.nodes.insert(
            id.clone(),
            Node {
                name,
                parent: Some(parent.to_string()),
                children: Vec::new(),
                is_category,
                is_enabled: true,
                columns: BTreeMap::new(),
            },
        );
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(id);
        }
    }

    /// Replace the configured root set with an arbitrary set of node ids
    ///
    /// Lets a session scope start below (or across) the native top level,
    /// leaving the rest of the tree outside the visible hierarchy.
    pub fn scope_roots(&mut self, ids: Vec<String>) {
        self.roots = ids;
    }

    /// Toggle a node's enabled flag
    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.is_enabled = enabled;
        }
    }

    /// Set an extra column value on a node
    pub fn set_column(&mut self, id: &str, column: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.columns.insert(column.into(), value.into());
        }
    }

    /// Declare the static column catalog
    pub fn set_available_columns(&mut self, columns: Vec<(String, String)>) {
        self.available_columns = columns;
    }

    fn native_path(&self, id: &str) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = Some(id.to_string());
        while let Some(node_id) = current {
            current = self.nodes.get(&node_id).and_then(|n| n.parent.clone());
            path.push(node_id);
        }
        path.reverse();
        path
    }

    fn item(&self, id: &str, node: &Node) -> Item {
        let mut item = Item::new(id, node.name.clone(), id)
            .with_path(self.native_path(id))
            .with_enabled(node.is_enabled);
        if let Some(parent) = &node.parent {
            item = item.with_parent(parent.clone());
        }
        for (column, value) in &node.columns {
            item = item.with_column(column.clone(), value.clone());
        }
        item
    }

    fn node(&self, id: &str) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| BrowserError::NotFound(format!("Item '{id}' does not exist")))
    }
}

impl Backend for MemoryBackend {
    fn load_item(&self, value: &str) -> Result<Item> {
        self.node(value).map(|node| self.item(value, node))
    }

    fn root_locations(&self) -> Result<Vec<Item>> {
        self.roots
            .iter()
            .map(|id| self.load_item(id))
            .collect()
    }

    fn children(&self, location: &Item) -> Result<Vec<Item>> {
        let node = self.node(&location.id)?;
        Ok(node
            .children
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|n| (id, n)))
            .filter(|(_, n)| !n.is_category)
            .map(|(id, n)| self.item(id, n))
            .collect())
    }

    fn categories(&self, location: &Item) -> Result<Vec<Item>> {
        let node = self.node(&location.id)?;
        Ok(node
            .children
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|n| (id, n)))
            .filter(|(_, n)| n.is_category)
            .map(|(id, n)| self.item(id, n))
            .collect())
    }

    fn has_children(&self, location: &Item) -> Result<bool> {
        // Answered from the node table without materializing child items
        let node = self.node(&location.id)?;
        Ok(node
            .children
            .iter()
            .any(|id| self.nodes.get(id).is_some_and(|n| !n.is_category)))
    }

    fn has_children_categories(&self, location: &Item) -> Result<bool> {
        let node = self.node(&location.id)?;
        Ok(node
            .children
            .iter()
            .any(|id| self.nodes.get(id).is_some_and(|n| n.is_category)))
    }

    fn is_root_location(&self, location: &Item) -> bool {
        self.roots.iter().any(|root| *root == location.id)
    }

    fn is_inside_root_locations(&self, location: &Item) -> bool {
        location
            .path
            .iter()
            .any(|ancestor| self.roots.contains(ancestor))
    }

    fn available_columns(&self) -> Vec<(String, String)> {
        self.available_columns.clone()
    }
}
