//! Backend abstraction over one hierarchical data source
//!
//! A backend adapts one concrete data source (a content tree, a directory
//! tree, an external catalog) to the uniform capability set the rest of the
//! engine consumes. The tree navigator and the column pipeline depend only
//! on the [`Backend`] trait, never on a concrete implementation.
//!
//! # Module contents
//!
//! - `registry`: immutable item-type to backend mapping
//! - `memory`: programmatically built in-memory tree backend
//! - `fs`: directory-tree backend used by the companion CLI

pub mod fs;
pub mod memory;
pub mod registry;

pub use fs::FsBackend;
pub use memory::MemoryBackend;
pub use registry::{BackendRegistry, BackendRegistryBuilder};

use crate::error::Result;
use crate::item::Item;

/// Uniform interface over one hierarchical data source
///
/// A location's direct children are split into two disjoint partitions:
/// navigable children (`children`) and category children (`categories`).
/// This lets one hierarchy serve both a content-selection tree and a pure
/// category filter tree through the same traversal and serialization code.
pub trait Backend: Send + Sync {
    /// Load the item for the given backend key
    ///
    /// For navigable locations the key is the location id, so this call
    /// also resolves ids found in an item's ancestor path.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::NotFound` if the backend has no such item.
    fn load_item(&self, value: &str) -> Result<Item>;

    /// The backend-designated session roots, in stable backend order
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data source fails.
    fn root_locations(&self) -> Result<Vec<Item>>;

    /// Navigable children of a location, excluding category children
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data source fails.
    fn children(&self, location: &Item) -> Result<Vec<Item>>;

    /// Category children of a location, excluding navigable children
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data source fails.
    fn categories(&self, location: &Item) -> Result<Vec<Item>>;

    /// Cheap existence check for navigable children
    ///
    /// Implementations must not load full child sets to answer this.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data source fails.
    fn has_children(&self, location: &Item) -> Result<bool>;

    /// Cheap existence check for category children
    ///
    /// Implementations must not load full child sets to answer this.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data source fails.
    fn has_children_categories(&self, location: &Item) -> Result<bool>;

    /// Whether the location is one of the configured roots
    fn is_root_location(&self, location: &Item) -> bool;

    /// Whether the location equals, or descends from, one of the roots
    fn is_inside_root_locations(&self, location: &Item) -> bool;

    /// Static catalog of columns this backend can supply, as ordered
    /// `(id, label)` pairs
    ///
    /// Used by callers to build a configuration UI; navigation itself
    /// never consumes it.
    fn available_columns(&self) -> Vec<(String, String)>;
}

impl std::fmt::Debug for dyn Backend + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Backend")
    }
}
