//! Backend registry
//!
//! Maps item-type identifiers to backend instances. The registry is built
//! once at bootstrap through [`BackendRegistryBuilder`] and is read-only
//! afterward, so concurrent sessions can share it by reference without
//! locking. Components receive the registry explicitly; there is no
//! ambient or global lookup.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::Backend;
use crate::error::{BrowserError, Result};

/// Immutable mapping from item type to backend
pub struct BackendRegistry {
    backends: HashMap<String, Arc<dyn Backend>>,
}

/// Bootstrap-time builder for [`BackendRegistry`]
#[derive(Default)]
pub struct BackendRegistryBuilder {
    backends: HashMap<String, Arc<dyn Backend>>,
}

impl BackendRegistryBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend for an item type, replacing any previous entry
    #[must_use]
    pub fn register(mut self, item_type: impl Into<String>, backend: Arc<dyn Backend>) -> Self {
        self.backends.insert(item_type.into(), backend);
        self
    }

    /// Finalize the registry
    #[must_use]
    pub fn build(self) -> BackendRegistry {
        debug!(backends = self.backends.len(), "backend registry built");
        BackendRegistry {
            backends: self.backends,
        }
    }
}

impl BackendRegistry {
    /// Look up the backend serving the given item type
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::NotFound` for an unregistered item type.
    /// This is a configuration error, not a transient failure.
    pub fn backend(&self, item_type: &str) -> Result<&dyn Backend> {
        self.backends
            .get(item_type)
            .map(AsRef::as_ref)
            .ok_or_else(|| {
                BrowserError::NotFound(format!("Backend for '{item_type}' item type does not exist"))
            })
    }

    /// Whether a backend is registered for the given item type
    #[must_use]
    pub fn has_backend(&self, item_type: &str) -> bool {
        self.backends.contains_key(item_type)
    }

    /// All registered item types, in no particular order
    #[must_use]
    pub fn item_types(&self) -> Vec<&str> {
        self.backends.keys().map(String::as_str).collect()
    }
}
