//! Testing utilities for canopy
//!
//! Shared fixtures and collaborator stubs for unit tests: a sample
//! in-memory tree, a renderer that records its invocations and a value
//! provider returning a fixed string.
//!
//! Only available when compiled with `cfg(test)`.

use std::sync::Mutex;

use crate::backend::MemoryBackend;
use crate::columns::{ColumnValueProvider, ItemRenderer};
use crate::error::Result;
use crate::item::Item;

/// Build the sample tree used across test modules
///
/// ```text
/// root                (root location)
/// ├── news            child, extra column type=folder
/// │   ├── articles    child
/// │   └── topics      category
/// ├── media           child, disabled
/// └── archive         category
/// ```
#[must_use]
pub fn sample_tree() -> MemoryBackend {
    let mut backend = MemoryBackend::new();
    backend.add_root("root", "Root");
    backend.add_child("root", "news", "News");
    backend.add_child("news", "articles", "Articles");
    backend.add_category("news", "topics", "Topics");
    backend.add_child("root", "media", "Media");
    backend.add_category("root", "archive", "Archive");
    backend.set_column("news", "type", "folder");
    backend.set_enabled("media", false);
    backend.set_available_columns(vec![
        ("name".to_string(), "Name".to_string()),
        ("type".to_string(), "Type".to_string()),
    ]);
    backend
}

/// Renderer stub recording every `(item id, template)` invocation
pub struct RecordingRenderer {
    output: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingRenderer {
    /// Create a stub returning the given output for every render call
    #[must_use]
    pub fn returning(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The recorded invocations, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ItemRenderer for RecordingRenderer {
    fn render_item(&self, item: &Item, template: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((item.id.clone(), template.to_string()));
        Ok(self.output.clone())
    }
}

/// Value provider stub returning a fixed string for every item
pub struct FixedValueProvider {
    value: String,
}

impl FixedValueProvider {
    /// Create a stub returning the given value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl ColumnValueProvider for FixedValueProvider {
    fn value(&self, _item: &Item) -> String {
        self.value.clone()
    }
}
