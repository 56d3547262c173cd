//! Filesystem backend
//!
//! Adapts a directory tree to the backend interface: directories are
//! navigable locations, dot-directories are category children, and the
//! configured root directories form the session root set. Item keys are
//! absolute path strings. Plain files are not part of the hierarchy.
//!
//! Existence checks probe `read_dir` and stop at the first matching entry
//! instead of listing whole directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::Backend;
use crate::error::{BrowserError, Result};
use crate::item::Item;

/// Backend over one or more directory trees
#[derive(Debug)]
pub struct FsBackend {
    roots: Vec<PathBuf>,
}

fn is_category(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string)
}

impl FsBackend {
    /// Create a backend rooted at the given directories
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::NotFound` if any root is not an existing
    /// directory; a missing root is a configuration error.
    pub fn new(roots: Vec<PathBuf>) -> Result<Self> {
        for root in &roots {
            if !root.is_dir() {
                return Err(BrowserError::NotFound(format!(
                    "Root directory '{}' does not exist",
                    root.display()
                )));
            }
        }
        Ok(Self { roots })
    }

    fn item_for(&self, path: &Path) -> Item {
        let key = path.display().to_string();
        let mut ancestors: Vec<String> = path
            .ancestors()
            .map(|p| p.display().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        ancestors.reverse();

        let mut item = Item::new(key.clone(), display_name(path), key)
            .with_path(ancestors);
        if let Some(parent) = path.parent() {
            item = item.with_parent(parent.display().to_string());
        }
        item.with_column("path", path.display().to_string())
    }

    fn resolve(&self, value: &str) -> Result<PathBuf> {
        let path = PathBuf::from(value);
        if path.is_dir() {
            Ok(path)
        } else {
            Err(BrowserError::NotFound(format!(
                "Directory '{value}' does not exist"
            )))
        }
    }

    fn list(&self, location: &Item, categories: bool) -> Result<Vec<Item>> {
        let path = self.resolve(&location.id)?;
        let mut entries: Vec<PathBuf> = fs::read_dir(&path)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|entry| entry.is_dir() && is_category(entry) == categories)
            .collect();
        entries.sort();
        Ok(entries.iter().map(|entry| self.item_for(entry)).collect())
    }

    fn probe(&self, location: &Item, categories: bool) -> Result<bool> {
        let path = self.resolve(&location.id)?;
        let entries = match fs::read_dir(&path) {
            Ok(entries) => entries,
            Err(error) => {
                trace!(path = %path.display(), %error, "child probe failed");
                return Err(error.into());
            }
        };
        for entry in entries.filter_map(std::result::Result::ok) {
            let entry = entry.path();
            if entry.is_dir() && is_category(&entry) == categories {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Backend for FsBackend {
    fn load_item(&self, value: &str) -> Result<Item> {
        self.resolve(value).map(|path| self.item_for(&path))
    }

    fn root_locations(&self) -> Result<Vec<Item>> {
        Ok(self.roots.iter().map(|root| self.item_for(root)).collect())
    }

    fn children(&self, location: &Item) -> Result<Vec<Item>> {
        self.list(location, false)
    }

    fn categories(&self, location: &Item) -> Result<Vec<Item>> {
        self.list(location, true)
    }

    fn has_children(&self, location: &Item) -> Result<bool> {
        self.probe(location, false)
    }

    fn has_children_categories(&self, location: &Item) -> Result<bool> {
        self.probe(location, true)
    }

    fn is_root_location(&self, location: &Item) -> bool {
        let path = Path::new(&location.id);
        self.roots.iter().any(|root| root.as_path() == path)
    }

    fn is_inside_root_locations(&self, location: &Item) -> bool {
        let path = Path::new(&location.id);
        self.roots.iter().any(|root| path.starts_with(root))
    }

    fn available_columns(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), "Name".to_string()),
            ("path".to_string(), "Path".to_string()),
        ]
    }
}
