//! Selected-value to display-name resolution
//!
//! Form layers prefill widgets with the names of already-selected items.
//! A stored selection can outlive the items it points at, so values the
//! backend no longer knows are skipped; this is the only place in the
//! engine where `NotFound` is swallowed. An unknown item type still fails
//! loudly through the registry.

use crate::backend::{Backend, BackendRegistry};
use crate::error::{BrowserError, Result};

/// Resolve the display names of selected values
///
/// Returns `(value, name)` pairs for every value the backend still
/// knows, in the caller's selection order. A value appearing more than
/// once in the selection is resolved once.
///
/// # Errors
///
/// Returns `BrowserError::NotFound` for an unregistered item type and
/// propagates any backend failure other than a missing item.
pub fn item_names(
    registry: &BackendRegistry,
    item_type: &str,
    values: &[String],
) -> Result<Vec<(String, String)>> {
    let backend = registry.backend(item_type)?;

    let mut names: Vec<(String, String)> = Vec::new();
    for value in values {
        match backend.load_item(value) {
            Ok(item) => {
                if !names.iter().any(|(value, _)| *value == item.value) {
                    names.push((item.value, item.name));
                }
            }
            Err(BrowserError::NotFound(_)) => {}
            Err(error) => return Err(error),
        }
    }

    Ok(names)
}
