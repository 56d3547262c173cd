//! Per-item-type configuration
//!
//! A [`Configuration`] bundles everything that drives browsing behavior for
//! one item type: display name, selection cardinality bounds, ordered
//! column specifications, the optional item template, the preview flag and
//! a string-to-scalar custom parameter bag.
//!
//! Configurations are constructed once by a loader (see [`loader`]) and
//! treated as immutable shared state for the duration of a session; the
//! only post-construction mutation is the explicit parameter bag, which a
//! request-scoped caller applies to its own clone.

pub mod loader;

pub use loader::{CachedConfigLoader, ConfigLoader, FileConfigLoader};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BrowserError, Result};

/// Specification of one display column
///
/// Exactly one rendering strategy per column: either a template reference
/// handed to the item renderer, or the name of a registered column value
/// provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    /// Render the item through the given template
    Template(String),
    /// Invoke the named value provider strategy
    ValueProvider(String),
}

/// One configured column: identifier plus rendering strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: String,
    pub spec: ColumnSpec,
}

/// Scalar value held in the custom parameter bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Behavior settings for one item type
#[derive(Debug, Clone)]
pub struct Configuration {
    item_type: String,
    name: String,
    min_selected: Option<u32>,
    max_selected: Option<u32>,
    columns: Vec<ColumnDef>,
    template: Option<String>,
    has_preview: bool,
    parameters: BTreeMap<String, ParamValue>,
}

impl Configuration {
    /// Create a configuration with no bounds, columns or template
    #[must_use]
    pub fn new(item_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            name: name.into(),
            min_selected: None,
            max_selected: None,
            columns: Vec::new(),
            template: None,
            has_preview: false,
            parameters: BTreeMap::new(),
        }
    }

    /// Set the selection bounds
    ///
    /// When both bounds are set and `max < min`, `max` is clamped up to
    /// `min` so the pair always satisfies `max >= min`.
    #[must_use]
    pub fn with_selection_bounds(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_selected = min;
        self.max_selected = match (min, max) {
            (Some(min), Some(max)) if max < min => Some(min),
            _ => max,
        };
        self
    }

    /// Set the ordered column list
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<ColumnDef>) -> Self {
        self.columns = columns;
        self
    }

    /// Set the item template
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the preview flag
    #[must_use]
    pub const fn with_preview(mut self, has_preview: bool) -> Self {
        self.has_preview = has_preview;
        self
    }

    /// The item-type key this configuration belongs to
    #[must_use]
    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// Human-readable name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum number of selected items, if bounded
    #[must_use]
    pub const fn min_selected(&self) -> Option<u32> {
        self.min_selected
    }

    /// Maximum number of selected items, if bounded
    #[must_use]
    pub const fn max_selected(&self) -> Option<u32> {
        self.max_selected
    }

    /// Columns in configuration order
    #[must_use]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Column identifiers in configuration order
    #[must_use]
    pub fn default_columns(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.id.clone()).collect()
    }

    /// The item template, if configured
    #[must_use]
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Whether item preview is enabled
    #[must_use]
    pub const fn has_preview(&self) -> bool {
        self.has_preview
    }

    /// Read a custom parameter
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParamValue> {
        self.parameters.get(name)
    }

    /// Whether a custom parameter is set
    #[must_use]
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Set a custom parameter
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.parameters.insert(name.into(), value.into());
    }

    /// Merge a caller-supplied JSON payload into the parameter bag
    ///
    /// Payload entries override existing parameters of the same name.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::Runtime` when the payload is not a mapping,
    /// and `BrowserError::InvalidArgument` when one of its values is not a
    /// scalar.
    pub fn merge_parameters(&mut self, payload: &serde_json::Value) -> Result<()> {
        let Some(entries) = payload.as_object() else {
            return Err(BrowserError::Runtime(
                "Custom parameters payload is not a mapping".to_string(),
            ));
        };

        for (name, value) in entries {
            let value = match value {
                serde_json::Value::String(s) => ParamValue::Str(s.clone()),
                serde_json::Value::Bool(b) => ParamValue::Bool(*b),
                serde_json::Value::Number(n) => n.as_i64().map_or_else(
                    || ParamValue::Float(n.as_f64().unwrap_or_default()),
                    ParamValue::Int,
                ),
                _ => {
                    return Err(BrowserError::InvalidArgument(format!(
                        "Custom parameter '{name}' is not a scalar"
                    )));
                }
            };
            self.parameters.insert(name.clone(), value);
        }

        Ok(())
    }
}
