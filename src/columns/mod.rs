//! Column-value computation pipeline
//!
//! [`ColumnProvider`] turns an item into a row of display values, one per
//! configured column, by dispatching each column either to the item
//! renderer (template columns) or to a named [`ColumnValueProvider`]
//! strategy. Every referenced provider name is validated eagerly at
//! construction so a misconfiguration fails at startup, not mid-session.

pub mod providers;
pub mod renderer;

pub use renderer::{ItemRenderer, PlaceholderRenderer, render_preview};

use std::collections::BTreeMap;

use crate::config::{ColumnSpec, Configuration};
use crate::error::{BrowserError, Result};
use crate::item::Item;

/// Strategy computing one display value for an item
pub trait ColumnValueProvider: Send + Sync {
    /// Compute the value for the given item
    fn value(&self, item: &Item) -> String;
}

/// Computes the configured row of display columns for an item
pub struct ColumnProvider<'a> {
    renderer: &'a dyn ItemRenderer,
    config: &'a Configuration,
    value_providers: BTreeMap<String, Box<dyn ColumnValueProvider>>,
}

impl std::fmt::Debug for ColumnProvider<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnProvider").finish_non_exhaustive()
    }
}

impl<'a> ColumnProvider<'a> {
    /// Create a provider for the given configuration
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::InvalidArgument` naming the missing provider
    /// if any configured column references a value provider that is absent
    /// from the strategy mapping.
    pub fn new(
        renderer: &'a dyn ItemRenderer,
        config: &'a Configuration,
        value_providers: BTreeMap<String, Box<dyn ColumnValueProvider>>,
    ) -> Result<Self> {
        for column in config.columns() {
            if let ColumnSpec::ValueProvider(name) = &column.spec
                && !value_providers.contains_key(name)
            {
                return Err(BrowserError::InvalidArgument(format!(
                    "Column value provider \"{name}\" does not exist"
                )));
            }
        }

        Ok(Self {
            renderer,
            config,
            value_providers,
        })
    }

    /// Compute all configured columns for the item, in configuration order
    ///
    /// # Errors
    ///
    /// Propagates renderer errors from template columns unchanged.
    pub fn provide_columns(&self, item: &Item) -> Result<Vec<(String, String)>> {
        self.config
            .columns()
            .iter()
            .map(|column| {
                let value = match &column.spec {
                    ColumnSpec::Template(template) => {
                        self.renderer.render_item(item, template)?
                    }
                    // Present by construction
                    ColumnSpec::ValueProvider(name) => {
                        self.value_providers[name].value(item)
                    }
                };
                Ok((column.id.clone(), value))
            })
            .collect()
    }
}
