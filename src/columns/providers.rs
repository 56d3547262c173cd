//! Bundled column value providers
//!
//! Backend-independent strategies over the standard item fields, plus a
//! provider reading backend-supplied extra columns. Backends with richer
//! data register their own strategies alongside these.

use std::collections::BTreeMap;

use super::ColumnValueProvider;
use crate::item::Item;

/// Provides the item's display name
pub struct NameProvider;

impl ColumnValueProvider for NameProvider {
    fn value(&self, item: &Item) -> String {
        item.name.clone()
    }
}

/// Provides the item's id
pub struct IdProvider;

impl ColumnValueProvider for IdProvider {
    fn value(&self, item: &Item) -> String {
        item.id.clone()
    }
}

/// Provides the item's backend key
pub struct ValueProvider;

impl ColumnValueProvider for ValueProvider {
    fn value(&self, item: &Item) -> String {
        item.value.clone()
    }
}

/// Provides the item's enabled flag as `"true"`/`"false"`
pub struct EnabledProvider;

impl ColumnValueProvider for EnabledProvider {
    fn value(&self, item: &Item) -> String {
        item.is_enabled.to_string()
    }
}

/// Provides one of the item's backend-supplied extra columns
pub struct ExtraColumnProvider {
    column: String,
}

impl ExtraColumnProvider {
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl ColumnValueProvider for ExtraColumnProvider {
    fn value(&self, item: &Item) -> String {
        item.additional_columns
            .get(&self.column)
            .cloned()
            .unwrap_or_default()
    }
}

/// The default strategy mapping: `name`, `id`, `value` and `enabled`
#[must_use]
pub fn defaults() -> BTreeMap<String, Box<dyn ColumnValueProvider>> {
    let mut providers: BTreeMap<String, Box<dyn ColumnValueProvider>> = BTreeMap::new();
    providers.insert("name".to_string(), Box::new(NameProvider));
    providers.insert("id".to_string(), Box::new(IdProvider));
    providers.insert("value".to_string(), Box::new(ValueProvider));
    providers.insert("enabled".to_string(), Box::new(EnabledProvider));
    providers
}
