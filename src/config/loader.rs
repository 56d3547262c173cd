//! Configuration loaders
//!
//! A [`ConfigLoader`] resolves an item-type key to a [`Configuration`].
//! Two implementations are bundled:
//!
//! - [`FileConfigLoader`] reads item-type sections from a TOML document,
//!   rebuilding the configuration on every call
//! - [`CachedConfigLoader`] wraps any loader with a process-wide cache and
//!   hands out clones, so cached instances stay read-only shared state
//!
//! Column specifications are validated while loading: each column must
//! declare exactly one of `template` and `value_provider`, so a malformed
//! document fails at load time rather than mid-navigation.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use moka::sync::Cache;
use serde::Deserialize;
use tracing::debug;

use super::{ColumnDef, ColumnSpec, Configuration, ParamValue};
use crate::error::{BrowserError, Result};

/// Resolves item-type keys to configurations
pub trait ConfigLoader: Send + Sync {
    /// Load the configuration for the given item type
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::NotFound` if no configuration exists for the
    /// item type, and `BrowserError::InvalidArgument` for a malformed one.
    fn load_config(&self, item_type: &str) -> Result<Configuration>;
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    item_types: HashMap<String, RawItemType>,
}

#[derive(Debug, Deserialize)]
struct RawItemType {
    name: String,
    #[serde(default)]
    min_selected: Option<u32>,
    #[serde(default)]
    max_selected: Option<u32>,
    #[serde(default)]
    columns: Vec<RawColumn>,
    #[serde(default)]
    template: Option<String>,
    #[serde(default)]
    has_preview: bool,
    #[serde(default)]
    parameters: BTreeMap<String, ParamValue>,
}

#[derive(Debug, Deserialize)]
struct RawColumn {
    id: String,
    #[serde(default)]
    template: Option<String>,
    #[serde(default)]
    value_provider: Option<String>,
}

impl RawColumn {
    fn into_column_def(self, item_type: &str) -> Result<ColumnDef> {
        let spec = match (self.template, self.value_provider) {
            (Some(template), None) => ColumnSpec::Template(template),
            (None, Some(provider)) => ColumnSpec::ValueProvider(provider),
            _ => {
                return Err(BrowserError::InvalidArgument(format!(
                    "Column '{}' of item type '{item_type}' must declare exactly one of \
                     'template' and 'value_provider'",
                    self.id
                )));
            }
        };
        Ok(ColumnDef { id: self.id, spec })
    }
}

fn build_configuration(item_type: &str, raw: RawItemType) -> Result<Configuration> {
    let columns = raw
        .columns
        .into_iter()
        .map(|column| column.into_column_def(item_type))
        .collect::<Result<Vec<_>>>()?;

    let mut config = Configuration::new(item_type, raw.name)
        .with_selection_bounds(raw.min_selected, raw.max_selected)
        .with_columns(columns)
        .with_preview(raw.has_preview);
    if let Some(template) = raw.template {
        config = config.with_template(template);
    }
    for (name, value) in raw.parameters {
        config.set_parameter(name, value);
    }
    Ok(config)
}

/// Loader reading item-type sections from a TOML document
pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    /// Create a loader for the given document
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            BrowserError::Runtime("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("canopy").join("config.toml"))
    }

    /// Create a loader for the document in the user's config directory
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self, item_type: &str) -> Result<Configuration> {
        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::from(self.path.clone()).format(::config::FileFormat::Toml),
            )
            .build()?;

        let document: RawDocument = settings.try_deserialize()?;
        let raw = document.item_types.into_iter().find_map(|(key, value)| {
            (key == item_type).then_some(value)
        });

        let Some(raw) = raw else {
            return Err(BrowserError::NotFound(format!(
                "Configuration for item type '{item_type}' does not exist"
            )));
        };

        debug!(item_type, path = %self.path.display(), "configuration loaded");
        build_configuration(item_type, raw)
    }
}

/// Loader wrapping another loader with a process-wide cache
///
/// Cached configurations are shared read-only; callers that merge
/// request-scoped parameters do so on the clone this loader returns.
pub struct CachedConfigLoader<L> {
    inner: L,
    cache: Cache<String, Configuration>,
}

impl<L: ConfigLoader> CachedConfigLoader<L> {
    /// Wrap a loader with a cache
    #[must_use]
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: Cache::new(64),
        }
    }
}

impl<L: ConfigLoader> ConfigLoader for CachedConfigLoader<L> {
    fn load_config(&self, item_type: &str) -> Result<Configuration> {
        if let Some(config) = self.cache.get(item_type) {
            return Ok(config);
        }

        let config = self.inner.load_config(item_type)?;
        self.cache.insert(item_type.to_string(), config.clone());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SAMPLE_DOCUMENT: &str = r#"
[item_types.pages]
name = "Pages"
min_selected = 3
max_selected = 1
template = "{name}"
has_preview = true

[[item_types.pages.columns]]
id = "name"
value_provider = "name"

[[item_types.pages.columns]]
id = "preview"
template = "{name} ({id})"

[item_types.pages.parameters]
section = "frontpage"
depth = 2
"#;

    fn write_document(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_from_file() {
        let file = write_document(SAMPLE_DOCUMENT);
        let loader = FileConfigLoader::new(file.path());

        let config = loader.load_config("pages").unwrap();
        assert_eq!(config.item_type(), "pages");
        assert_eq!(config.name(), "Pages");
        assert_eq!(config.template(), Some("{name}"));
        assert!(config.has_preview());
        assert_eq!(config.default_columns(), vec!["name", "preview"]);
        assert_eq!(
            config.parameter("section"),
            Some(&ParamValue::Str("frontpage".into()))
        );
        assert_eq!(config.parameter("depth"), Some(&ParamValue::Int(2)));
    }

    #[test]
    fn test_load_config_normalizes_bounds() {
        let file = write_document(SAMPLE_DOCUMENT);
        let loader = FileConfigLoader::new(file.path());

        let config = loader.load_config("pages").unwrap();
        assert_eq!(config.min_selected(), Some(3));
        assert_eq!(config.max_selected(), Some(3));
    }

    #[test]
    fn test_load_config_unknown_item_type_fails_not_found() {
        let file = write_document(SAMPLE_DOCUMENT);
        let loader = FileConfigLoader::new(file.path());

        let error = loader.load_config("products").unwrap_err();
        assert!(matches!(error, BrowserError::NotFound(_)));
        assert!(error.to_string().contains("products"));
    }

    #[test]
    fn test_load_config_rejects_column_with_both_strategies() {
        let file = write_document(
            r#"
[item_types.pages]
name = "Pages"

[[item_types.pages.columns]]
id = "name"
template = "t"
value_provider = "p"
"#,
        );
        let loader = FileConfigLoader::new(file.path());

        let error = loader.load_config("pages").unwrap_err();
        assert!(matches!(error, BrowserError::InvalidArgument(_)));
    }

    #[test]
    fn test_load_config_rejects_column_with_no_strategy() {
        let file = write_document(
            r#"
[item_types.pages]
name = "Pages"

[[item_types.pages.columns]]
id = "name"
"#,
        );
        let loader = FileConfigLoader::new(file.path());

        let error = loader.load_config("pages").unwrap_err();
        assert!(matches!(error, BrowserError::InvalidArgument(_)));
    }

    struct CountingLoader {
        calls: AtomicUsize,
    }

    impl ConfigLoader for CountingLoader {
        fn load_config(&self, item_type: &str) -> Result<Configuration> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Configuration::new(item_type, "Counted"))
        }
    }

    #[test]
    fn test_cached_loader_loads_once_per_item_type() {
        let loader = CachedConfigLoader::new(CountingLoader {
            calls: AtomicUsize::new(0),
        });

        loader.load_config("pages").unwrap();
        loader.load_config("pages").unwrap();
        loader.load_config("media").unwrap();

        assert_eq!(loader.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cached_loader_returns_clones() {
        let loader = CachedConfigLoader::new(CountingLoader {
            calls: AtomicUsize::new(0),
        });

        let mut first = loader.load_config("pages").unwrap();
        first.set_parameter("scratch", "request-scoped");

        let second = loader.load_config("pages").unwrap();
        assert!(!second.has_parameter("scratch"));
    }
}
