//! Canopy CLI application entry point
//!
//! Command-line front end over the browsing engine: item types are defined
//! in a TOML document, each backed by one or more root directories on the
//! local filesystem, and every command prints its result as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Print the tree config for the "docs" item type
//! canopy config docs
//!
//! # List children / categories of a location
//! canopy children docs /srv/content
//! canopy categories docs /srv/content
//!
//! # Compute display columns or preview markup for one item
//! canopy columns docs /srv/content/guides
//! canopy preview docs /srv/content/guides
//!
//! # Resolve names for a stored selection
//! canopy names docs /srv/content/guides /srv/content/api
//! ```
//!
//! # Configuration
//!
//! The configuration document lives at `canopy/config.toml` in the user
//! config directory (override with `--config-file`). Each item type names
//! its root directories in a `roots` parameter:
//!
//! ```toml
//! [item_types.docs]
//! name = "Documentation"
//! min_selected = 1
//!
//! [[item_types.docs.columns]]
//! id = "name"
//! value_provider = "name"
//!
//! [item_types.docs.parameters]
//! roots = "/srv/content"
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;

use canopy::backend::{Backend, BackendRegistry, BackendRegistryBuilder, FsBackend};
use canopy::boundary::{self, BoundaryError, RequestScope};
use canopy::cli::{Cli, Commands};
use canopy::columns::{ColumnProvider, PlaceholderRenderer, providers, render_preview};
use canopy::config::{ConfigLoader, Configuration, FileConfigLoader, ParamValue};
use canopy::error::BrowserError;
use canopy::selection;
use canopy::tree::TreeNavigator;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        // The CLI is the master browsing-API surface of this binary
        let error = boundary::convert(error, RequestScope::Master, true);
        match &error {
            BoundaryError::Status(status) => {
                eprintln!("{} {} [{}]", "error:".red().bold(), status.message(), status.status());
            }
            BoundaryError::Internal(inner) => {
                eprintln!("{} {inner}", "error:".red().bold());
            }
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BoundaryError> {
    let loader = match &cli.config_file {
        Some(path) => FileConfigLoader::new(path),
        None => FileConfigLoader::from_default_location()?,
    };

    let item_type = cli.command.item_type().to_string();
    let config = loader.load_config(&item_type)?;
    let registry = build_registry(&item_type, &config)?;
    let backend = registry.backend(&item_type)?;
    let renderer = PlaceholderRenderer;

    match cli.command {
        Commands::Config { .. } => {
            let navigator = TreeNavigator::new(backend, &config, &renderer);
            print_json(&navigator.tree_config()?)?;
        }
        Commands::Children { location, .. } => {
            let navigator = TreeNavigator::new(backend, &config, &renderer);
            print_json(&navigator.children(&location)?)?;
        }
        Commands::Categories { location, .. } => {
            let navigator = TreeNavigator::new(backend, &config, &renderer);
            print_json(&navigator.categories(&location)?)?;
        }
        Commands::Columns { value, .. } => {
            let item = backend.load_item(&value)?;
            let provider = ColumnProvider::new(&renderer, &config, providers::defaults())?;
            let mut columns = serde_json::Map::new();
            for (id, value) in provider.provide_columns(&item)? {
                columns.insert(id, serde_json::Value::String(value));
            }
            print_json(&columns)?;
        }
        Commands::Preview { value, .. } => {
            let item = backend.load_item(&value)?;
            println!("{}", render_preview(&config, &renderer, &item)?);
        }
        Commands::Names { values, .. } => {
            let names: Vec<serde_json::Value> = selection::item_names(&registry, &item_type, &values)?
                .into_iter()
                .map(|(value, name)| serde_json::json!({ "value": value, "name": name }))
                .collect();
            print_json(&names)?;
        }
    }

    Ok(())
}

/// Build a single-entry registry for the requested item type
fn build_registry(item_type: &str, config: &Configuration) -> Result<BackendRegistry, BrowserError> {
    let roots = match config.parameter("roots") {
        Some(ParamValue::Str(roots)) => roots
            .split(',')
            .map(str::trim)
            .filter(|root| !root.is_empty())
            .map(PathBuf::from)
            .collect::<Vec<_>>(),
        Some(_) => {
            return Err(BrowserError::InvalidArgument(format!(
                "Parameter 'roots' of item type '{item_type}' must be a string"
            )));
        }
        None => {
            return Err(BrowserError::InvalidArgument(format!(
                "Item type '{item_type}' does not name any root directories"
            )));
        }
    };

    let backend = FsBackend::new(roots)?;
    Ok(BackendRegistryBuilder::new()
        .register(item_type, Arc::new(backend))
        .build())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), BrowserError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|error| BrowserError::Runtime(format!("Failed to serialize result: {error}")))?;
    println!("{rendered}");
    Ok(())
}
