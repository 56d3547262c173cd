//! Command-line interface definitions and parsing
//!
//! Defines the CLI structure for the companion `canopy` binary using the
//! `clap` crate. The binary browses filesystem-backed item types defined
//! in a TOML configuration document and prints JSON results, which makes
//! it handy for inspecting a configuration or scripting against a tree.
//!
//! # Commands
//!
//! - **config**: print the tree config for an item type
//! - **children** / **categories**: print a location's children with its
//!   visible ancestor path
//! - **columns**: print the computed display columns for one item
//! - **preview**: print the preview markup for one item
//! - **names**: resolve display names for a stored selection

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments
#[derive(Debug, Parser)]
#[command(name = "canopy", version, about = "Browse hierarchical data sources from the command line")]
pub struct Cli {
    /// Path to the item-type configuration document
    /// (defaults to canopy/config.toml in the user config directory)
    #[arg(short, long, global = true)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the tree config for an item type
    Config {
        /// Item type to browse
        item_type: String,
    },

    /// Print the navigable children of a location
    Children {
        /// Item type to browse
        item_type: String,
        /// Location id (a directory path for filesystem item types)
        location: String,
    },

    /// Print the category children of a location
    Categories {
        /// Item type to browse
        item_type: String,
        /// Location id (a directory path for filesystem item types)
        location: String,
    },

    /// Print the computed display columns for an item
    Columns {
        /// Item type to browse
        item_type: String,
        /// Item value (backend key)
        value: String,
    },

    /// Print the preview markup for an item
    Preview {
        /// Item type to browse
        item_type: String,
        /// Item value (backend key)
        value: String,
    },

    /// Resolve display names for selected values
    Names {
        /// Item type to browse
        item_type: String,
        /// Selected values
        values: Vec<String>,
    },
}

impl Commands {
    /// The item type this command operates on
    #[must_use]
    pub fn item_type(&self) -> &str {
        match self {
            Self::Config { item_type }
            | Self::Children { item_type, .. }
            | Self::Categories { item_type, .. }
            | Self::Columns { item_type, .. }
            | Self::Preview { item_type, .. }
            | Self::Names { item_type, .. } => item_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_command() {
        let cli = Cli::try_parse_from(["canopy", "config", "docs"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { ref item_type } if item_type == "docs"));
        assert_eq!(cli.command.item_type(), "docs");
    }

    #[test]
    fn test_parse_children_with_config_file() {
        let cli = Cli::try_parse_from([
            "canopy",
            "children",
            "docs",
            "/srv/content",
            "--config-file",
            "/tmp/canopy.toml",
        ])
        .unwrap();
        assert_eq!(cli.config_file, Some(PathBuf::from("/tmp/canopy.toml")));
        assert!(matches!(
            cli.command,
            Commands::Children { ref location, .. } if location == "/srv/content"
        ));
    }

    #[test]
    fn test_parse_names_collects_values() {
        let cli = Cli::try_parse_from(["canopy", "names", "docs", "/a", "/b"]).unwrap();
        let Commands::Names { values, .. } = cli.command else {
            panic!("expected names command");
        };
        assert_eq!(values, vec!["/a".to_string(), "/b".into()]);
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["canopy"]).is_err());
    }
}
