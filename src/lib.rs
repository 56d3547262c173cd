//! Canopy - a backend-agnostic browsing engine for hierarchical data sources
//!
//! This library lets an application browse and select items from one or more
//! heterogeneous, hierarchically-organized data sources through a single
//! uniform interface. A data source is plugged in by implementing the
//! [`Backend`](backend::Backend) trait; everything above it (configuration,
//! tree navigation, column computation, boundary status mapping) is shared.
//!
//! # Architecture
//!
//! - `item`: the immutable value type for one backend entry
//! - `backend`: the `Backend` trait, the registry and the bundled backends
//! - `config`: per-item-type configuration and config loaders
//! - `columns`: column-value computation pipeline with pluggable strategies
//! - `tree`: root-scoped tree navigation and wire DTOs
//! - `boundary`: error-kind to external-status translation
//! - `selection`: selected-value to display-name resolution
//!
//! The core is synchronous: every operation is a blocking computation, and
//! any I/O happens inside a backend or renderer collaborator. The registry
//! and loaded configurations are read-only shared state; anything
//! request-scoped (parameter merging, navigation) works on clones or
//! borrows and never mutates shared instances.

pub mod backend;
pub mod boundary;
pub mod cli;
pub mod columns;
pub mod config;
pub mod error;
pub mod item;
pub mod selection;
pub mod tree;

#[cfg(test)]
pub mod testing;

pub use error::{BrowserError, Result};
pub use item::Item;
