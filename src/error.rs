//! Error types for the browsing engine
//!
//! All failures raised by the core are variants of [`BrowserError`]. Errors
//! are raised at the point of detection and propagated with `?`; the core
//! never retries or recovers internally. The boundary layer (see
//! [`crate::boundary`]) translates error kinds to external status codes.

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, BrowserError>;

/// Error enum, contains all failure states of the browsing engine
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Unknown item, location, item type or configuration
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed configuration or invalid caller input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value outside its semantically valid range
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// Raised by callers enforcing access control upstream of the core
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Unexpected failure during request-scoped setup
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Represents a configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Closed enumeration of error kinds, used by the boundary status table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    OutOfBounds,
    AccessDenied,
    Runtime,
}

impl BrowserError {
    /// Returns the kind of this error
    ///
    /// Wrapped collaborator errors (configuration files, I/O) are
    /// uncategorized and report as `Runtime`.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::OutOfBounds(_) => ErrorKind::OutOfBounds,
            Self::AccessDenied(_) => ErrorKind::AccessDenied,
            Self::Runtime(_) | Self::Config(_) | Self::Io(_) => ErrorKind::Runtime,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
