//! Boundary translation of internal errors to external statuses
//!
//! The surrounding request layer calls [`convert`] on every failure that
//! escapes the core. Conversion applies only to master requests flagged as
//! browsing-API requests; nested sub-requests and unflagged requests pass
//! through untouched so internal error identity is preserved for any
//! enclosing error handling. Errors already carrying an external status
//! also pass through unchanged.
//!
//! The kind-to-status table is closed and matched first to last:
//!
//! | kind            | status |
//! |-----------------|--------|
//! | NotFound        | 404    |
//! | OutOfBounds     | 422    |
//! | InvalidArgument | 400    |
//! | AccessDenied    | 403    |
//!
//! Anything outside the table (Runtime, wrapped collaborator errors) stays
//! uncategorized.

use thiserror::Error;

use crate::error::{BrowserError, ErrorKind};

/// Whether the failing request is the top-level request of its session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestScope {
    /// Top-level request; eligible for status conversion
    Master,
    /// Nested sub-request; never converted
    Sub,
}

/// An error carrying an external status code
///
/// The original message is preserved verbatim and the original error stays
/// reachable through the `source()` chain.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StatusError {
    status: u16,
    message: String,
    #[source]
    source: BrowserError,
}

impl StatusError {
    /// Wrap an internal error with an external status
    #[must_use]
    pub fn new(status: u16, source: BrowserError) -> Self {
        Self {
            status,
            message: source.to_string(),
            source,
        }
    }

    /// The external status code
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// The preserved internal message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An error observed at the boundary: converted or still internal
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Carries an external status
    #[error(transparent)]
    Status(#[from] StatusError),

    /// Passed through unconverted
    #[error(transparent)]
    Internal(BrowserError),
}

impl From<BrowserError> for BoundaryError {
    fn from(error: BrowserError) -> Self {
        Self::Internal(error)
    }
}

/// First-match kind-to-status table
const STATUS_TABLE: &[(ErrorKind, u16)] = &[
    (ErrorKind::NotFound, 404),
    (ErrorKind::OutOfBounds, 422),
    (ErrorKind::InvalidArgument, 400),
    (ErrorKind::AccessDenied, 403),
];

/// Translate an error escaping the core, per the boundary policy
///
/// Only master requests flagged as browsing-API requests are converted;
/// everything else (and every error outside the status table, or already
/// carrying a status) is returned unchanged.
#[must_use]
pub fn convert(error: BoundaryError, scope: RequestScope, api_request: bool) -> BoundaryError {
    if scope != RequestScope::Master || !api_request {
        return error;
    }

    let BoundaryError::Internal(inner) = error else {
        return error;
    };

    match STATUS_TABLE
        .iter()
        .find(|(kind, _)| *kind == inner.kind())
    {
        Some((_, status)) => BoundaryError::Status(StatusError::new(*status, inner)),
        None => BoundaryError::Internal(inner),
    }
}
