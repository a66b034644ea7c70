//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ReportDeskError`] via `#[from]`. Adapters box their own error types
//! into [`ReportDeskError::Storage`] so the domain never names them.

use std::num::ParseIntError;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum ReportDeskError {
    /// The caller supplied an unusable input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Input that could not be turned into a domain value.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A path identifier is not an integer.
    #[error("invalid id {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A request body is not a valid JSON document of the expected shape.
    #[error("malformed body: {0}")]
    MalformedBody(String),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"CriminalReport"`).
    pub entity: &'static str,
    /// Identifier that was looked up, rendered as text.
    pub id: String,
}
