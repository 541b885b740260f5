//! Error conditions raised by suggestion providers.

use thiserror::Error;

/// Bootstrap failure raised by `initialize`.
#[derive(Debug, Error)]
#[error("provider setup failed: {0}")]
pub struct SetupError(#[from] pub anyhow::Error);

/// Suggestion computation failure raised by `query`.
#[derive(Debug, Error)]
#[error("suggestion query failed: {0}")]
pub struct QueryError(#[from] pub anyhow::Error);

impl SetupError {
    /// Wrap any error as a setup failure.
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }
}

impl QueryError {
    /// Wrap any error as a query failure.
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }
}
