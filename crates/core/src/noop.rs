//! No-op suggestion provider.
//!
//! Implements [`SuggestionProvider`] with an empty result set for every
//! query. Intended for tests and for wiring hosts that exercise
//! provider bookkeeping without a real suggestion source.

use crate::{QueryError, SetupError, SuggestionProvider, SuggestionRecord};

/// A provider that never has suggestions.
///
/// Initialization always succeeds and every query returns the empty
/// list. Not enabled by default; a host has to opt in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProvider;

impl SuggestionProvider for NoopProvider {
    async fn initialize(&self) -> Result<(), SetupError> {
        Ok(())
    }

    async fn query(&self, _query: &str) -> Result<Vec<SuggestionRecord>, QueryError> {
        Ok(Vec::new())
    }

    fn enabled_by_default(&self) -> bool {
        false
    }
}
