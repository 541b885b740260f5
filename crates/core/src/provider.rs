//! Provider trait for pluggable suggestion sources.

use crate::{Availability, QueryError, SetupError, SuggestionRecord};

/// A pluggable suggestion source.
///
/// Concrete providers supply `initialize`, `query`, and
/// `enabled_by_default`; `hidden` and `availability` come with provided
/// implementations. Constructors are inherent methods on each provider,
/// never called polymorphically.
///
/// The host constructs a provider, awaits `initialize` once, then issues
/// zero or more `query` calls. Both async operations take `&self` so a
/// host can await many providers' initialize futures concurrently during
/// startup. What happens when `query` races `initialize`, or when
/// `initialize` runs twice, is provider-defined.
pub trait SuggestionProvider {
    /// Bootstrap the provider before it serves queries.
    ///
    /// This is where connections are established, caches warmed, and
    /// data loaded. Fails with [`SetupError`] when bootstrap cannot
    /// complete; retry policy is the host's call.
    fn initialize(&self) -> impl Future<Output = Result<(), SetupError>> + Send;

    /// Compute suggestions for the given query text.
    ///
    /// Returns an ordered list of records; provider-defined ordering,
    /// typically by relevance. An empty list means "no suggestions",
    /// not a failure.
    fn query(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SuggestionRecord>, QueryError>> + Send;

    /// Whether this provider is active without explicit opt-in.
    ///
    /// Pure and deterministic for a given configuration.
    fn enabled_by_default(&self) -> bool;

    /// Whether this provider is excluded from operator-facing listings.
    ///
    /// Hidden providers may still be queried.
    fn hidden(&self) -> bool {
        false
    }

    /// Operator-facing classification derived from `hidden` and
    /// `enabled_by_default`.
    ///
    /// `hidden` takes precedence: a hidden provider reports
    /// [`Availability::Hidden`] even when it is enabled by default.
    fn availability(&self) -> Availability {
        if self.hidden() {
            Availability::Hidden
        } else if self.enabled_by_default() {
            Availability::EnabledByDefault
        } else {
            Availability::DisabledByDefault
        }
    }
}
