//! Core suggestion provider interface.
//!
//! This crate provides the contract shared by all suggestion sources:
//! the [`SuggestionProvider`] trait, the open-ended [`SuggestionRecord`]
//! result type, the derived [`Availability`] classification, and the
//! error conditions raised during bootstrap and querying.

pub use availability::Availability;
pub use error::{QueryError, SetupError};
pub use noop::NoopProvider;
pub use provider::SuggestionProvider;
pub use record::SuggestionRecord;

mod availability;
mod error;
mod noop;
mod provider;
mod record;
