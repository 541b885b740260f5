//! Keyword-matching suggestion provider.
//!
//! Serves suggestions for exact keyword hits against an index built from
//! a remote settings collection: suggestion records carry attachments of
//! keyword blocks, icon records map icon ids to CDN locations. The
//! backend is a trait seam so tests and alternative stores can swap out
//! the HTTP transport.

pub use backend::SuggestBackend;
pub use config::KeywordConfig;
pub use provider::KeywordProvider;
pub use records::{Attachment, KeywordBlock, SuggestRecord};
pub use remote_settings::RemoteSettings;

mod backend;
mod config;
mod provider;
mod records;
mod remote_settings;
