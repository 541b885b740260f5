//! Backend seam for the keyword provider.

use crate::records::{KeywordBlock, SuggestRecord};
use anyhow::Result;

/// Storage backend serving suggestion records and attachments.
///
/// `Clone + Send + Sync + 'static` so the provider can hand a copy to
/// its background resync task. Constructors are inherent methods on
/// each backend, never called polymorphically.
pub trait SuggestBackend: Clone + Send + Sync + 'static {
    /// Fetch all records of a collection.
    fn get(
        &self,
        bucket: &str,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<SuggestRecord>>> + Send;

    /// Download and decode a suggestion attachment.
    fn fetch_attachment(
        &self,
        location: &str,
    ) -> impl Future<Output = Result<Vec<KeywordBlock>>> + Send;

    /// Resolve the public URL of an icon attachment.
    fn icon_url(&self, location: &str) -> String;
}
