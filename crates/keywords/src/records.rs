//! Remote settings record types.

use serde::Deserialize;

/// One record in a remote settings collection.
///
/// Suggestion data and icons share this envelope; `kind` distinguishes
/// them (`data`, `offline-expansion-data`, `icon`).
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestRecord {
    /// Record id; icon records use the form `icon-<id>`.
    pub id: String,
    /// Record type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Server-side modification time.
    #[serde(default)]
    pub last_modified: u64,
    /// Payload location and metadata.
    pub attachment: Attachment,
}

/// Attachment metadata for a record.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// Path of the payload relative to the attachment host.
    pub location: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub mimetype: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub size: u64,
}

/// One keyword block from a suggestion attachment.
///
/// Maps a set of keywords to a single suggestion result. The
/// `full_keywords` list pairs each full keyword with the number of
/// entries in `keywords` it covers, in order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeywordBlock {
    /// Block id, reported as `block_id` in query results.
    pub id: u64,
    pub url: String,
    pub title: String,
    pub advertiser: String,
    /// IAB category, e.g. `22 - Shopping` for sponsored content.
    pub iab_category: String,
    /// Icon id as a string, matching an `icon-<id>` record.
    pub icon: String,
    #[serde(default)]
    pub click_url: Option<String>,
    #[serde(default)]
    pub impression_url: Option<String>,
    pub keywords: Vec<String>,
    /// `(full keyword, covered keyword count)` pairs.
    #[serde(default)]
    pub full_keywords: Vec<(String, usize)>,
}
