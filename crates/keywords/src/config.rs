//! Keyword provider configuration.

use serde::Deserialize;

/// Configuration for [`KeywordProvider`](crate::KeywordProvider).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Provider name reported in suggestion records.
    pub provider: String,
    /// Remote settings bucket holding the collection.
    pub bucket: String,
    /// Remote settings collection with suggestion and icon records.
    pub collection: String,
    /// Relevance score attached to every suggestion.
    pub score: f64,
    /// Index `offline-expansion-data` records instead of `data` records.
    pub offline_expansion: bool,
    /// Re-fetch the index every this many seconds. `None` disables
    /// background resync.
    pub resync_interval: Option<u64>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            provider: "keywords".into(),
            bucket: "main".into(),
            collection: "quicksuggest".into(),
            score: 0.3,
            offline_expansion: false,
            resync_interval: None,
        }
    }
}
