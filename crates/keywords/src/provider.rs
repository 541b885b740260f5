//! Keyword suggestion provider.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use anyhow::Result;
use parking_lot::{Mutex, RwLock};
use suggest_core::{QueryError, SetupError, SuggestionProvider, SuggestionRecord};
use tokio::task::JoinHandle;

use crate::backend::SuggestBackend;
use crate::config::KeywordConfig;
use crate::records::KeywordBlock;

/// IAB category marking sponsored content.
const SPONSORED_IAB_CATEGORY: &str = "22 - Shopping";

/// Suggestion provider matching exact keywords against an indexed
/// remote settings collection.
///
/// `initialize` builds the index; until then every query sees an empty
/// index and returns no suggestions. Initializing again re-fetches and
/// swaps the index in place.
pub struct KeywordProvider<B: SuggestBackend> {
    backend: B,
    config: KeywordConfig,
    index: Arc<RwLock<Index>>,
    /// Epoch seconds of the last successful fetch, 0 before the first.
    last_fetch_at: Arc<AtomicI64>,
    resync: Mutex<Option<JoinHandle<()>>>,
}

/// Keyword index built from a collection snapshot.
#[derive(Debug, Default)]
struct Index {
    /// keyword -> (index into `results`, index into that block's
    /// `full_keywords`).
    suggestions: HashMap<String, (usize, usize)>,
    results: Vec<KeywordBlock>,
    /// icon id -> public icon URL.
    icons: HashMap<u64, String>,
}

impl<B: SuggestBackend> KeywordProvider<B> {
    /// Create a provider over the given backend.
    pub fn new(backend: B, config: KeywordConfig) -> Self {
        Self {
            backend,
            config,
            index: Arc::new(RwLock::new(Index::default())),
            last_fetch_at: Arc::new(AtomicI64::new(0)),
            resync: Mutex::new(None),
        }
    }

    /// Epoch seconds of the last successful index fetch.
    pub fn last_fetch_at(&self) -> Option<i64> {
        match self.last_fetch_at.load(Ordering::Relaxed) {
            0 => None,
            at => Some(at),
        }
    }

    /// Number of indexed keywords.
    pub fn keyword_count(&self) -> usize {
        self.index.read().suggestions.len()
    }

    /// Start the background resync task if configured and not running.
    fn start_resync(&self) {
        let Some(secs) = self.config.resync_interval else {
            return;
        };
        let mut slot = self.resync.lock();
        if slot.is_some() {
            return;
        }
        let backend = self.backend.clone();
        let config = self.config.clone();
        let index = Arc::clone(&self.index);
        let last_fetch_at = Arc::clone(&self.last_fetch_at);
        *slot = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(secs));
            // The first tick fires immediately; skip it, initialize
            // already fetched.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match fetch_index(&backend, &config).await {
                    Ok(fresh) => {
                        *index.write() = fresh;
                        last_fetch_at.store(chrono::Utc::now().timestamp(), Ordering::Relaxed);
                        tracing::debug!("keyword index resynced");
                    }
                    Err(e) => tracing::warn!("keyword index resync failed: {e:#}"),
                }
            }
        }));
    }
}

impl<B: SuggestBackend> SuggestionProvider for KeywordProvider<B> {
    async fn initialize(&self) -> Result<(), SetupError> {
        let fresh = fetch_index(&self.backend, &self.config)
            .await
            .map_err(SetupError::new)?;
        tracing::debug!(
            "keyword index built: {} keywords, {} results, {} icons",
            fresh.suggestions.len(),
            fresh.results.len(),
            fresh.icons.len()
        );
        *self.index.write() = fresh;
        self.last_fetch_at
            .store(chrono::Utc::now().timestamp(), Ordering::Relaxed);
        self.start_resync();
        Ok(())
    }

    async fn query(&self, query: &str) -> Result<Vec<SuggestionRecord>, QueryError> {
        let index = self.index.read();
        let Some(&(result_idx, fkw_idx)) = index.suggestions.get(query) else {
            return Ok(Vec::new());
        };
        let block = &index.results[result_idx];
        let full_keyword = block
            .full_keywords
            .get(fkw_idx)
            .map(|(kw, _)| kw.as_str())
            .unwrap_or(query);
        let icon = block
            .icon
            .parse::<u64>()
            .ok()
            .and_then(|id| index.icons.get(&id).cloned());

        let mut record = SuggestionRecord::new();
        record
            .insert("block_id", block.id)
            .insert("full_keyword", full_keyword)
            .insert("title", block.title.as_str())
            .insert("url", block.url.as_str())
            .insert("impression_url", block.impression_url.clone())
            .insert("click_url", block.click_url.clone())
            .insert("provider", self.config.provider.as_str())
            .insert("advertiser", block.advertiser.as_str())
            .insert("is_sponsored", block.iab_category == SPONSORED_IAB_CATEGORY)
            .insert("icon", icon)
            .insert("score", self.config.score);
        Ok(vec![record])
    }

    fn enabled_by_default(&self) -> bool {
        true
    }
}

impl<B: SuggestBackend> Drop for KeywordProvider<B> {
    fn drop(&mut self) {
        if let Some(task) = self.resync.lock().take() {
            task.abort();
        }
    }
}

/// Fetch a collection snapshot and build the keyword index.
async fn fetch_index<B: SuggestBackend>(backend: &B, config: &KeywordConfig) -> Result<Index> {
    let records = backend.get(&config.bucket, &config.collection).await?;
    let wanted = if config.offline_expansion {
        "offline-expansion-data"
    } else {
        "data"
    };

    let mut index = Index::default();
    for record in &records {
        if record.kind == wanted {
            let blocks = backend.fetch_attachment(&record.attachment.location).await?;
            for block in blocks {
                let result_idx = index.results.len();
                let mut covered = 0;
                for (fkw_idx, (_, count)) in block.full_keywords.iter().enumerate() {
                    for keyword in block.keywords.iter().skip(covered).take(*count) {
                        index
                            .suggestions
                            .insert(keyword.clone(), (result_idx, fkw_idx));
                    }
                    covered += *count;
                }
                // Keywords past the full-keyword coverage fall back to
                // themselves at query time (out-of-range index).
                for keyword in block.keywords.iter().skip(covered) {
                    index
                        .suggestions
                        .insert(keyword.clone(), (result_idx, block.full_keywords.len()));
                }
                index.results.push(block);
            }
        } else if record.kind == "icon" {
            let Some(id) = record
                .id
                .strip_prefix("icon-")
                .and_then(|id| id.parse::<u64>().ok())
            else {
                tracing::warn!("icon record with malformed id: {}", record.id);
                continue;
            };
            index
                .icons
                .insert(id, backend.icon_url(&record.attachment.location));
        }
    }
    Ok(index)
}
