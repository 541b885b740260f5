//! HTTP remote settings backend.
//!
//! Speaks the Kinto-style records API: collections live under
//! `{server}/buckets/{bucket}/collections/{collection}/records` and
//! return `{"data": [...]}`; attachments and icons are served from a
//! separate CDN host.

use crate::backend::SuggestBackend;
use crate::records::{KeywordBlock, SuggestRecord};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// Remote settings backend over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteSettings {
    client: Client,
    server: Url,
    attachment_host: Url,
}

/// Envelope of the records endpoint.
#[derive(Debug, Deserialize)]
struct RecordsResponse {
    data: Vec<SuggestRecord>,
}

impl RemoteSettings {
    /// Create a backend for the given API server and attachment host.
    ///
    /// Both URLs are normalized to end with `/` so relative joins
    /// resolve under them.
    pub fn new(client: Client, server: &str, attachment_host: &str) -> Result<Self> {
        Ok(Self {
            client,
            server: parse_base(server)?,
            attachment_host: parse_base(attachment_host)?,
        })
    }

    /// The records endpoint for a collection.
    pub fn records_url(&self, bucket: &str, collection: &str) -> Result<Url> {
        self.server
            .join(&format!("buckets/{bucket}/collections/{collection}/records"))
            .context("invalid bucket or collection name")
    }
}

impl SuggestBackend for RemoteSettings {
    async fn get(&self, bucket: &str, collection: &str) -> Result<Vec<SuggestRecord>> {
        let url = self.records_url(bucket, collection)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("records request failed")?
            .error_for_status()
            .context("records request rejected")?;
        let body: RecordsResponse = response.json().await.context("malformed records body")?;
        Ok(body.data)
    }

    async fn fetch_attachment(&self, location: &str) -> Result<Vec<KeywordBlock>> {
        let url = self
            .attachment_host
            .join(location)
            .context("invalid attachment location")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("attachment request failed")?
            .error_for_status()
            .context("attachment request rejected")?;
        response.json().await.context("malformed attachment body")
    }

    fn icon_url(&self, location: &str) -> String {
        match self.attachment_host.join(location) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{location}", self.attachment_host),
        }
    }
}

/// Parse a base URL, forcing a trailing slash.
fn parse_base(url: &str) -> Result<Url> {
    let normalized = if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    };
    Url::parse(&normalized).with_context(|| format!("invalid base url: {url}"))
}
