//! Tests for the provider contract and the no-op provider.

use suggest_core::{
    Availability, NoopProvider, QueryError, SetupError, SuggestionProvider, SuggestionRecord,
};

/// A provider with a canned result list.
struct FixedProvider {
    records: Vec<SuggestionRecord>,
}

impl SuggestionProvider for FixedProvider {
    async fn initialize(&self) -> Result<(), SetupError> {
        Ok(())
    }

    async fn query(&self, query: &str) -> Result<Vec<SuggestionRecord>, QueryError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.records.clone())
    }

    fn enabled_by_default(&self) -> bool {
        true
    }
}

/// A provider whose bootstrap always fails.
struct BrokenProvider;

impl SuggestionProvider for BrokenProvider {
    async fn initialize(&self) -> Result<(), SetupError> {
        Err(SetupError::new(anyhow::anyhow!("upstream unreachable")))
    }

    async fn query(&self, _query: &str) -> Result<Vec<SuggestionRecord>, QueryError> {
        Err(QueryError::new(anyhow::anyhow!("not initialized")))
    }

    fn enabled_by_default(&self) -> bool {
        false
    }
}

#[tokio::test]
async fn empty_query_yields_empty_list_not_error() {
    let p = NoopProvider;
    p.initialize().await.unwrap();

    let records = p.query("").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn noop_never_suggests() {
    let p = NoopProvider;
    p.initialize().await.unwrap();

    assert!(p.query("anything").await.unwrap().is_empty());
    assert_eq!(p.availability(), Availability::DisabledByDefault);
}

#[tokio::test]
async fn query_returns_records_in_order() {
    let first: SuggestionRecord = [("title", "first"), ("url", "https://example.com/1")]
        .into_iter()
        .collect();
    let second: SuggestionRecord = [("title", "second"), ("url", "https://example.com/2")]
        .into_iter()
        .collect();
    let p = FixedProvider {
        records: vec![first.clone(), second.clone()],
    };
    p.initialize().await.unwrap();

    let records = p.query("example").await.unwrap();
    assert_eq!(records, vec![first, second]);
}

#[tokio::test]
async fn setup_error_surfaces_from_initialize() {
    let p = BrokenProvider;

    let err = p.initialize().await.unwrap_err();
    assert!(err.to_string().contains("provider setup failed"));
    assert!(err.to_string().contains("upstream unreachable"));
}

#[tokio::test]
async fn query_error_surfaces_from_query() {
    let p = BrokenProvider;

    let err = p.query("anything").await.unwrap_err();
    assert!(err.to_string().contains("suggestion query failed"));
}

#[test]
fn record_round_trips_through_json() {
    let mut record = SuggestionRecord::new();
    record.insert("title", "Example").insert("score", 0.3);

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["title"], "Example");

    let back: SuggestionRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back.get("title").unwrap(), "Example");
    assert_eq!(back.len(), 2);
}
