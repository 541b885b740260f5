//! Open-ended suggestion result records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One suggestion result.
///
/// Records are string-keyed maps with arbitrary JSON values; the contract
/// imposes no schema, each provider defines its own fields. Queries
/// return `Vec<SuggestionRecord>`, never a bare record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionRecord(pub Map<String, Value>);

impl SuggestionRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for SuggestionRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<SuggestionRecord> for Value {
    fn from(record: SuggestionRecord) -> Self {
        Value::Object(record.0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SuggestionRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
