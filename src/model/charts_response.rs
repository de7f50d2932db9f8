use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw payload of `/api/charts-data/<name>`.
///
/// The backend keys the progression set by actor name
/// (`"<name>_progression"`), next to other chart blocks, so the payload stays
/// an untyped object and the progression set is located at projection time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ChartsResponse {
    fields: Map<String, Value>,
}

impl ChartsResponse {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Keys in the order the backend sent them.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|key| key.as_str())
    }
}
