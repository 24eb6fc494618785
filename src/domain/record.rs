use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single account record taken from an archive entry.
///
/// The record is kept as an opaque JSON value: no schema is enforced, and the
/// value is forwarded exactly as it was decoded (including object key order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Compact JSON text of the record, as sent on the wire.
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }
}

/// The decoded document of one archive entry: `{"accounts": [ ... ]}`.
///
/// Any other top-level fields are ignored.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct AccountsBatch {
    pub accounts: Vec<Record>,
}

impl AccountsBatch {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
