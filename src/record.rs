//! Raw device record: the collector → core boundary.
//!
//! The record is an untyped JSON tree assembled from whichever collectors
//! ran. A collector that failed contributes the [`UNAVAILABLE`] sentinel
//! for its whole subtree instead of an error.

use serde_json::{Map, Value};

use crate::error::{FingerprintError, Result};

/// Sentinel string collectors report for an unsupported or failed probe.
pub const UNAVAILABLE: &str = "N/A";

/// Top-level collector sources referenced by the feature catalog.
pub const SOURCES: &[&str] = &[
    "ghostDeviceInfo",
    "clientjs",
    "thumbmarkjs",
    "opfsFingerprint",
    "ghostIPData",
];

/// Whether `value` is the collector sentinel.
pub fn is_unavailable(value: &Value) -> bool {
    value.as_str() == Some(UNAVAILABLE)
}

/// One consolidated set of probe results for a single fingerprint request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDeviceRecord {
    root: Value,
}

impl RawDeviceRecord {
    /// An empty record: every catalog path resolves as absent.
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Wrap an already-assembled tree.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse a record from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map(Self::from_value)
            .map_err(|e| FingerprintError::InvalidInput(format!("record is not JSON: {}", e)))
    }

    /// Store the output of one collector under `source`.
    ///
    /// A failed collector is recorded as the sentinel, never as an error.
    pub fn insert_source(
        &mut self,
        source: &str,
        outcome: std::result::Result<Value, FingerprintError>,
    ) {
        let value = match outcome {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Collector '{}' unavailable: {}", source, e);
                Value::String(UNAVAILABLE.to_string())
            }
        };

        match &mut self.root {
            Value::Object(map) => {
                map.insert(source.to_string(), value);
            }
            other => {
                let mut map = Map::new();
                map.insert(source.to_string(), value);
                *other = Value::Object(map);
            }
        }
    }

    /// Builder-style [`insert_source`](Self::insert_source).
    pub fn with_source(
        mut self,
        source: &str,
        outcome: std::result::Result<Value, FingerprintError>,
    ) -> Self {
        self.insert_source(source, outcome);
        self
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}

impl From<Value> for RawDeviceRecord {
    fn from(root: Value) -> Self {
        Self::from_value(root)
    }
}
