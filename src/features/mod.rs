//! Feature extraction.
//!
//! Projects a [`RawDeviceRecord`] through the fixed [`CATALOG`] into a flat
//! [`FeatureMap`] of dotted key → rendered string. Every catalog key is
//! always present; absence is encoded in the value, never by omission.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::Result;
use crate::json;
use crate::record::RawDeviceRecord;

pub mod catalog;
pub mod resolve;

pub use catalog::CATALOG;
use resolve::{resolve, Lookup};

/// Rendering of an absent leaf in [`Render::Text`] mode.
pub const ABSENT: &str = "undefined";

/// How a resolved leaf is turned into its feature string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// `String(value)`: absent → `undefined`, null → `null`.
    Text,
    /// `value ? JSON.stringify(value) : ''` for composite subtrees.
    Json,
}

impl Render {
    pub fn render(self, lookup: Lookup<'_>) -> String {
        match (self, lookup) {
            (Render::Text, Lookup::Absent) => ABSENT.to_string(),
            (Render::Text, Lookup::Present(value)) => json::to_js_string(value),
            (Render::Json, Lookup::Absent) => String::new(),
            (Render::Json, Lookup::Present(value)) if !json::is_truthy(value) => String::new(),
            (Render::Json, Lookup::Present(value)) => json::stringify(value),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Stable feature key, the dotted form of `path`.
    pub key: &'static str,
    pub path: &'static [&'static str],
    pub render: Render,
}

impl Feature {
    pub fn extract(&self, record: &RawDeviceRecord) -> Result<String> {
        let lookup = resolve(record.root(), self.path)?;
        Ok(self.render.render(lookup))
    }
}

/// Flat feature key → rendered value mapping.
///
/// Insertion order carries no meaning; consumers that need an order use
/// [`FeatureMap::sorted_entries`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureMap {
    entries: HashMap<String, String>,
}

impl FeatureMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one feature.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries ordered by key as JS `Array.prototype.sort` orders strings
    /// (UTF-16 code units).
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FeatureMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FeatureMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Extract every catalog feature from `record`.
///
/// Fails as a whole on a malformed record; no partial map is returned.
pub fn extract(record: &RawDeviceRecord) -> Result<FeatureMap> {
    let mut features = FeatureMap::new();
    for feature in CATALOG {
        features.insert(feature.key, feature.extract(record)?);
    }
    Ok(features)
}
