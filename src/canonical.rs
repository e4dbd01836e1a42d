//! Canonical serialization of a feature map.
//!
//! Output is `{"key":"value",...}` with keys in JS string sort order and
//! `JSON.stringify` escaping, i.e. exactly what
//! `JSON.stringify(features, Object.keys(features).sort())` produces.

use crate::features::FeatureMap;
use crate::json::escape_into;

/// Deterministic UTF-8 encoding of a [`FeatureMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalBytes(String);

impl CanonicalBytes {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Serialize `features` in canonical form.
pub fn serialize(features: &FeatureMap) -> CanonicalBytes {
    let entries = features.sorted_entries();

    // two quotes per string plus ':' and ','
    let capacity = entries.iter().map(|(k, v)| k.len() + v.len() + 6).sum::<usize>() + 2;
    let mut out = String::with_capacity(capacity);
    out.push('{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        escape_into(&mut out, key);
        out.push(':');
        escape_into(&mut out, value);
    }
    out.push('}');

    CanonicalBytes(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_sorts_keys() {
        let features: FeatureMap = [("b.x", "2"), ("a", "1"), ("a.b", "undefined")]
            .into_iter()
            .collect();
        let bytes = serialize(&features);
        assert_eq!(bytes.as_str(), r#"{"a":"1","a.b":"undefined","b.x":"2"}"#);
    }

    #[test]
    fn test_serialize_order_independent() {
        let forward: FeatureMap = [("k1", "v1"), ("k2", "v2"), ("k3", "v3")].into_iter().collect();
        let backward: FeatureMap = [("k3", "v3"), ("k2", "v2"), ("k1", "v1")].into_iter().collect();
        assert_eq!(serialize(&forward), serialize(&backward));
    }

    #[test]
    fn test_serialize_escapes_values() {
        let features: FeatureMap = [("audio", r#"[{"label":"个個칼"}]"#), ("tab", "a\tb")]
            .into_iter()
            .collect();
        let bytes = serialize(&features);
        assert_eq!(
            bytes.as_str(),
            r#"{"audio":"[{\"label\":\"个個칼\"}]","tab":"a\tb"}"#
        );
    }

    #[test]
    fn test_serialize_empty_map() {
        assert_eq!(serialize(&FeatureMap::new()).as_str(), "{}");
    }
}
