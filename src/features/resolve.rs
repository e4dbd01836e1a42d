//! Absent-safe path resolution over the raw record.

use serde_json::Value;

use crate::error::{FingerprintError, Result};
use crate::record::is_unavailable;

/// Outcome of resolving one catalog path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// Some node along the path does not exist.
    Absent,
    Present(&'a Value),
}

/// Walk `path` from `root` with safe-navigation semantics.
///
/// Missing members, `null`, the collector sentinel and array misses all
/// short-circuit to [`Lookup::Absent`]. Any other primitive in an
/// intermediate position cannot be traversed and fails the whole record.
pub fn resolve<'a>(root: &'a Value, path: &[&str]) -> Result<Lookup<'a>> {
    let mut current = root;

    for (depth, segment) in path.iter().enumerate() {
        let next = match current {
            Value::Object(map) => map.get(*segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            Value::Null => None,
            other if is_unavailable(other) => None,
            other => {
                return Err(FingerprintError::MalformedRecord {
                    path: path[..depth].join("."),
                    found: type_name(other),
                })
            }
        };

        match next {
            Some(value) => current = value,
            None => return Ok(Lookup::Absent),
        }
    }

    Ok(Lookup::Present(current))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
