use serde_json::{Map, Value};

/// `Object.assign({}, base, overrides)` for JSON records: returns a fresh
/// object with every field of `base`, replaced or extended by `overrides`.
/// `base` is left as it was.
pub fn assign(base: &Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
