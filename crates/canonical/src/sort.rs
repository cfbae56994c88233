//! Deep key sorting for parsed JSON trees.

use serde_json::{Map, Value};

/// Rebuilds `value` with every object key-sorted at every depth.
///
/// - Objects: keys in ascending code-point order, values sorted recursively
/// - Arrays: element order kept exactly; each element is sorted recursively,
///   so objects inside arrays are key-sorted too
/// - Scalars pass through unchanged
/// - `null` stays an explicit [`Value::Null`], never dropped from its object
///
/// The rebuilt map is filled in sorted order, so the result iterates sorted
/// whether serde_json backs `Map` with a `BTreeMap` or an insertion-ordered
/// map.
///
/// ```
/// use canonical::deep_sort;
/// use serde_json::json;
///
/// let sorted = deep_sort(json!({"b": [{"d": 1, "c": null}], "a": 0}));
/// let keys: Vec<&String> = sorted.as_object().unwrap().keys().collect();
/// assert_eq!(keys, ["a", "b"]);
/// assert_eq!(sorted["b"][0]["c"], serde_json::Value::Null);
/// ```
pub fn deep_sort(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(sort_object(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(deep_sort).collect()),
        scalar => scalar,
    }
}

fn sort_object(map: Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    // Keys are unique by now: the parser already applied last-write-wins.
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    let mut sorted = Map::with_capacity(entries.len());
    for (key, value) in entries {
        sorted.insert(key, deep_sort(value));
    }
    sorted
}
