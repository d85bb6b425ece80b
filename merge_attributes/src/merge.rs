//! Deep-merge mechanics for attribute mappings.

use serde_json::{Map, Value};

/// Overlay `layer` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - When both sides are objects they merge key-wise, recursively.
/// - Any other `layer` replaces `target` wholesale. Arrays are never combined
///   element by element.
///
/// # Examples
///
/// ```rust
/// use merge_attributes::merge_value;
/// use serde_json::json;
///
/// let mut acc = json!({"id": "a", "data": {"url": "/x"}});
/// merge_value(&mut acc, json!({"data": {"remote": true}, "rel": "noopener"}));
/// assert_eq!(
///     acc,
///     json!({"id": "a", "data": {"url": "/x", "remote": true}, "rel": "noopener"})
/// );
///
/// // Arrays replace existing values.
/// merge_value(&mut acc, json!({"data": [1, 2]}));
/// assert_eq!(acc["data"], json!([1, 2]));
/// ```
pub fn merge_value(target: &mut Value, layer: Value) {
    match layer {
        Value::Object(incoming) => match target {
            Value::Object(existing) => merge_map(existing, incoming),
            other => *other = Value::Object(incoming),
        },
        replacement => *target = replacement,
    }
}

/// Merge the mapping `layer` into `target`.
///
/// Keys only present in `target` are untouched, keys only present in `layer`
/// are appended in `layer`'s order, and shared keys follow [`merge_value`].
pub fn merge_map(target: &mut Map<String, Value>, layer: Map<String, Value>) {
    for (key, value) in layer {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// Fold `contributions` left to right: the first seeds the result and every
/// later mapping is merged on top.
pub(crate) fn fold<I>(contributions: I) -> Map<String, Value>
where
    I: IntoIterator<Item = Map<String, Value>>,
{
    let mut iter = contributions.into_iter();
    let Some(mut result) = iter.next() else {
        return Map::new();
    };
    for layer in iter {
        merge_map(&mut result, layer);
    }
    result
}
