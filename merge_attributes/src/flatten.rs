//! Input normalisation: builds the contribution list from caller inputs.
//!
//! The primary input, the extras and a non-empty extra-options mapping are
//! lined up in that order, nested arrays are expanded in place, the optional
//! [`Preprocess`] hook rewrites each entry, and blank entries are dropped.
//! What remains is the ordered list of mappings both merge algorithms work
//! over.

use serde_json::{Map, Value};

use crate::hook::{Preprocess, PreprocessContext};
use crate::value::{is_blank, kind_of};

/// Ordered, non-empty attribute mappings in precedence order.
pub(crate) type Contributions = Vec<Map<String, Value>>;

/// Build the contribution list from the caller's inputs.
pub(crate) fn contributions<I>(
    primary: Value,
    extras: I,
    extra_options: Map<String, Value>,
    hook: Option<&dyn Preprocess>,
) -> Contributions
where
    I: IntoIterator<Item = Value>,
{
    let mut inputs = vec![primary];
    inputs.extend(extras);
    if !extra_options.is_empty() {
        inputs.push(Value::Object(extra_options));
    }

    let mut flattened = Vec::with_capacity(inputs.len());
    flatten_into(inputs, &mut flattened);

    let entries = match hook {
        Some(preprocess) => apply_hook(preprocess, flattened),
        None => flattened,
    };
    filter_blank(entries)
}

/// Expand nested arrays in place, preserving order at any depth.
pub(crate) fn flatten_into<I>(values: I, out: &mut Vec<Value>)
where
    I: IntoIterator<Item = Value>,
{
    for value in values {
        match value {
            Value::Array(items) => flatten_into(items, out),
            other => out.push(other),
        }
    }
}

fn apply_hook(hook: &dyn Preprocess, flattened: Vec<Value>) -> Vec<Value> {
    let snapshot = flattened.clone();
    flattened
        .into_iter()
        .enumerate()
        .map(|(index, entry)| hook.preprocess(entry, &PreprocessContext::new(index, &snapshot)))
        .collect()
}

fn filter_blank(entries: Vec<Value>) -> Contributions {
    entries
        .into_iter()
        .enumerate()
        .filter(|(_, entry)| !is_blank(entry))
        .filter_map(|(index, entry)| match entry {
            Value::Object(map) => Some(map),
            other => {
                tracing::warn!(
                    index,
                    kind = kind_of(&other),
                    "dropping attribute input that is not a mapping"
                );
                None
            }
        })
        .collect()
}
