//! Token-list normalisation.
//!
//! For each configured key-path the value is recomputed from every
//! contribution rather than taken from the deep-merged result: each
//! contribution's value at the path is tokenised and the tokens are joined
//! with single spaces, in contribution order.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::path::KeyPath;
use crate::value::{is_blank, is_truthy};

/// Append the tokens carried by `value` to `tokens`.
///
/// - blank values add nothing;
/// - strings split on whitespace;
/// - arrays contribute each element's tokens in order;
/// - objects contribute each key whose value is truthy, in key order, split
///   on whitespace like a string;
/// - other scalars contribute their printed form.
///
/// # Examples
///
/// ```rust
/// use merge_attributes::tokenize;
/// use serde_json::json;
///
/// let mut tokens = Vec::new();
/// tokenize(&json!(["btn  btn-lg", {"active": true, "hidden": false}, 2]), &mut tokens);
/// assert_eq!(tokens, ["btn", "btn-lg", "active", "2"]);
/// ```
pub fn tokenize(value: &Value, tokens: &mut Vec<String>) {
    if is_blank(value) {
        return;
    }
    match value {
        Value::String(text) => tokens.extend(text.split_whitespace().map(str::to_owned)),
        Value::Array(items) => {
            for item in items {
                tokenize(item, tokens);
            }
        }
        Value::Object(map) => tokens.extend(
            map.iter()
                .filter(|(_, flag)| is_truthy(flag))
                .flat_map(|(key, _)| key.split_whitespace().map(str::to_owned)),
        ),
        other => tokens.push(other.to_string()),
    }
}

/// Join the tokens of every value in `values` with single spaces.
///
/// Duplicates are kept and order follows `values`.
///
/// # Examples
///
/// ```rust
/// use merge_attributes::token_list;
/// use serde_json::json;
///
/// let values = [json!("a"), json!(null), json!("b a")];
/// assert_eq!(token_list(&values), "a b a");
/// ```
pub fn token_list<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut tokens = Vec::new();
    for value in values {
        tokenize(value, &mut tokens);
    }
    tokens.join(" ")
}

/// Recompute the token list at `path` across `contributions`.
///
/// Returns `None` when no contribution yields a token, leaving the merged
/// value at `path` untouched.
pub(crate) fn collect(
    contributions: &[Map<String, Value>],
    path: &KeyPath,
    dedupe: bool,
) -> Option<String> {
    let mut tokens = Vec::new();
    for contribution in contributions {
        if let Some(value) = path.dig(contribution) {
            tokenize(value, &mut tokens);
        }
    }
    if tokens.is_empty() {
        return None;
    }
    if dedupe {
        let mut seen = HashSet::with_capacity(tokens.len());
        tokens.retain(|token| seen.insert(token.clone()));
    }
    Some(tokens.join(" "))
}
