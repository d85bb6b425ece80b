//! Attribute fixtures and assertions for merged output.

use anyhow::{Context, Result, anyhow, ensure};
use serde_json::{Map, Value};

/// Parse a JSON object literal into an attribute mapping.
///
/// # Errors
///
/// Returns an error when `literal` is not valid JSON or not an object.
pub fn object(literal: &str) -> Result<Map<String, Value>> {
    match value(literal)? {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!("expected a JSON object, got {other}")),
    }
}

/// Parse any JSON literal, tolerating one layer of surrounding single quotes.
///
/// # Errors
///
/// Returns an error when `literal` is not valid JSON.
pub fn value(literal: &str) -> Result<Value> {
    let trimmed = literal.trim();
    let inner = trimmed
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or(trimmed);
    serde_json::from_str(inner).with_context(|| format!("invalid JSON literal: {inner}"))
}

/// Follow `keys` through nested mappings in `attrs`.
#[must_use]
pub fn lookup<'a>(attrs: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    let (leaf, parents) = keys.split_last()?;
    let mut current = attrs;
    for key in parents {
        current = current.get(*key)?.as_object()?;
    }
    current.get(*leaf)
}

/// Ensure the value at the dotted `path` in `attrs` equals `expected`.
///
/// # Errors
///
/// Returns an error naming the path, the expected value and the observed
/// value when they differ.
pub fn ensure_at(attrs: &Map<String, Value>, path: &str, expected: &Value) -> Result<()> {
    let keys: Vec<&str> = path.split('.').collect();
    let observed = lookup(attrs, &keys);
    ensure!(
        observed == Some(expected),
        "expected {expected} at '{path}' but observed {}",
        observed.map_or_else(|| String::from("nothing"), Value::to_string),
    );
    Ok(())
}

/// Ensure nothing is stored at the dotted `path` in `attrs`.
///
/// # Errors
///
/// Returns an error when a value exists at `path`.
pub fn ensure_absent(attrs: &Map<String, Value>, path: &str) -> Result<()> {
    let keys: Vec<&str> = path.split('.').collect();
    if let Some(found) = lookup(attrs, &keys) {
        return Err(anyhow!("expected nothing at '{path}' but observed {found}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ensure_absent, ensure_at, lookup, object, value};

    #[test]
    fn parses_quoted_literals() {
        let parsed = value("'{\"a\": 1}'").expect("quoted literal parses");
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn object_rejects_arrays() {
        assert!(object("[1]").is_err());
    }

    #[test]
    fn lookup_follows_nested_keys() {
        let attrs = object(r#"{"data": {"controller": "modal"}}"#).expect("fixture parses");
        assert_eq!(lookup(&attrs, &["data", "controller"]), Some(&json!("modal")));
        assert_eq!(lookup(&attrs, &["data", "action"]), None);
        assert_eq!(lookup(&attrs, &[]), None);
    }

    #[test]
    fn ensure_helpers_report_mismatches() {
        let attrs = object(r#"{"class": "a b"}"#).expect("fixture parses");
        assert!(ensure_at(&attrs, "class", &json!("a b")).is_ok());
        assert!(ensure_at(&attrs, "class", &json!("a")).is_err());
        assert!(ensure_absent(&attrs, "id").is_ok());
        assert!(ensure_absent(&attrs, "class").is_err());
    }
}
