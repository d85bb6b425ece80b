//! Attribute value helpers.
//!
//! Attribute mappings are [`serde_json::Map`] values keyed by `String`. The
//! string is the canonical key form: typed keys (enum variants, integers,
//! characters) are rendered to their printed form by [`to_attributes`] before
//! any merge logic compares them, so two keys that print identically always
//! collapse into one entry.

use serde::Serialize;
use serde_json::Value;

use crate::MergeResult;
use crate::result_ext::JsonResultExt;

/// Render any serialisable value into an attribute value with canonical keys.
///
/// # Errors
///
/// Returns [`crate::MergeAttributesError::Serialize`] when `value` cannot be
/// represented, for example a map keyed by a sequence.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use merge_attributes::to_attributes;
/// use serde::Serialize;
/// use serde_json::json;
///
/// #[derive(Serialize, PartialEq, Eq, PartialOrd, Ord)]
/// #[serde(rename_all = "lowercase")]
/// enum Attr {
///     Id,
///     Class,
/// }
///
/// let typed = BTreeMap::from([(Attr::Id, "main"), (Attr::Class, "wide")]);
/// let value = to_attributes(&typed)?;
/// assert_eq!(value, json!({"id": "main", "class": "wide"}));
/// # Ok::<_, merge_attributes::MergeAttributesError>(())
/// ```
pub fn to_attributes<T>(value: &T) -> MergeResult<Value>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).into_serialize_err()
}

/// Returns `true` when `value` carries nothing worth merging.
///
/// Null, `false`, empty or whitespace-only strings, empty arrays and empty
/// objects are blank. Numbers and `true` never are.
///
/// # Examples
///
/// ```rust
/// use merge_attributes::is_blank;
/// use serde_json::json;
///
/// assert!(is_blank(&json!("  ")));
/// assert!(is_blank(&json!({})));
/// assert!(!is_blank(&json!(0)));
/// ```
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Bool(true) | Value::Number(_) => false,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Returns `true` unless `value` is null or `false`.
#[must_use]
pub const fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Short name of the value's kind, used in diagnostics.
pub(crate) const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
