//! Example component helper that layers caller attributes over its defaults.
//!
//! A `button` helper owns a base class list and a Stimulus controller. Callers
//! pass their own attributes; the helper merges them so classes and
//! controllers accumulate while every other key can be overridden.

use std::io::{self, Write};

use merge_attributes::{AttributeMerge, MergeOptions};
use serde_json::{Map, Value, json};

/// Attributes every button starts from.
fn button_defaults(variant: &str) -> Value {
    json!({
        "type": "button",
        "class": ["btn", format!("btn-{variant}")],
        "data": {"controller": "button"},
    })
}

/// Merge caller attributes over the defaults for `variant`.
fn button_attributes(options: &MergeOptions, variant: &str, caller: Value) -> Map<String, Value> {
    AttributeMerge::new(button_defaults(variant))
        .extra(caller)
        .options(options.clone())
        .merge()
}

/// Render merged attributes in `key="value"` form, flattening `data` keys.
fn render(attrs: &Map<String, Value>) -> String {
    let mut parts = Vec::new();
    for (key, value) in attrs {
        match value {
            Value::Object(nested) => {
                for (inner, inner_value) in nested {
                    parts.push(format!("{key}-{inner}=\"{}\"", plain(inner_value)));
                }
            }
            Value::Bool(true) => parts.push(key.clone()),
            Value::Bool(false) | Value::Null => {}
            other => parts.push(format!("{key}=\"{}\"", plain(other))),
        }
    }
    parts.join(" ")
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn main() -> io::Result<()> {
    let options = MergeOptions::new().with_dedupe_tokens(true);
    let save = button_attributes(
        &options,
        "primary",
        json!({
            "type": "submit",
            "class": "btn wide",
            "data": {"controller": "tooltip", "action": "click->form#submit"},
            "disabled": false,
        }),
    );
    let cancel = button_attributes(&options, "secondary", json!({"data": {"turbo": false}}));

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "<button {}>Save</button>", render(&save))?;
    writeln!(handle, "<button {}>Cancel</button>", render(&cancel))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{MergeOptions, button_attributes, render};

    #[test]
    fn caller_classes_extend_the_defaults() {
        let options = MergeOptions::new().with_dedupe_tokens(true);
        let attrs = button_attributes(&options, "primary", json!({"class": "btn wide"}));
        assert_eq!(attrs.get("class"), Some(&json!("btn btn-primary wide")));
        assert_eq!(
            render(&attrs),
            "type=\"button\" class=\"btn btn-primary wide\" data-controller=\"button\""
        );
    }
}
