//! Unit tests for token-list configuration.

use rstest::rstest;

use super::{DEFAULT_TOKEN_LIST_ATTRIBUTES, TokenListAttributes, nested_pairs};
use crate::{KeyPath, MergeAttributesError};

fn dashed(path: &str) -> KeyPath {
    KeyPath::parse(path).expect("dashed path parses")
}

#[test]
fn default_matches_constant() {
    let attrs = TokenListAttributes::default();
    let keys: Vec<Vec<&str>> = attrs
        .iter()
        .map(|path| path.keys().iter().map(String::as_str).collect())
        .collect();
    let expected: Vec<Vec<&str>> = DEFAULT_TOKEN_LIST_ATTRIBUTES
        .iter()
        .map(|keys| keys.to_vec())
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn repeated_paths_collapse_to_first_occurrence() {
    let attrs: TokenListAttributes = [dashed("data-action"), dashed("class"), dashed("data-action")]
        .into_iter()
        .collect();
    assert_eq!(attrs.paths(), [dashed("data-action"), dashed("class")]);
}

#[test]
fn nested_paths_are_detected() {
    let attrs = TokenListAttributes::new([
        dashed("data"),
        dashed("class"),
        dashed("data-controller"),
    ]);
    assert_eq!(
        nested_pairs(attrs.paths()),
        [(&dashed("data"), &dashed("data-controller"))]
    );
    assert!(nested_pairs(TokenListAttributes::default().paths()).is_empty());
}

#[test]
fn none_is_empty() {
    assert!(TokenListAttributes::none().is_empty());
    assert_eq!(TokenListAttributes::none().len(), 0);
}

#[rstest]
#[case::dashed(r#"{"token_list_attributes": ["data-controller"]}"#)]
#[case::keys(r#"{"token_list_attributes": [["data", "controller"]]}"#)]
fn json_forms_are_equivalent(#[case] document: &str) {
    let attrs = TokenListAttributes::from_json_str(document).expect("configuration parses");
    assert_eq!(attrs.paths(), [dashed("data-controller")]);
}

#[rstest]
#[case::missing_field("{}")]
#[case::not_a_list(r#"{"token_list_attributes": "class"}"#)]
#[case::empty_segment(r#"{"token_list_attributes": ["data--action"]}"#)]
#[case::empty_keys(r#"{"token_list_attributes": [[]]}"#)]
fn rejects_invalid_json(#[case] document: &str) {
    let err = TokenListAttributes::from_json_str(document).expect_err("document must fail");
    assert!(matches!(err, MergeAttributesError::ConfigJson { .. }));
}

#[cfg(feature = "toml")]
#[test]
fn loads_toml_documents() {
    let attrs = TokenListAttributes::from_toml_str(
        "token_list_attributes = [\"class\", [\"aria\", \"describedby\"], \"data-action\"]\n",
    )
    .expect("configuration parses");
    assert_eq!(
        attrs.paths(),
        [
            dashed("class"),
            KeyPath::new(["aria", "describedby"]).expect("keys"),
            dashed("data-action"),
        ]
    );
}

#[cfg(feature = "toml")]
#[test]
fn rejects_invalid_toml() {
    let err = TokenListAttributes::from_toml_str("token_list_attributes = [\"-\"]")
        .expect_err("document must fail");
    assert!(matches!(err, MergeAttributesError::ConfigToml(_)));
}
