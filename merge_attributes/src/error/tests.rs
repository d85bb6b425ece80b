//! Unit tests for error messages and constructors.

use rstest::rstest;

use super::MergeAttributesError;

fn json_failure() -> serde_json::Error {
    match serde_json::from_str::<serde_json::Value>("{") {
        Err(err) => err,
        Ok(value) => panic!("'{{' unexpectedly parsed as {value}"),
    }
}

#[rstest]
#[case::empty_path(MergeAttributesError::EmptyKeyPath, "key-path must contain at least one key")]
#[case::empty_segment(
    MergeAttributesError::empty_segment("-action"),
    "key-path '-action' contains an empty key"
)]
fn displays_key_path_errors(#[case] err: MergeAttributesError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn config_json_keeps_source() {
    let err = MergeAttributesError::config_json(json_failure());
    assert!(matches!(err, MergeAttributesError::ConfigJson { .. }));
    assert!(std::error::Error::source(&err).is_some());
    assert!(
        err.to_string()
            .starts_with("invalid token-list configuration JSON:")
    );
}

#[test]
fn serialize_keeps_source() {
    let err = MergeAttributesError::serialize(json_failure());
    assert!(std::error::Error::source(&err).is_some());
}
