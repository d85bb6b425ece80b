//! Step definitions for the attribute merge scenarios.

use anyhow::{Result, anyhow, ensure};
use merge_attributes::{AttributeMerge, KeyPath, TokenListAttributes};
use rstest_bdd_macros::{given, then, when};
use serde_json::{Value, json};
use test_helpers::{attrs, text};

use crate::fixtures::MergeState;

#[given("the attribute input {literal}")]
fn attribute_input(merge_state: &MergeState, literal: String) -> Result<()> {
    let input = attrs::value(&literal)?;
    let mut inputs = merge_state.inputs.take().unwrap_or_default();
    inputs.push(input);
    merge_state.inputs.set(inputs);
    Ok(())
}

#[given("the token-list paths are {dashed}")]
fn token_list_paths(merge_state: &MergeState, dashed: String) -> Result<()> {
    let paths = text::unquote(&dashed)
        .split_whitespace()
        .map(KeyPath::parse)
        .collect::<Result<TokenListAttributes, _>>()?;
    merge_state.token_lists.set(paths);
    Ok(())
}

#[given("the token-list key sequence is {keys}")]
fn token_list_key_sequence(merge_state: &MergeState, keys: String) -> Result<()> {
    let path = KeyPath::new(text::key_list(&keys))?;
    merge_state.token_lists.set(TokenListAttributes::new([path]));
    Ok(())
}

#[given("token deduplication is enabled")]
fn dedupe_enabled(merge_state: &MergeState) {
    merge_state.dedupe.set(true);
}

#[when("the inputs are merged")]
fn merge_inputs(merge_state: &MergeState) -> Result<()> {
    let mut inputs = merge_state
        .inputs
        .take()
        .ok_or_else(|| anyhow!("no attribute inputs were declared"))?
        .into_iter();
    let primary = inputs.next().unwrap_or(Value::Null);
    let mut request = AttributeMerge::new(primary)
        .extras(inputs)
        .dedupe_tokens(merge_state.dedupe.take().unwrap_or(false));
    if let Some(token_lists) = merge_state.token_lists.take() {
        request = request.token_list_attributes(token_lists);
    }
    merge_state.merged.set(request.merge());
    Ok(())
}

#[then("the merged value at {path} is {expected}")]
fn merged_value_at(merge_state: &MergeState, path: String, expected: String) -> Result<()> {
    let expected_value = attrs::value(&expected)?;
    let merged = merge_state
        .merged
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("expected the inputs to have been merged"))?;
    attrs::ensure_at(&merged, &path, &expected_value)
}

#[then("the merged attributes equal {expected}")]
fn merged_attributes_equal(merge_state: &MergeState, expected: String) -> Result<()> {
    let expected_value = attrs::value(&expected)?;
    let merged = merge_state
        .merged
        .with_ref(|merged| json!(merged))
        .ok_or_else(|| anyhow!("expected the inputs to have been merged"))?;
    ensure!(
        merged == expected_value,
        "expected {expected_value}, got {merged}"
    );
    Ok(())
}
