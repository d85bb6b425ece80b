//! Shared fixtures for the behavioural suite.

use merge_attributes::TokenListAttributes;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::{Map, Value};

/// Scenario state shared between the attribute merge steps.
#[derive(Debug, Default, ScenarioState)]
pub struct MergeState {
    /// Inputs in the order the scenario declared them.
    pub inputs: Slot<Vec<Value>>,
    /// Token-list override, when a step configured one.
    pub token_lists: Slot<TokenListAttributes>,
    /// Whether token deduplication was requested.
    pub dedupe: Slot<bool>,
    /// Result of the most recent merge.
    pub merged: Slot<Map<String, Value>>,
}

/// Creates a clean merge state for each scenario.
#[fixture]
pub fn merge_state() -> MergeState {
    MergeState::default()
}
