//! Binds the attribute merge feature file to the step registry.

use crate::fixtures::{MergeState, merge_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/attribute_merge.feature",
    fixtures = [merge_state: MergeState]
);
