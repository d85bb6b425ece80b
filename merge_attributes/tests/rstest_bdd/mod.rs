//! `rstest-bdd` behavioural suite for `merge_attributes`.
//!
//! The modules defined alongside this entrypoint register the shared
//! fixtures, the step implementations and the scenario bindings so the
//! feature files run under `cargo test`.

mod fixtures;
mod scenarios;
mod steps;
