//! Error types produced while building merge configuration and inputs.
//!
//! The merge itself never fails. Errors only arise at the boundary: parsing
//! key-paths, loading a token-list configuration document, or rendering a
//! typed value into attributes.

mod constructors;
mod types;

pub use types::{MergeAttributesError, MergeResult};

#[cfg(test)]
mod tests;
