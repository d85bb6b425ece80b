//! Merge HTML-style attribute sets.
//!
//! Component helpers usually start from a set of default attributes and let
//! callers layer their own on top. Plain deep merge gets most keys right:
//! later inputs win and nested mappings such as `data` combine key-wise. It
//! gets token lists wrong, because a caller's `class: "wide"` should extend
//! the component's `class: "card"` rather than replace it. This crate merges
//! ordinary keys deeply and rebuilds the configured token-list keys (by
//! default `class`, `data.controller` and `data.action`) from every input.
//!
//! ```rust
//! use merge_attributes::merge_attributes;
//! use serde_json::json;
//!
//! let defaults = json!({"class": "card", "data": {"controller": "card"}});
//! let caller = json!({"class": "card--wide", "data": {"controller": "tooltip", "id": 7}});
//! let merged = merge_attributes(defaults, [caller]);
//! assert_eq!(
//!     json!(merged),
//!     json!({
//!         "class": "card card--wide",
//!         "data": {"controller": "card tooltip", "id": 7},
//!     })
//! );
//! ```
//!
//! Attribute mappings are [`serde_json::Map`] values. Typed inputs convert
//! through [`to_attributes`], which fixes every key to its printed string
//! form.

mod config;
mod error;
mod flatten;
mod hook;
mod merge;
mod merger;
mod path;
mod result_ext;
mod token_list;
mod value;

pub use config::{DEFAULT_TOKEN_LIST_ATTRIBUTES, TokenListAttributes};
pub use error::{MergeAttributesError, MergeResult};
pub use hook::{Preprocess, PreprocessContext};
pub use merge::{merge_map, merge_value};
pub use merger::{AttributeMerge, MergeOptions, merge_attributes};
pub use path::KeyPath;
pub use token_list::{token_list, tokenize};
pub use value::{is_blank, is_truthy, to_attributes};

/// Version of this crate, as published.
///
/// ```rust
/// assert_eq!(merge_attributes::VERSION.split('.').count(), 3);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
