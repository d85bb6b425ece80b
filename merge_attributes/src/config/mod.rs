//! Token-list configuration.
//!
//! [`TokenListAttributes`] lists the key-paths whose values merge by token
//! collection instead of deep merge. The default covers the `class`
//! attribute and the Stimulus `data-controller` and `data-action`
//! attributes. Configurations can also be loaded from JSON or TOML documents
//! with a `token_list_attributes` array, where each entry is either a
//! dash-delimited string or an array of keys:
//!
//! ```toml
//! token_list_attributes = ["class", "data-controller", ["aria", "describedby"]]
//! ```

use serde::Deserialize;

use crate::MergeResult;
use crate::path::KeyPath;
use crate::result_ext::JsonResultExt;

/// Key-paths that use token-list semantics unless overridden.
pub const DEFAULT_TOKEN_LIST_ATTRIBUTES: [&[&str]; 3] =
    [&["class"], &["data", "controller"], &["data", "action"]];

/// Ordered set of key-paths merged by token collection.
///
/// Duplicate paths collapse to their first occurrence.
///
/// # Examples
///
/// ```rust
/// use merge_attributes::{KeyPath, TokenListAttributes};
///
/// let attrs = TokenListAttributes::from_json_str(
///     r#"{"token_list_attributes": ["class", ["data", "action"], "data-action"]}"#,
/// )?;
/// assert_eq!(attrs.len(), 2);
/// assert!(attrs.contains(&KeyPath::parse("data-action")?));
/// # Ok::<_, merge_attributes::MergeAttributesError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<KeyPath>")]
pub struct TokenListAttributes {
    paths: Vec<KeyPath>,
}

/// Document layout accepted by the configuration loaders.
#[derive(Deserialize)]
struct TokenListDocument {
    token_list_attributes: TokenListAttributes,
}

impl TokenListAttributes {
    /// Build a configuration from `paths`, dropping repeated entries.
    ///
    /// A path nested under another configured path overwrites that path's
    /// token list with a mapping when the merge writes it back, so such pairs
    /// are reported with a warning.
    #[must_use]
    pub fn new<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = KeyPath>,
    {
        let mut unique: Vec<KeyPath> = Vec::new();
        for path in paths {
            if !unique.contains(&path) {
                unique.push(path);
            }
        }
        for (outer, inner) in nested_pairs(&unique) {
            tracing::warn!(
                outer = %outer,
                inner = %inner,
                "token-list path is nested under another; the outer token list will be replaced"
            );
        }
        Self { paths: unique }
    }

    /// Configuration with no token-list paths: every key deep-merges.
    #[must_use]
    pub const fn none() -> Self {
        Self { paths: Vec::new() }
    }

    /// Parse a JSON document with a `token_list_attributes` array.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeAttributesError::ConfigJson`] when the document is
    /// malformed or any key-path is invalid.
    pub fn from_json_str(document: &str) -> MergeResult<Self> {
        serde_json::from_str::<TokenListDocument>(document)
            .into_config_err()
            .map(|doc| doc.token_list_attributes)
    }

    /// Parse a TOML document with a `token_list_attributes` array.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeAttributesError::ConfigToml`] when the document is
    /// malformed or any key-path is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use merge_attributes::TokenListAttributes;
    ///
    /// let attrs = TokenListAttributes::from_toml_str(
    ///     r#"token_list_attributes = ["class", ["aria", "describedby"]]"#,
    /// )?;
    /// assert_eq!(attrs.len(), 2);
    /// # Ok::<_, merge_attributes::MergeAttributesError>(())
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(document: &str) -> MergeResult<Self> {
        toml::from_str::<TokenListDocument>(document)
            .map(|doc| doc.token_list_attributes)
            .map_err(crate::MergeAttributesError::config_toml)
    }

    /// Key-paths in configuration order.
    #[must_use]
    pub const fn paths(&self) -> &[KeyPath] {
        self.paths.as_slice()
    }

    /// Iterate over the configured key-paths.
    pub fn iter(&self) -> std::slice::Iter<'_, KeyPath> {
        self.paths.iter()
    }

    /// Returns `true` when `path` is configured.
    #[must_use]
    pub fn contains(&self, path: &KeyPath) -> bool {
        self.paths.contains(path)
    }

    /// Number of configured key-paths.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` when no key-path is configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Pairs of configured paths where the second lies below the first.
pub(crate) fn nested_pairs(paths: &[KeyPath]) -> Vec<(&KeyPath, &KeyPath)> {
    paths
        .iter()
        .flat_map(|outer| {
            paths
                .iter()
                .filter(move |inner| outer.is_ancestor_of(inner))
                .map(move |inner| (outer, inner))
        })
        .collect()
}

impl Default for TokenListAttributes {
    fn default() -> Self {
        Self::new(
            DEFAULT_TOKEN_LIST_ATTRIBUTES
                .iter()
                .map(|keys| KeyPath::from_static(keys)),
        )
    }
}

impl From<Vec<KeyPath>> for TokenListAttributes {
    fn from(paths: Vec<KeyPath>) -> Self {
        Self::new(paths)
    }
}

impl FromIterator<KeyPath> for TokenListAttributes {
    fn from_iter<I: IntoIterator<Item = KeyPath>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a TokenListAttributes {
    type Item = &'a KeyPath;
    type IntoIter = std::slice::Iter<'a, KeyPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests;
