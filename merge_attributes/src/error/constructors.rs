//! Constructors for `MergeAttributesError`.

use super::MergeAttributesError;

impl MergeAttributesError {
    /// Construct an empty-segment error for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_attributes::MergeAttributesError;
    /// let err = MergeAttributesError::empty_segment("data--action");
    /// assert_eq!(err.to_string(), "key-path 'data--action' contains an empty key");
    /// ```
    #[must_use]
    pub fn empty_segment(path: impl Into<String>) -> Self {
        Self::EmptyKeySegment { path: path.into() }
    }

    /// Construct a serialisation error from a [`serde_json::Error`].
    #[must_use]
    pub const fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize { source }
    }

    /// Construct a configuration error from a JSON parse failure.
    #[must_use]
    pub const fn config_json(source: serde_json::Error) -> Self {
        Self::ConfigJson { source }
    }

    /// Construct a configuration error from a TOML parse failure.
    #[cfg(feature = "toml")]
    #[must_use]
    pub fn config_toml(source: toml::de::Error) -> Self {
        Self::ConfigToml(Box::new(source))
    }
}
