//! Primary error enum for attribute merge configuration.

use thiserror::Error;

/// Convenience alias for results carrying a [`MergeAttributesError`].
pub type MergeResult<T> = Result<T, MergeAttributesError>;

/// Errors raised by the fallible boundary operations of this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeAttributesError {
    /// A key-path was built from zero keys.
    #[error("key-path must contain at least one key")]
    EmptyKeyPath,

    /// A key-path contained an empty key, such as `data--action`.
    #[error("key-path '{path}' contains an empty key")]
    EmptyKeySegment {
        /// The offending path as supplied by the caller.
        path: String,
    },

    /// A typed value could not be rendered as an attribute value.
    #[error("failed to convert value into attributes: {source}")]
    Serialize {
        /// Underlying serialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// A JSON token-list configuration document was malformed.
    #[error("invalid token-list configuration JSON: {source}")]
    ConfigJson {
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// A TOML token-list configuration document was malformed.
    #[cfg(feature = "toml")]
    #[error("invalid token-list configuration TOML: {0}")]
    ConfigToml(#[from] Box<toml::de::Error>),
}
