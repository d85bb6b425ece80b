//! Public merge entry points.
//!
//! [`MergeOptions`] holds the reusable configuration (token-list paths, the
//! optional preprocessing hook, token deduplication) and runs the pipeline.
//! [`AttributeMerge`] is a per-call builder for call sites that assemble
//! their inputs piecemeal, and [`merge_attributes`] covers the common case
//! with default options.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::TokenListAttributes;
use crate::hook::Preprocess;
use crate::{MergeResult, flatten, merge, to_attributes, token_list};

/// Reusable merge configuration.
///
/// Options are cheap to clone and can be shared across threads, so a
/// component library can configure one instance and merge with it
/// everywhere.
///
/// # Examples
///
/// ```rust
/// use merge_attributes::{KeyPath, MergeOptions, TokenListAttributes};
/// use serde_json::{Map, json};
///
/// let options = MergeOptions::new().with_token_list_attributes(
///     [KeyPath::parse("class")?, KeyPath::parse("aria-describedby")?]
///         .into_iter()
///         .collect::<TokenListAttributes>(),
/// );
/// let merged = options.merge(
///     json!({"class": "field", "aria": {"describedby": "hint"}}),
///     [json!({"class": "field--error", "aria": {"describedby": "error"}})],
///     Map::new(),
/// );
/// assert_eq!(
///     json!(merged),
///     json!({"class": "field field--error", "aria": {"describedby": "hint error"}})
/// );
/// # Ok::<_, merge_attributes::MergeAttributesError>(())
/// ```
#[derive(Clone, Default)]
pub struct MergeOptions {
    token_list_attributes: TokenListAttributes,
    preprocess: Option<Arc<dyn Preprocess>>,
    dedupe_tokens: bool,
}

impl MergeOptions {
    /// Options with the default token-list paths, no hook and duplicates
    /// kept.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the token-list paths.
    #[must_use]
    pub fn with_token_list_attributes(
        mut self,
        token_list_attributes: TokenListAttributes,
    ) -> Self {
        self.token_list_attributes = token_list_attributes;
        self
    }

    /// Install a preprocessing hook.
    #[must_use]
    pub fn with_preprocess<P>(mut self, hook: P) -> Self
    where
        P: Preprocess + 'static,
    {
        self.preprocess = Some(Arc::new(hook));
        self
    }

    /// Install a closure as the preprocessing hook.
    ///
    /// Equivalent to [`Self::with_preprocess`], but pins the closure signature
    /// so its argument types can be inferred.
    #[must_use]
    pub fn with_preprocess_fn<F>(self, hook: F) -> Self
    where
        F: Fn(Value, usize, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.with_preprocess(hook)
    }

    /// Keep only the first occurrence of each token in token-list values.
    #[must_use]
    pub const fn with_dedupe_tokens(mut self, dedupe_tokens: bool) -> Self {
        self.dedupe_tokens = dedupe_tokens;
        self
    }

    /// Configured token-list paths.
    #[must_use]
    pub const fn token_list_attributes(&self) -> &TokenListAttributes {
        &self.token_list_attributes
    }

    /// Whether token deduplication is enabled.
    #[must_use]
    pub const fn dedupe_tokens(&self) -> bool {
        self.dedupe_tokens
    }

    /// Merge `primary`, then `extras`, then `extra_options` into one mapping.
    ///
    /// Nested arrays anywhere in the inputs are flattened, blank entries are
    /// skipped, ordinary keys deep-merge with later inputs winning, and every
    /// configured token-list path is rebuilt from all contributing inputs.
    #[must_use]
    pub fn merge<I>(
        &self,
        primary: Value,
        extras: I,
        extra_options: Map<String, Value>,
    ) -> Map<String, Value>
    where
        I: IntoIterator<Item = Value>,
    {
        let contributions =
            flatten::contributions(primary, extras, extra_options, self.preprocess.as_deref());

        let token_lists: Vec<_> = self
            .token_list_attributes
            .iter()
            .filter_map(|path| {
                token_list::collect(&contributions, path, self.dedupe_tokens)
                    .map(|tokens| (path, tokens))
            })
            .collect();

        let contribution_count = contributions.len();
        let rewritten = token_lists.len();
        let mut merged = merge::fold(contributions);
        for (path, tokens) in token_lists {
            tracing::trace!(path = %path, tokens = %tokens, "rewriting token-list attribute");
            path.bury(&mut merged, Value::String(tokens));
        }

        tracing::debug!(
            contributions = contribution_count,
            token_lists = rewritten,
            keys = merged.len(),
            "merged attributes"
        );
        merged
    }
}

impl fmt::Debug for MergeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeOptions")
            .field("token_list_attributes", &self.token_list_attributes)
            .field("preprocess", &self.preprocess.as_ref().map(|_| "<hook>"))
            .field("dedupe_tokens", &self.dedupe_tokens)
            .finish()
    }
}

/// Builder for a single merge call.
///
/// # Examples
///
/// ```rust
/// use merge_attributes::AttributeMerge;
/// use serde_json::{Map, json};
///
/// let mut options = Map::new();
/// options.insert("id".into(), json!("save"));
///
/// let merged = AttributeMerge::new(json!({"class": "btn", "type": "button"}))
///     .extra(json!({"class": "btn-primary", "type": "submit"}))
///     .extra_options(options)
///     .merge();
/// assert_eq!(
///     json!(merged),
///     json!({"class": "btn btn-primary", "type": "submit", "id": "save"})
/// );
/// ```
#[derive(Debug)]
#[must_use = "call `merge` to produce the merged attributes"]
pub struct AttributeMerge {
    primary: Value,
    extras: Vec<Value>,
    extra_options: Map<String, Value>,
    options: MergeOptions,
}

impl AttributeMerge {
    /// Start a merge from `primary`, the lowest-precedence input.
    pub fn new(primary: Value) -> Self {
        Self {
            primary,
            extras: Vec::new(),
            extra_options: Map::new(),
            options: MergeOptions::default(),
        }
    }

    /// Start a merge from a typed `primary` input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeAttributesError::Serialize`] when `primary`
    /// cannot be rendered as attributes.
    pub fn try_new<T>(primary: &T) -> MergeResult<Self>
    where
        T: Serialize + ?Sized,
    {
        to_attributes(primary).map(Self::new)
    }

    /// Append one input after those already added.
    pub fn extra(mut self, value: Value) -> Self {
        self.extras.push(value);
        self
    }

    /// Append a typed input after those already added.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeAttributesError::Serialize`] when `value` cannot
    /// be rendered as attributes.
    pub fn try_extra<T>(self, value: &T) -> MergeResult<Self>
    where
        T: Serialize + ?Sized,
    {
        to_attributes(value).map(|rendered| self.extra(rendered))
    }

    /// Append several inputs in order.
    pub fn extras<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.extras.extend(values);
        self
    }

    /// Set the trailing extra-options mapping, the highest-precedence input.
    ///
    /// An empty mapping contributes nothing.
    pub fn extra_options(mut self, extra_options: Map<String, Value>) -> Self {
        self.extra_options = extra_options;
        self
    }

    /// Replace the token-list paths for this call.
    pub fn token_list_attributes(mut self, token_list_attributes: TokenListAttributes) -> Self {
        self.options = self.options.with_token_list_attributes(token_list_attributes);
        self
    }

    /// Install a preprocessing hook for this call.
    pub fn preprocess<P>(mut self, hook: P) -> Self
    where
        P: Preprocess + 'static,
    {
        self.options = self.options.with_preprocess(hook);
        self
    }

    /// Install a closure as the preprocessing hook for this call.
    pub fn preprocess_fn<F>(self, hook: F) -> Self
    where
        F: Fn(Value, usize, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.preprocess(hook)
    }

    /// Toggle token deduplication for this call.
    pub fn dedupe_tokens(mut self, dedupe_tokens: bool) -> Self {
        self.options = self.options.with_dedupe_tokens(dedupe_tokens);
        self
    }

    /// Use previously configured `options` for this call.
    pub fn options(mut self, options: MergeOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the merge.
    #[must_use]
    pub fn merge(self) -> Map<String, Value> {
        self.options.merge(self.primary, self.extras, self.extra_options)
    }
}

/// Merge `primary` and `extras` with default options.
///
/// # Examples
///
/// ```rust
/// use merge_attributes::merge_attributes;
/// use serde_json::json;
///
/// let merged = merge_attributes(
///     json!({"id": "an-id", "class": "card", "data": {"url": "http://example.com"}}),
///     [json!({"rel": "noopener", "class": "card--wide", "data": {"remote": true}})],
/// );
/// assert_eq!(
///     json!(merged),
///     json!({
///         "id": "an-id",
///         "class": "card card--wide",
///         "data": {"url": "http://example.com", "remote": true},
///         "rel": "noopener",
///     })
/// );
/// ```
#[must_use]
pub fn merge_attributes<I>(primary: Value, extras: I) -> Map<String, Value>
where
    I: IntoIterator<Item = Value>,
{
    MergeOptions::default().merge(primary, extras, Map::new())
}
