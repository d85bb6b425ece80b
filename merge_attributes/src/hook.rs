//! Preprocessing hook support.
//!
//! This module provides the [`Preprocess`] trait and [`PreprocessContext`]
//! so callers can rewrite each flattened input before blank filtering and
//! merging run.

use serde_json::Value;

/// Hook invoked once per flattened input entry.
///
/// The hook runs after nested arrays have been expanded and before blank
/// entries are discarded, so it observes every entry, blank ones included.
/// Its return value replaces the entry.
///
/// Closures of the shape `Fn(Value, usize, &[Value]) -> Value` implement the
/// trait directly.
///
/// # Examples
///
/// ```rust
/// use merge_attributes::{Preprocess, PreprocessContext};
/// use serde_json::{Value, json};
///
/// /// Tags every entry with its position.
/// struct Position;
///
/// impl Preprocess for Position {
///     fn preprocess(&self, mut entry: Value, ctx: &PreprocessContext<'_>) -> Value {
///         if let Some(map) = entry.as_object_mut() {
///             map.insert(format!("data-value-{}", ctx.index()), json!(ctx.index()));
///         }
///         entry
///     }
/// }
///
/// let merged = merge_attributes::AttributeMerge::new(json!([{"id": "a"}, {"rel": "b"}]))
///     .preprocess(Position)
///     .merge();
/// assert_eq!(merged.get("data-value-1"), Some(&json!(1)));
/// ```
pub trait Preprocess: Send + Sync {
    /// Rewrite `entry`, the element at `ctx.index()` of the flattened inputs.
    fn preprocess(&self, entry: Value, ctx: &PreprocessContext<'_>) -> Value;
}

impl<F> Preprocess for F
where
    F: Fn(Value, usize, &[Value]) -> Value + Send + Sync,
{
    fn preprocess(&self, entry: Value, ctx: &PreprocessContext<'_>) -> Value {
        self(entry, ctx.index(), ctx.entries())
    }
}

/// Context passed to [`Preprocess::preprocess`].
///
/// `entries` is the flattened input sequence as it stood before any hook
/// call, so every invocation sees the same snapshot.
#[derive(Debug, Clone, Copy)]
pub struct PreprocessContext<'a> {
    index: usize,
    entries: &'a [Value],
}

impl<'a> PreprocessContext<'a> {
    /// Creates a context for the entry at `index` of `entries`.
    #[must_use]
    pub const fn new(index: usize, entries: &'a [Value]) -> Self {
        Self { index, entries }
    }

    /// Zero-based position of the entry in the flattened inputs.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The full flattened input sequence.
    #[must_use]
    pub const fn entries(&self) -> &'a [Value] {
        self.entries
    }

    /// Number of flattened entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the flattened inputs are empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
