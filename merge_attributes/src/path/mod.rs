//! Key-paths and nested lookup helpers.
//!
//! A [`KeyPath`] names a location inside an attribute mapping, such as
//! `class` or `data.controller`. Paths are built from a sequence of keys or
//! from a single dash-delimited string (`"data-controller"`); the dash form
//! is the only place a `-` carries meaning.
//!
//! [`KeyPath::dig`] looks a value up without touching the mapping, and
//! [`KeyPath::bury`] is its inverse: it writes a value at the path, creating
//! intermediate mappings on the way down.

use std::fmt;

use serde::{Deserialize, Deserializer, de};
use serde_json::{Map, Value};

use crate::{MergeAttributesError, MergeResult};

/// Ordered, non-empty sequence of canonical keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Build a path from an ordered sequence of keys.
    ///
    /// # Errors
    ///
    /// Returns [`MergeAttributesError::EmptyKeyPath`] when `keys` is empty and
    /// [`MergeAttributesError::EmptyKeySegment`] when any key is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use merge_attributes::KeyPath;
    ///
    /// let path = KeyPath::new(["data", "controller"])?;
    /// assert_eq!(path.keys(), ["data", "controller"]);
    /// # Ok::<_, merge_attributes::MergeAttributesError>(())
    /// ```
    pub fn new<I, K>(keys: I) -> MergeResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let owned: Vec<String> = keys.into_iter().map(Into::into).collect();
        if owned.is_empty() {
            return Err(MergeAttributesError::EmptyKeyPath);
        }
        if owned.iter().any(String::is_empty) {
            return Err(MergeAttributesError::empty_segment(owned.join(".")));
        }
        Ok(Self(owned))
    }

    /// Split a dash-delimited string such as `data-controller` into a path.
    ///
    /// # Errors
    ///
    /// Returns [`MergeAttributesError::EmptyKeyPath`] for an empty string and
    /// [`MergeAttributesError::EmptyKeySegment`] when a dash is leading,
    /// trailing or doubled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use merge_attributes::KeyPath;
    ///
    /// let dashed = KeyPath::parse("data-controller")?;
    /// assert_eq!(dashed, KeyPath::new(["data", "controller"])?);
    /// assert!(KeyPath::parse("data--controller").is_err());
    /// # Ok::<_, merge_attributes::MergeAttributesError>(())
    /// ```
    pub fn parse(dashed: &str) -> MergeResult<Self> {
        if dashed.is_empty() {
            return Err(MergeAttributesError::EmptyKeyPath);
        }
        if dashed.split('-').any(str::is_empty) {
            return Err(MergeAttributesError::empty_segment(dashed));
        }
        Ok(Self(dashed.split('-').map(str::to_owned).collect()))
    }

    /// Path built from compile-time keys known to be non-empty.
    pub(crate) fn from_static(keys: &[&str]) -> Self {
        Self(keys.iter().map(|key| (*key).to_owned()).collect())
    }

    /// Keys of the path, outermost first.
    #[must_use]
    pub const fn keys(&self) -> &[String] {
        self.0.as_slice()
    }

    /// Returns `true` when `other` lies strictly below this path.
    ///
    /// ```rust
    /// use merge_attributes::KeyPath;
    ///
    /// let data = KeyPath::parse("data")?;
    /// assert!(data.is_ancestor_of(&KeyPath::parse("data-controller")?));
    /// assert!(!data.is_ancestor_of(&data));
    /// # Ok::<_, merge_attributes::MergeAttributesError>(())
    /// ```
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        other.0.len() > self.0.len() && other.0.starts_with(&self.0)
    }

    /// Look up the value at this path, returning `None` when any key is
    /// missing or an intermediate value is not a mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use merge_attributes::KeyPath;
    /// use serde_json::json;
    ///
    /// let attrs = json!({"data": {"controller": "modal"}});
    /// let map = attrs.as_object().expect("object literal");
    /// let path = KeyPath::parse("data-controller")?;
    /// assert_eq!(path.dig(map), Some(&json!("modal")));
    /// assert_eq!(KeyPath::parse("data-action")?.dig(map), None);
    /// # Ok::<_, merge_attributes::MergeAttributesError>(())
    /// ```
    #[must_use]
    pub fn dig<'a>(&self, map: &'a Map<String, Value>) -> Option<&'a Value> {
        let (leaf, parents) = self.0.split_last()?;
        let mut current = map;
        for key in parents {
            current = current.get(key)?.as_object()?;
        }
        current.get(leaf)
    }

    /// Write `value` at this path.
    ///
    /// Missing intermediate keys are created as empty mappings and
    /// intermediate values that are not mappings are replaced by one, so the
    /// leaf is always written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use merge_attributes::KeyPath;
    /// use serde_json::{Map, json};
    ///
    /// let mut map = Map::new();
    /// KeyPath::parse("data-action")?.bury(&mut map, json!("click->modal#open"));
    /// assert_eq!(json!(map), json!({"data": {"action": "click->modal#open"}}));
    /// # Ok::<_, merge_attributes::MergeAttributesError>(())
    /// ```
    pub fn bury(&self, map: &mut Map<String, Value>, value: Value) {
        let Some((leaf, parents)) = self.0.split_last() else {
            return;
        };
        let mut current = map;
        for key in parents {
            let slot = current
                .entry(key.as_str())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(next) = slot else {
                return;
            };
            current = next;
        }
        current.insert(leaf.clone(), value);
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl TryFrom<&str> for KeyPath {
    type Error = MergeAttributesError;

    fn try_from(dashed: &str) -> MergeResult<Self> {
        Self::parse(dashed)
    }
}

impl TryFrom<String> for KeyPath {
    type Error = MergeAttributesError;

    fn try_from(dashed: String) -> MergeResult<Self> {
        Self::parse(&dashed)
    }
}

impl TryFrom<Vec<String>> for KeyPath {
    type Error = MergeAttributesError;

    fn try_from(keys: Vec<String>) -> MergeResult<Self> {
        Self::new(keys)
    }
}

impl TryFrom<&[&str]> for KeyPath {
    type Error = MergeAttributesError;

    fn try_from(keys: &[&str]) -> MergeResult<Self> {
        Self::new(keys.iter().copied())
    }
}

/// Accepted serialised forms of a key-path.
#[derive(Deserialize)]
#[serde(untagged)]
enum KeyPathRepr {
    Dashed(String),
    Keys(Vec<String>),
}

impl<'de> Deserialize<'de> for KeyPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match KeyPathRepr::deserialize(deserializer)? {
            KeyPathRepr::Dashed(dashed) => Self::parse(&dashed),
            KeyPathRepr::Keys(keys) => Self::new(keys),
        };
        parsed.map_err(<D::Error as de::Error>::custom)
    }
}
