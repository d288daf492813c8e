//! `GenericValue` — the recursive variant type for arbitrary JSON values.
//!
//! Shared by the decoder and encoder: the decoder produces these trees from
//! documents of unknown shape, the encoder walks them back out. All variants
//! own their children exclusively; trees are finite and acyclic.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::mem;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Number;

use crate::key::FlexibleKey;

/// An arbitrary JSON value, decoded without a schema.
///
/// Integers and fractional numbers are not distinguished at this layer; a
/// `Number` is a single decimal magnitude. `Wrapped` nests a single value
/// one level deeper and is construction-only: the decoder never produces it,
/// and it encodes as the inner value in place.
///
/// # Example
///
/// ```
/// use json_dyn_value::{FlexibleKey, GenericValue};
///
/// let value = GenericValue::from_str(r#"{"id": 42, "tags": ["a", "b"]}"#).unwrap();
/// let keyed = value.as_keyed().unwrap();
/// assert_eq!(keyed[&FlexibleKey::from("id")], GenericValue::from(42i64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericValue {
    Number(Number),
    Text(String),
    Bool(bool),
    Null,
    Keyed(IndexMap<FlexibleKey, GenericValue>),
    Sequence(Vec<GenericValue>),
    Wrapped(Box<GenericValue>),
}

impl GenericValue {
    /// Construct from a decimal magnitude.
    pub fn from_number(n: impl Into<Number>) -> Self {
        GenericValue::Number(n.into())
    }

    /// Construct from text.
    pub fn from_text(s: impl Into<String>) -> Self {
        GenericValue::Text(s.into())
    }

    /// Construct from a boolean.
    pub fn from_bool(b: bool) -> Self {
        GenericValue::Bool(b)
    }

    /// The explicit null value.
    pub fn null() -> Self {
        GenericValue::Null
    }

    /// Construct a sequence from any iterable of values.
    pub fn from_sequence(items: impl IntoIterator<Item = GenericValue>) -> Self {
        GenericValue::Sequence(items.into_iter().collect())
    }

    /// Construct a keyed value from `(key, value)` pairs.
    ///
    /// On duplicate keys the first-encountered value wins, matching the
    /// decoder's duplicate-key policy.
    pub fn from_keyed(
        entries: impl IntoIterator<Item = (FlexibleKey, GenericValue)>,
    ) -> Self {
        let mut map = IndexMap::new();
        for (key, value) in entries {
            map.entry(key).or_insert(value);
        }
        GenericValue::Keyed(map)
    }

    /// Wrap a value one level deeper.
    pub fn wrapped(inner: GenericValue) -> Self {
        GenericValue::Wrapped(Box::new(inner))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GenericValue::Null)
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            GenericValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            GenericValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            GenericValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_keyed(&self) -> Option<&IndexMap<FlexibleKey, GenericValue>> {
        match self {
            GenericValue::Keyed(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[GenericValue]> {
        match self {
            GenericValue::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

impl From<i64> for GenericValue {
    fn from(i: i64) -> Self {
        GenericValue::Number(Number::from(i))
    }
}

impl From<u64> for GenericValue {
    fn from(u: u64) -> Self {
        GenericValue::Number(Number::from(u))
    }
}

impl From<f64> for GenericValue {
    /// Non-finite floats have no JSON representation and map to `Null`.
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(GenericValue::Null, GenericValue::Number)
    }
}

impl From<&str> for GenericValue {
    fn from(s: &str) -> Self {
        GenericValue::Text(s.to_string())
    }
}

impl From<String> for GenericValue {
    fn from(s: String) -> Self {
        GenericValue::Text(s)
    }
}

impl From<bool> for GenericValue {
    fn from(b: bool) -> Self {
        GenericValue::Bool(b)
    }
}

impl From<Vec<GenericValue>> for GenericValue {
    fn from(items: Vec<GenericValue>) -> Self {
        GenericValue::Sequence(items)
    }
}

impl From<IndexMap<FlexibleKey, GenericValue>> for GenericValue {
    fn from(map: IndexMap<FlexibleKey, GenericValue>) -> Self {
        GenericValue::Keyed(map)
    }
}

/// Structural hashing, consistent with structural equality.
///
/// Keyed equality ignores entry order (IndexMap semantics), so keyed entry
/// hashes combine with a commutative operation.
impl Hash for GenericValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            GenericValue::Number(n) => n.hash(state),
            GenericValue::Text(s) => s.hash(state),
            GenericValue::Bool(b) => b.hash(state),
            GenericValue::Null => {}
            GenericValue::Sequence(items) => {
                items.len().hash(state);
                for item in items {
                    item.hash(state);
                }
            }
            GenericValue::Wrapped(inner) => inner.hash(state),
            GenericValue::Keyed(map) => {
                map.len().hash(state);
                let mut combined: u64 = 0;
                for (key, value) in map {
                    let mut entry = DefaultHasher::new();
                    key.hash(&mut entry);
                    value.hash(&mut entry);
                    combined = combined.wrapping_add(entry.finish());
                }
                combined.hash(state);
            }
        }
    }
}

impl Serialize for GenericValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GenericValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = serde_json::Value::deserialize(deserializer)?;
        GenericValue::decode(&document).map_err(serde::de::Error::custom)
    }
}
