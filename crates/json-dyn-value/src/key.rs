//! `FlexibleKey` — object keys that may be textual or integer.
//!
//! JSON object keys are always textual on the wire, but decoded documents
//! may stand in for integer-keyed maps. `FlexibleKey` keeps the construction
//! provenance (`Text` vs `Int`) while rendering a single canonical textual
//! form for encoding.

use std::borrow::Cow;
use std::fmt;

/// A map key constructed from either text or an integer.
///
/// Equality and hashing follow the construction provenance: `Int(7)` and
/// `Text("7")` are distinct keys, even though both render as `"7"`.
///
/// # Example
///
/// ```
/// use json_dyn_value::FlexibleKey;
///
/// let by_text = FlexibleKey::from_text("7");
/// let by_int = FlexibleKey::from_int(7);
/// assert_ne!(by_text, by_int);
/// assert_eq!(by_text.canonical(), by_int.canonical());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlexibleKey {
    Text(String),
    Int(i64),
}

impl FlexibleKey {
    /// Construct a textual key. Literal keys always favor this form.
    pub fn from_text(text: impl Into<String>) -> Self {
        FlexibleKey::Text(text.into())
    }

    /// Construct an integer key explicitly.
    pub fn from_int(value: i64) -> Self {
        FlexibleKey::Int(value)
    }

    /// The textual form if this key was constructed from text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FlexibleKey::Text(s) => Some(s),
            FlexibleKey::Int(_) => None,
        }
    }

    /// The integer form if this key was constructed from an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FlexibleKey::Text(_) => None,
            FlexibleKey::Int(i) => Some(*i),
        }
    }

    /// Canonical textual rendering used for object key encoding.
    ///
    /// Integer keys render in base 10, e.g. `Int(3)` renders as `"3"`.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            FlexibleKey::Text(s) => Cow::Borrowed(s),
            FlexibleKey::Int(i) => Cow::Owned(i.to_string()),
        }
    }
}

impl fmt::Display for FlexibleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexibleKey::Text(s) => f.write_str(s),
            FlexibleKey::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for FlexibleKey {
    fn from(s: &str) -> Self {
        FlexibleKey::Text(s.to_string())
    }
}

impl From<String> for FlexibleKey {
    fn from(s: String) -> Self {
        FlexibleKey::Text(s)
    }
}

impl From<i64> for FlexibleKey {
    fn from(i: i64) -> Self {
        FlexibleKey::Int(i)
    }
}
