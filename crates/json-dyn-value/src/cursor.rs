//! Cursor seam between the value tree and the external JSON reader/writer.
//!
//! The decoder never touches document text. It works against [`ReadCursor`],
//! a position in an already-parsed document that can be probed for each JSON
//! shape. The stock implementation covers `&serde_json::Value`; tests (and
//! any other document source) can implement the trait themselves.
//!
//! The write side exposes two small targets: [`SingleValueTarget`] accepts
//! exactly one value, [`KeyedTarget`] accepts `FlexibleKey`-keyed entries.

use serde_json::{Map, Number, Value};

use crate::key::FlexibleKey;

/// A cursor over one position in a nested document.
///
/// Each probe reports whether the position holds that JSON shape; it never
/// consumes or advances anything. The decoder relies on the probes being
/// mutually honest: a quoted `"42"` must answer to `as_text`, not
/// `as_number`.
pub trait ReadCursor: Sized {
    /// The number at this position, if it holds a JSON number.
    fn as_number(&self) -> Option<Number>;

    /// The text at this position, if it holds a JSON string.
    fn as_text(&self) -> Option<&str>;

    /// Whether this position holds an explicit JSON null.
    fn is_null(&self) -> bool;

    /// The boolean at this position, if it holds a JSON boolean.
    fn as_bool(&self) -> Option<bool>;

    /// Child cursors in document order, if this position holds an unkeyed
    /// (array) container.
    fn unkeyed(&self) -> Option<Vec<Self>>;

    /// Every key present with its child cursor, if this position holds a
    /// keyed (object) container. Duplicate keys may appear; resolving them
    /// is the decoder's job, not the cursor's.
    fn keyed(&self) -> Option<Vec<(FlexibleKey, Self)>>;
}

impl<'a> ReadCursor for &'a Value {
    fn as_number(&self) -> Option<Number> {
        match *self {
            Value::Number(n) => Some(n.clone()),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match *self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        matches!(*self, Value::Null)
    }

    fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn unkeyed(&self) -> Option<Vec<Self>> {
        match *self {
            Value::Array(items) => Some(items.iter().collect()),
            _ => None,
        }
    }

    fn keyed(&self) -> Option<Vec<(FlexibleKey, Self)>> {
        match *self {
            Value::Object(map) => Some(
                map.iter()
                    .map(|(key, child)| (FlexibleKey::from_text(key), child))
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Write target that holds exactly one value.
///
/// A target that is never written reads back as JSON null, so encoding
/// through it stays total.
#[derive(Debug, Default)]
pub struct SingleValueTarget {
    slot: Option<Value>,
}

impl SingleValueTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the value. A later write replaces an earlier one; the target
    /// represents a single position, not a collection.
    pub fn put(&mut self, value: Value) {
        self.slot = Some(value);
    }

    pub fn is_written(&self) -> bool {
        self.slot.is_some()
    }

    pub fn into_value(self) -> Value {
        self.slot.unwrap_or(Value::Null)
    }
}

/// Write target for a keyed (object) container.
///
/// Keys render through [`FlexibleKey::canonical`]; when two keys collide on
/// the same canonical text (e.g. `Int(7)` and `Text("7")`), the first write
/// wins, matching the decoder's duplicate-key policy.
#[derive(Debug, Default)]
pub struct KeyedTarget {
    map: Map<String, Value>,
}

impl KeyedTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: &FlexibleKey, value: Value) {
        self.map.entry(key.canonical().into_owned()).or_insert(value);
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}
