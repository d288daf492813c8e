//! Encoding value trees back into JSON documents.
//!
//! Encoding a [`GenericValue`] is total: every variant in the closed set has
//! a JSON rendering, so the walk returns a document rather than a `Result`.
//! The [`Encodable`] trait is the fallible seam for arbitrary concrete types
//! (and for [`ErasedEncodable`](crate::ErasedEncodable) wrappers).

use serde_json::Value;

use crate::cursor::{KeyedTarget, SingleValueTarget};
use crate::error::EncodeError;
use crate::value::GenericValue;

impl GenericValue {
    /// Encode this tree as a JSON document. Never fails.
    ///
    /// `Wrapped` encodes as its inner value in place; the extra nesting
    /// level exists only in the tree, not on the wire.
    pub fn to_json(&self) -> Value {
        match self {
            GenericValue::Number(n) => Value::Number(n.clone()),
            GenericValue::Text(s) => Value::String(s.clone()),
            GenericValue::Bool(b) => Value::Bool(*b),
            GenericValue::Null => Value::Null,
            GenericValue::Keyed(map) => {
                let mut target = KeyedTarget::new();
                for (key, value) in map {
                    target.put(key, value.to_json());
                }
                target.into_value()
            }
            GenericValue::Sequence(items) => {
                Value::Array(items.iter().map(GenericValue::to_json).collect())
            }
            GenericValue::Wrapped(inner) => inner.to_json(),
        }
    }

    /// Encode as compact JSON text.
    pub fn to_text(&self) -> String {
        // A Value built by to_json contains nothing serde_json can reject.
        serde_json::to_string(&self.to_json()).unwrap_or_default()
    }
}

/// A value that can encode itself into a single-value target.
///
/// Implementations write at most one value; failures from the concrete
/// encoder pass through unchanged.
pub trait Encodable {
    fn encode_into(&self, target: &mut SingleValueTarget) -> Result<(), EncodeError>;
}

impl Encodable for GenericValue {
    fn encode_into(&self, target: &mut SingleValueTarget) -> Result<(), EncodeError> {
        target.put(self.to_json());
        Ok(())
    }
}
