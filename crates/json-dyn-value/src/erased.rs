//! Type erasure for heterogeneous encodable collections.
//!
//! [`ErasedEncodable`] captures a concrete value's encoding behavior as a
//! boxed closure at construction time and forgets the concrete type. A
//! `Vec<ErasedEncodable>` can then mix unrelated types and still encode
//! through one non-generic call site.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::cursor::SingleValueTarget;
use crate::encoder::Encodable;
use crate::error::EncodeError;

/// A uniformly-typed wrapper around any encodable value.
///
/// The wrapper stores only a closure bound to the captured value; nothing
/// about the concrete type is visible to holders. Asking the wrapper to
/// encode reproduces exactly what the concrete value would have written,
/// and any failure from the concrete encoder propagates unchanged.
///
/// # Example
///
/// ```
/// use json_dyn_value::{to_json_array, ErasedEncodable, GenericValue};
///
/// let mixed = vec![
///     ErasedEncodable::new(GenericValue::from(1i64)),
///     ErasedEncodable::from_serialize("two"),
/// ];
/// assert_eq!(to_json_array(&mixed).unwrap(), serde_json::json!([1, "two"]));
/// ```
pub struct ErasedEncodable {
    encode_fn: Box<dyn Fn(&mut SingleValueTarget) -> Result<(), EncodeError> + Send + Sync>,
}

impl ErasedEncodable {
    /// Capture an [`Encodable`] value, erasing its type.
    pub fn new<T>(value: T) -> Self
    where
        T: Encodable + Send + Sync + 'static,
    {
        ErasedEncodable {
            encode_fn: Box::new(move |target| value.encode_into(target)),
        }
    }

    /// Capture any `serde`-serializable value, erasing its type.
    ///
    /// Serialization happens at encode time; a failing `Serialize`
    /// implementation surfaces as [`EncodeError::Upstream`].
    pub fn from_serialize<T>(value: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        ErasedEncodable {
            encode_fn: Box::new(move |target| {
                let json = serde_json::to_value(&value).map_err(EncodeError::upstream)?;
                target.put(json);
                Ok(())
            }),
        }
    }

    /// Encode the captured value to a standalone document.
    pub fn to_json(&self) -> Result<Value, EncodeError> {
        let mut target = SingleValueTarget::new();
        (self.encode_fn)(&mut target)?;
        Ok(target.into_value())
    }
}

impl Encodable for ErasedEncodable {
    fn encode_into(&self, target: &mut SingleValueTarget) -> Result<(), EncodeError> {
        (self.encode_fn)(target)
    }
}

impl fmt::Debug for ErasedEncodable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErasedEncodable(..)")
    }
}

/// Encode an ordered collection of erased wrappers as one JSON array.
///
/// The first failing wrapper aborts the encode and its error propagates
/// unchanged.
pub fn to_json_array<'a, I>(items: I) -> Result<Value, EncodeError>
where
    I: IntoIterator<Item = &'a ErasedEncodable>,
{
    let mut out = Vec::new();
    for item in items {
        out.push(item.to_json()?);
    }
    Ok(Value::Array(out))
}

#[cfg(test)]
mod tests {
    use super::{to_json_array, ErasedEncodable};
    use crate::value::GenericValue;
    use serde_json::json;

    #[test]
    fn wrapper_reproduces_concrete_encoding() {
        let concrete = GenericValue::from_sequence(vec![
            GenericValue::from(1i64),
            GenericValue::Null,
        ]);
        let erased = ErasedEncodable::new(concrete.clone());
        assert_eq!(erased.to_json().unwrap(), concrete.to_json());
    }

    #[test]
    fn wrappers_nest() {
        let inner = ErasedEncodable::new(GenericValue::from("x"));
        let outer = ErasedEncodable::new(inner);
        assert_eq!(outer.to_json().unwrap(), json!("x"));
    }

    #[test]
    fn empty_collection_encodes_empty_array() {
        let none: Vec<ErasedEncodable> = Vec::new();
        assert_eq!(to_json_array(&none).unwrap(), json!([]));
    }
}
