//! Schema-less JSON value trees.
//!
//! Decodes JSON documents of unknown shape into a typed in-memory tree
//! ([`GenericValue`]) by trial decoding, and encodes either such a tree or a
//! heterogeneous collection of strongly-typed values ([`ErasedEncodable`])
//! back into JSON. No schema is declared ahead of time.
//!
//! # Example
//!
//! ```
//! use json_dyn_value::{ErasedEncodable, FlexibleKey, GenericValue, to_json_array};
//!
//! // Decode without knowing the shape. Bare digits stay numeric, quoted
//! // digits stay textual.
//! let tree = GenericValue::from_str(r#"{"id": 42, "label": "42"}"#).unwrap();
//! let keyed = tree.as_keyed().unwrap();
//! assert!(keyed[&FlexibleKey::from("id")].as_number().is_some());
//! assert!(keyed[&FlexibleKey::from("label")].as_text().is_some());
//!
//! // Round-trip through the encoder.
//! assert_eq!(GenericValue::decode(&tree.to_json()).unwrap(), tree);
//!
//! // Mix unrelated types in one encodable collection.
//! let mixed = vec![
//!     ErasedEncodable::new(tree),
//!     ErasedEncodable::from_serialize(vec![1, 2, 3]),
//! ];
//! let array = to_json_array(&mixed).unwrap();
//! assert_eq!(array.as_array().unwrap().len(), 2);
//! ```

pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod erased;
pub mod error;
pub mod key;
pub mod value;

pub use cursor::{KeyedTarget, ReadCursor, SingleValueTarget};
pub use decoder::DEFAULT_RECURSION_LIMIT;
pub use encoder::Encodable;
pub use erased::{to_json_array, ErasedEncodable};
pub use error::{DecodeError, EncodeError, ParseError, Path, PathSegment};
pub use key::FlexibleKey;
pub use value::GenericValue;
