//! Trial decoding of documents with no schema.
//!
//! No type tag exists in the wire data, so the decoder tries candidate
//! interpretations at each position and accepts the first that matches.
//! The order is load-bearing: number before text keeps bare digit tokens
//! numeric, scalars before containers keeps primitives from matching as
//! zero-key objects.
//!
//! Order at each position, first success wins:
//!
//! 1. single-value trials: number, text, null, bool, then a sequence read
//!    where any element failure makes the whole trial fall through;
//! 2. keyed container, recursing per key (duplicate keys: first wins,
//!    later duplicates are discarded undecoded);
//! 3. unkeyed container, recursing per element, element failures propagate;
//! 4. otherwise the position is exhausted.

use indexmap::IndexMap;

use crate::cursor::ReadCursor;
use crate::error::{DecodeError, ParseError, Path, PathSegment};
use crate::value::GenericValue;

/// Default cap on nesting depth, guarding the call stack against
/// adversarially deep documents.
pub const DEFAULT_RECURSION_LIMIT: usize = 128;

impl GenericValue {
    /// Decode a JSON document from UTF-8 text.
    pub fn from_str(text: &str) -> Result<Self, ParseError> {
        let document: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::decode(&document)?)
    }

    /// Decode a JSON document from UTF-8 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        let document: serde_json::Value = serde_json::from_slice(bytes)?;
        Ok(Self::decode(&document)?)
    }

    /// Decode whatever shape the cursor is positioned over.
    pub fn decode<C: ReadCursor>(cursor: C) -> Result<Self, DecodeError> {
        Self::decode_with_limit(cursor, DEFAULT_RECURSION_LIMIT)
    }

    /// Decode with an explicit recursion limit instead of
    /// [`DEFAULT_RECURSION_LIMIT`].
    pub fn decode_with_limit<C: ReadCursor>(
        cursor: C,
        limit: usize,
    ) -> Result<Self, DecodeError> {
        let mut path = Vec::new();
        decode_at(&cursor, &mut path, limit, limit)
    }
}

fn decode_at<C: ReadCursor>(
    cursor: &C,
    path: &mut Vec<PathSegment>,
    remaining: usize,
    limit: usize,
) -> Result<GenericValue, DecodeError> {
    if remaining == 0 {
        return Err(DecodeError::DepthLimitExceeded {
            path: Path::from(path.clone()),
            limit,
        });
    }

    // 1. Single-value trials. Number must precede text so that a bare `42`
    // stays a magnitude; null precedes bool mirroring the contract order.
    if let Some(n) = cursor.as_number() {
        return Ok(GenericValue::Number(n));
    }
    if let Some(s) = cursor.as_text() {
        return Ok(GenericValue::Text(s.to_string()));
    }
    if cursor.is_null() {
        return Ok(GenericValue::Null);
    }
    if let Some(b) = cursor.as_bool() {
        return Ok(GenericValue::Bool(b));
    }
    if let Some(children) = cursor.unkeyed() {
        // Sequence as a single-value trial: an element failure means this
        // interpretation does not apply, and the dedicated unkeyed attempt
        // below reports it instead. A blown depth limit aborts outright;
        // retrying it through the fallback attempts would both misreport
        // the failure and redo the whole subtree at every level.
        match decode_elements(&children, path, remaining, limit) {
            Ok(items) => return Ok(GenericValue::Sequence(items)),
            Err(depth @ DecodeError::DepthLimitExceeded { .. }) => return Err(depth),
            Err(_) => {}
        }
    }

    // 2. Keyed container.
    if let Some(entries) = cursor.keyed() {
        let mut map = IndexMap::with_capacity(entries.len());
        for (key, child) in entries {
            if map.contains_key(&key) {
                // First-encountered value wins; the duplicate is discarded
                // without decoding it.
                continue;
            }
            path.push(PathSegment::Key(key.canonical().into_owned()));
            let decoded = decode_at(&child, path, remaining - 1, limit);
            path.pop();
            let value = decoded.map_err(|e| DecodeError::upstream(path, e))?;
            map.insert(key, value);
        }
        return Ok(GenericValue::Keyed(map));
    }

    // 3. Unkeyed container.
    if let Some(children) = cursor.unkeyed() {
        let items = decode_elements(&children, path, remaining, limit)
            .map_err(|e| DecodeError::upstream(path, e))?;
        return Ok(GenericValue::Sequence(items));
    }

    // 4. Nothing matched.
    Err(DecodeError::Exhausted {
        path: Path::from(path.clone()),
    })
}

fn decode_elements<C: ReadCursor>(
    children: &[C],
    path: &mut Vec<PathSegment>,
    remaining: usize,
    limit: usize,
) -> Result<Vec<GenericValue>, DecodeError> {
    let mut items = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        path.push(PathSegment::Index(index));
        let decoded = decode_at(child, path, remaining - 1, limit);
        path.pop();
        items.push(decoded?);
    }
    Ok(items)
}
