//! Decoding documents of unknown shape, including pathological cursors that
//! serde_json itself can never produce (duplicate keys, positions offering
//! no shape at all).

use json_dyn_value::{DecodeError, FlexibleKey, GenericValue, ReadCursor};
use serde_json::{json, Number};

/// A hand-built document cursor, independent of serde_json.
#[derive(Clone)]
enum FakeCursor {
    /// Offers none of the JSON shapes.
    Opaque,
    Int(i64),
    Keyed(Vec<(FlexibleKey, FakeCursor)>),
    Unkeyed(Vec<FakeCursor>),
}

impl ReadCursor for FakeCursor {
    fn as_number(&self) -> Option<Number> {
        match self {
            FakeCursor::Int(i) => Some(Number::from(*i)),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        None
    }

    fn is_null(&self) -> bool {
        false
    }

    fn as_bool(&self) -> Option<bool> {
        None
    }

    fn unkeyed(&self) -> Option<Vec<Self>> {
        match self {
            FakeCursor::Unkeyed(items) => Some(items.clone()),
            _ => None,
        }
    }

    fn keyed(&self) -> Option<Vec<(FlexibleKey, Self)>> {
        match self {
            FakeCursor::Keyed(entries) => Some(entries.clone()),
            _ => None,
        }
    }
}

#[test]
fn test_bare_digits_decode_numeric() {
    let doc = json!(42);
    assert_eq!(
        GenericValue::decode(&doc).unwrap(),
        GenericValue::from(42i64)
    );
}

#[test]
fn test_quoted_digits_decode_textual() {
    let doc = json!("42");
    assert_eq!(GenericValue::decode(&doc).unwrap(), GenericValue::from("42"));
}

#[test]
fn test_null_is_explicit() {
    let doc = json!(null);
    assert_eq!(GenericValue::decode(&doc).unwrap(), GenericValue::Null);
}

#[test]
fn test_booleans_survive() {
    assert_eq!(
        GenericValue::decode(&json!(false)).unwrap(),
        GenericValue::from(false)
    );
}

#[test]
fn test_fractional_numbers_decode() {
    let doc = json!(2.5);
    let value = GenericValue::decode(&doc).unwrap();
    assert_eq!(value.as_number().and_then(|n| n.as_f64()), Some(2.5));
}

#[test]
fn test_nested_mixed_document() {
    let doc = json!({
        "name": "pod",
        "replicas": 3,
        "labels": {"app": "web"},
        "ports": [80, 443],
        "owner": null,
    });
    let tree = GenericValue::decode(&doc).unwrap();
    let keyed = tree.as_keyed().unwrap();
    assert_eq!(keyed.len(), 5);
    assert!(keyed[&FlexibleKey::from("owner")].is_null());
    let ports = keyed[&FlexibleKey::from("ports")].as_sequence().unwrap();
    assert_eq!(ports.len(), 2);
    assert_eq!(ports[0], GenericValue::from(80i64));
}

#[test]
fn test_object_iteration_follows_document_order() {
    let tree = GenericValue::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<String> = tree
        .as_keyed()
        .unwrap()
        .keys()
        .map(|k| k.canonical().into_owned())
        .collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_empty_containers() {
    assert_eq!(
        GenericValue::decode(&json!([])).unwrap(),
        GenericValue::from_sequence(vec![])
    );
    assert_eq!(
        GenericValue::decode(&json!({})).unwrap(),
        GenericValue::from_keyed(vec![])
    );
}

#[test]
fn test_from_slice_matches_from_str() {
    let text = r#"[1, "two", null]"#;
    assert_eq!(
        GenericValue::from_slice(text.as_bytes()).unwrap(),
        GenericValue::from_str(text).unwrap()
    );
}

#[test]
fn test_opaque_position_exhausts() {
    let err = GenericValue::decode(FakeCursor::Opaque).unwrap_err();
    match &err {
        DecodeError::Exhausted { path } => assert!(path.is_root()),
        other => panic!("expected Exhausted, got {other:?}"),
    }
    assert!(err.to_string().contains("could not decode any meaningful value"));
}

#[test]
fn test_duplicate_keys_first_value_wins() {
    let cursor = FakeCursor::Keyed(vec![
        (FlexibleKey::from("a"), FakeCursor::Int(1)),
        (FlexibleKey::from("a"), FakeCursor::Int(2)),
    ]);
    let tree = GenericValue::decode(cursor).unwrap();
    let keyed = tree.as_keyed().unwrap();
    assert_eq!(keyed.len(), 1);
    assert_eq!(keyed[&FlexibleKey::from("a")], GenericValue::from(1i64));
}

#[test]
fn test_duplicate_key_discarded_without_decoding() {
    // The duplicate's value offers no shape; if it were decoded the whole
    // document would fail.
    let cursor = FakeCursor::Keyed(vec![
        (FlexibleKey::from("a"), FakeCursor::Int(1)),
        (FlexibleKey::from("a"), FakeCursor::Opaque),
    ]);
    let tree = GenericValue::decode(cursor).unwrap();
    assert_eq!(
        tree.as_keyed().unwrap()[&FlexibleKey::from("a")],
        GenericValue::from(1i64)
    );
}

#[test]
fn test_integer_cursor_keys_survive_losslessly() {
    let cursor = FakeCursor::Keyed(vec![(FlexibleKey::from_int(7), FakeCursor::Int(1))]);
    let tree = GenericValue::decode(cursor).unwrap();
    let keyed = tree.as_keyed().unwrap();
    assert!(keyed.contains_key(&FlexibleKey::from_int(7)));
    assert!(!keyed.contains_key(&FlexibleKey::from_text("7")));
    // Both render the same canonical object key on encode.
    assert_eq!(tree.to_json(), json!({"7": 1}));
}

#[test]
fn test_nested_failure_reports_paths() {
    let cursor = FakeCursor::Keyed(vec![(
        FlexibleKey::from("a"),
        FakeCursor::Unkeyed(vec![FakeCursor::Int(0), FakeCursor::Opaque]),
    )]);
    let err = GenericValue::decode(cursor).unwrap_err();
    match &err {
        DecodeError::Upstream { path, source } => {
            assert_eq!(path.to_string(), "$.a");
            match source.as_ref() {
                DecodeError::Exhausted { path } => assert_eq!(path.to_string(), "$.a[1]"),
                other => panic!("expected Exhausted leaf, got {other:?}"),
            }
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[test]
fn test_failing_array_element_surfaces_not_exhaustion() {
    let cursor = FakeCursor::Unkeyed(vec![FakeCursor::Int(1), FakeCursor::Opaque]);
    let err = GenericValue::decode(cursor).unwrap_err();
    // The single-value sequence trial falls through, the dedicated unkeyed
    // attempt reports the element.
    assert!(matches!(err, DecodeError::Upstream { .. }));
}

#[test]
fn test_serde_deserialize_routes_through_decoder() {
    let tree: GenericValue = serde_json::from_str(r#"{"n": 42, "s": "42"}"#).unwrap();
    let keyed = tree.as_keyed().unwrap();
    assert!(keyed[&FlexibleKey::from("n")].as_number().is_some());
    assert!(keyed[&FlexibleKey::from("s")].as_text().is_some());
}
