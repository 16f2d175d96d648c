//! Property-based tests for the path-ensuring merger

use plist::{Dictionary, Value};
use proptest::prelude::*;
use toggle_debug::document::{Document, FieldEdit, FieldValue, MergeOutcome, ValueKind};

fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::String),
        Just(Value::Array(Vec::new())),
        Just(Value::Dictionary(Dictionary::new())),
    ]
}

fn field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        any::<bool>().prop_map(FieldValue::Boolean),
        any::<i64>().prop_map(FieldValue::Integer),
        Just(FieldValue::EmptyDictionary),
        Just(FieldValue::EmptyArray),
    ]
}

fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Boolean(_) => ValueKind::Boolean,
        Value::Integer(_) => ValueKind::Integer,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        _ => ValueKind::Dictionary,
    }
}

/// A document holding `existing` at `path`/`key` (when given).
fn seeded(path: &[String], key: &str, existing: Option<&Value>) -> Document {
    let mut leaf = Dictionary::new();
    if let Some(value) = existing {
        leaf.insert(key.to_string(), value.clone());
    }
    let mut node = Value::Dictionary(leaf);
    for segment in path.iter().rev() {
        let mut parent = Dictionary::new();
        parent.insert(segment.clone(), node);
        node = Value::Dictionary(parent);
    }
    Document::from_value(node).unwrap()
}

proptest! {
    #[test]
    fn forced_merge_writes_exact_value(
        path in prop::collection::vec("[A-Z][a-z]{0,6}", 0..4),
        key in "[A-Za-z]{1,10}",
        existing in prop::option::of(leaf_value()),
        value in field_value(),
    ) {
        let mut doc = seeded(&path, &key, existing.as_ref());
        let segments: Vec<&str> = path.iter().map(String::as_str).collect();
        let edit = FieldEdit { path: &segments, key: &key, expected: None, value, force: true };

        prop_assert_eq!(doc.ensure_path(&edit).unwrap(), MergeOutcome::Written);
        let mut full: Vec<&str> = segments.clone();
        full.push(&key);
        prop_assert_eq!(doc.lookup(&full), Some(&value.to_value()));
    }

    #[test]
    fn unforced_merge_keeps_matching_kind(
        path in prop::collection::vec("[A-Z][a-z]{0,6}", 0..4),
        key in "[A-Za-z]{1,10}",
        existing in leaf_value(),
        value in field_value(),
    ) {
        let mut doc = seeded(&path, &key, Some(&existing));
        let before = doc.clone();
        let segments: Vec<&str> = path.iter().map(String::as_str).collect();
        let edit = FieldEdit {
            path: &segments,
            key: &key,
            expected: Some(kind_of(&existing)),
            value,
            force: false,
        };

        prop_assert_eq!(doc.ensure_path(&edit).unwrap(), MergeOutcome::Kept);
        prop_assert_eq!(doc, before);
    }

    #[test]
    fn merge_into_missing_path_creates_it(
        path in prop::collection::vec("[A-Z][a-z]{0,6}", 1..4),
        key in "[A-Za-z]{1,10}",
        value in field_value(),
    ) {
        let mut doc = Document::default();
        let segments: Vec<&str> = path.iter().map(String::as_str).collect();
        let edit = FieldEdit { path: &segments, key: &key, expected: None, value, force: false };

        prop_assert_eq!(doc.ensure_path(&edit).unwrap(), MergeOutcome::Written);
        prop_assert!(doc.dictionary_at(&segments).is_some());
    }
}
