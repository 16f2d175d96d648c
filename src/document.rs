//! Configuration document model and the path-ensuring merger.
//!
//! A [`Document`] is a plist whose root is always a dictionary. Edits are
//! described by [`FieldEdit`] descriptors: a dictionary path, a leaf key, the
//! value to write, the value kind the leaf is expected to have, and whether
//! the write is forced. Missing dictionaries along the path are created;
//! existing non-dictionary nodes are never written through.

use crate::error::DocumentError;
use plist::{Dictionary, Value};
use std::fmt;

/// Runtime kind tag checked against an existing leaf before a typed merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Boolean,
    Integer,
    String,
    Dictionary,
    Array,
}

impl ValueKind {
    /// Whether `value` is of this kind.
    pub fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ValueKind::Boolean, Value::Boolean(_))
                | (ValueKind::Integer, Value::Integer(_))
                | (ValueKind::String, Value::String(_))
                | (ValueKind::Dictionary, Value::Dictionary(_))
                | (ValueKind::Array, Value::Array(_))
        )
    }
}

/// Value written by a [`FieldEdit`]. Kept allocation-free so descriptor
/// tables can be `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Boolean(bool),
    Integer(i64),
    EmptyDictionary,
    EmptyArray,
}

impl FieldValue {
    pub fn to_value(self) -> Value {
        match self {
            FieldValue::Boolean(b) => Value::Boolean(b),
            FieldValue::Integer(i) => Value::Integer(i.into()),
            FieldValue::EmptyDictionary => Value::Dictionary(Dictionary::new()),
            FieldValue::EmptyArray => Value::Array(Vec::new()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::EmptyDictionary => write!(f, "{{}}"),
            FieldValue::EmptyArray => write!(f, "[]"),
        }
    }
}

/// A single field edit: ensure `path` exists, then conditionally set `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEdit<'a> {
    pub path: &'a [&'a str],
    pub key: &'a str,
    pub expected: Option<ValueKind>,
    pub value: FieldValue,
    pub force: bool,
}

/// What [`Document::ensure_path`] did at the leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The value was written.
    Written,
    /// An existing value of the expected kind was kept.
    Kept,
    /// The edit had no key; nothing was touched.
    Skipped,
}

/// A plist document with a dictionary root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Dictionary,
}

impl Document {
    pub fn new(root: Dictionary) -> Self {
        Self { root }
    }

    /// Wrap a parsed plist value. Returns `None` when the root is not a dictionary.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Dictionary(root) => Some(Self { root }),
            _ => None,
        }
    }

    pub fn root(&self) -> &Dictionary {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Dictionary(self.root)
    }

    /// Look up a value by key path. Any non-dictionary along the way yields `None`.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        self.dictionary_at(parents)?.get(last)
    }

    /// Dictionary at `path`, if every segment exists and is a dictionary.
    pub fn dictionary_at(&self, path: &[&str]) -> Option<&Dictionary> {
        let mut current = &self.root;
        for segment in path {
            current = current.get(segment)?.as_dictionary()?;
        }
        Some(current)
    }

    /// Walk `path`, creating empty dictionaries for missing segments.
    ///
    /// Fails without modifying anything when an existing segment is not a
    /// dictionary.
    pub fn ensure_dictionary(&mut self, path: &[&str]) -> Result<&mut Dictionary, DocumentError> {
        let mut current = &mut self.root;
        for (depth, segment) in path.iter().enumerate() {
            if !current.contains_key(segment) {
                current.insert(segment.to_string(), Value::Dictionary(Dictionary::new()));
            }
            current = match current.get_mut(segment) {
                Some(Value::Dictionary(dict)) => dict,
                _ => {
                    return Err(DocumentError::NotADictionary {
                        path: path[..=depth].join("."),
                    })
                }
            };
        }
        Ok(current)
    }

    /// Apply a [`FieldEdit`].
    ///
    /// The leaf is written when the edit is forced, when the key is absent,
    /// or when the existing value's kind differs from `edit.expected`.
    pub fn ensure_path(&mut self, edit: &FieldEdit<'_>) -> Result<MergeOutcome, DocumentError> {
        if edit.key.is_empty() {
            return Ok(MergeOutcome::Skipped);
        }
        let parent = self.ensure_dictionary(edit.path)?;
        let write = edit.force
            || match parent.get(edit.key) {
                None => true,
                Some(existing) => edit.expected.is_some_and(|kind| !kind.matches(existing)),
            };
        if !write {
            return Ok(MergeOutcome::Kept);
        }
        parent.insert(edit.key.to_string(), edit.value.to_value());
        Ok(MergeOutcome::Written)
    }

    /// Set a string value under an existing-or-created dictionary path.
    pub fn set_string(&mut self, path: &[&str], key: &str, value: String) -> Result<(), DocumentError> {
        self.ensure_dictionary(path)?
            .insert(key.to_string(), Value::String(value));
        Ok(())
    }

    /// Append `item` to the string array at `path`/`key` unless already present.
    ///
    /// Returns `true` when the item was appended.
    pub fn ensure_array_contains(
        &mut self,
        path: &[&str],
        key: &str,
        item: &str,
    ) -> Result<bool, DocumentError> {
        let parent = self.ensure_dictionary(path)?;
        let array = match parent.get_mut(key) {
            Some(Value::Array(array)) => array,
            _ => {
                return Err(DocumentError::NotAnArray {
                    path: format!("{}.{}", path.join("."), key),
                })
            }
        };
        if array_contains_string(array.as_slice(), item) {
            return Ok(false);
        }
        array.push(Value::String(item.to_string()));
        Ok(true)
    }
}

/// Whether an array holds a string equal to `item`.
pub fn array_contains_string(array: &[Value], item: &str) -> bool {
    array.iter().any(|v| v.as_string() == Some(item))
}

/// Truthiness of a plist value: false, zero and empty containers are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Integer(i) => i
            .as_signed()
            .map(|v| v != 0)
            .or_else(|| i.as_unsigned().map(|v| v != 0))
            .unwrap_or(true),
        Value::Real(r) => *r != 0.0,
        Value::String(s) => !s.is_empty(),
        Value::Data(d) => !d.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Dictionary(d) => !d.is_empty(),
        _ => true,
    }
}

/// Short human-readable rendering of a plist value.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Boolean(b) => b.to_string(),
        Value::Integer(i) => i
            .as_signed()
            .map(|v| v.to_string())
            .or_else(|| i.as_unsigned().map(|v| v.to_string()))
            .unwrap_or_default(),
        Value::Real(r) => r.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(a) => format!("<array of {}>", a.len()),
        Value::Dictionary(d) => format!("<dict of {}>", d.len()),
        Value::Data(d) => format!("<{} bytes>", d.len()),
        other => format!("{:?}", other),
    }
}
