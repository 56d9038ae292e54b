//! Dimension and metric list normalisation
//!
//! Calling agents serialise list arguments inconsistently: a native JSON
//! array, a JSON array encoded as a string, or a comma-separated string.
//! All three normalise to the same [`FieldList`].

use serde::Serialize;
use serde_json::Value;

use crate::catalog::FieldKind;
use crate::errors::{QueryError, Result};

/// Ordered, non-empty list of trimmed field names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldList(Vec<String>);

impl FieldList {
    /// Trim every name, drop blanks, and fail if nothing is left.
    pub fn new<I, S>(kind: FieldKind, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Err(QueryError::EmptyList { kind });
        }
        Ok(Self(names))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// String form of one list element.
///
/// `null` becomes empty (and is later dropped); nested arrays and objects
/// keep their compact JSON text.
fn element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Split a textual list argument into raw elements.
fn split_text(text: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items.iter().map(element_text).collect(),
        Ok(scalar) => vec![element_text(&scalar)],
        Err(_) => text.split(',').map(str::to_string).collect(),
    }
}

/// Normalise a raw dimension or metric argument.
///
/// # Errors
///
/// `EmptyList` when nothing survives trimming (including `null`);
/// `InvalidList` for an object argument.
pub fn normalize_field_list(kind: FieldKind, raw: &Value) -> Result<FieldList> {
    let elements: Vec<String> = match raw {
        Value::Array(items) => items.iter().map(element_text).collect(),
        Value::String(text) => split_text(text),
        Value::Null => Vec::new(),
        Value::Bool(_) | Value::Number(_) => vec![element_text(raw)],
        Value::Object(_) => {
            return Err(QueryError::InvalidList {
                kind,
                reason: "got a JSON object".to_string(),
            })
        }
    };
    FieldList::new(kind, elements)
}
