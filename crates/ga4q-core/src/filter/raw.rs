//! Closed decoding of one raw filter node
//!
//! Each node is classified by its single recognised key before anything is
//! compiled. Children stay as borrowed raw JSON; the compiler recurses into
//! them.

use serde_json::{Map, Value};

use super::{InListMatch, MatchType, Matcher, StringMatch};
use crate::errors::{QueryError, Result};

const KEY_AND: &str = "andGroup";
const KEY_OR: &str = "orGroup";
const KEY_NOT: &str = "notExpression";
const KEY_FILTER: &str = "filter";

const NODE_KEYS: [&str; 4] = [KEY_AND, KEY_OR, KEY_NOT, KEY_FILTER];
const GROUP_KEYS: [&str; 1] = ["expressions"];
const LEAF_KEYS: [&str; 3] = ["fieldName", "stringFilter", "inListFilter"];
const STRING_KEYS: [&str; 3] = ["value", "matchType", "caseSensitive"];
const IN_LIST_KEYS: [&str; 2] = ["values", "caseSensitive"];

/// Shape of one raw filter node
#[derive(Debug, Clone, PartialEq)]
pub enum RawFilter<'a> {
    AndGroup(&'a [Value]),
    OrGroup(&'a [Value]),
    Not(&'a Value),
    /// Field name (not yet checked against the catalog) and matcher
    Leaf { field: &'a str, matcher: Matcher },
}

impl<'a> RawFilter<'a> {
    /// Classify a raw node.
    ///
    /// # Errors
    ///
    /// Fails for non-objects, nodes without exactly one recognised key,
    /// unrecognised keys, empty groups and malformed leaves.
    pub fn decode(raw: &'a Value) -> Result<Self> {
        let node = as_object(raw, "filter node")?;
        reject_unknown_keys(node, &NODE_KEYS, "filter node")?;

        let mut present = NODE_KEYS.iter().filter(|k| node.contains_key(**k));
        let key = match (present.next(), present.next()) {
            (Some(key), None) => *key,
            (None, _) => {
                return Err(malformed(format!(
                    "node must contain one of {}",
                    NODE_KEYS.join(", ")
                )))
            }
            (Some(first), Some(second)) => {
                return Err(malformed(format!(
                    "node contains both '{first}' and '{second}'"
                )))
            }
        };

        let body = &node[key];
        match key {
            KEY_AND => decode_group(body, KEY_AND).map(RawFilter::AndGroup),
            KEY_OR => decode_group(body, KEY_OR).map(RawFilter::OrGroup),
            KEY_NOT => Ok(RawFilter::Not(body)),
            _ => decode_leaf(body),
        }
    }
}

fn malformed(reason: impl Into<String>) -> QueryError {
    QueryError::MalformedFilter {
        reason: reason.into(),
    }
}

fn as_object<'a>(raw: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    raw.as_object()
        .ok_or_else(|| malformed(format!("{what} must be an object, got {}", type_name(raw))))
}

fn reject_unknown_keys(obj: &Map<String, Value>, allowed: &[&str], what: &str) -> Result<()> {
    match obj.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(key) => Err(malformed(format!("unrecognised key '{key}' in {what}"))),
        None => Ok(()),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn decode_group<'a>(body: &'a Value, key: &str) -> Result<&'a [Value]> {
    let group = as_object(body, key)?;
    reject_unknown_keys(group, &GROUP_KEYS, key)?;
    match group.get("expressions") {
        Some(Value::Array(items)) if !items.is_empty() => Ok(items.as_slice()),
        Some(Value::Array(_)) => Err(malformed(format!("{key}.expressions is empty"))),
        Some(other) => Err(malformed(format!(
            "{key}.expressions must be an array, got {}",
            type_name(other)
        ))),
        None => Err(malformed(format!("{key} is missing expressions"))),
    }
}

fn decode_leaf(body: &Value) -> Result<RawFilter<'_>> {
    let leaf = as_object(body, KEY_FILTER)?;
    reject_unknown_keys(leaf, &LEAF_KEYS, KEY_FILTER)?;

    let field = match leaf.get("fieldName") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.as_str(),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            return Err(QueryError::MissingFilterField)
        }
        Some(other) => {
            return Err(malformed(format!(
                "fieldName must be a string, got {}",
                type_name(other)
            )))
        }
    };

    let matcher = match (leaf.get("stringFilter"), leaf.get("inListFilter")) {
        (Some(string), None) => Matcher::String(decode_string_match(string)?),
        (None, Some(in_list)) => Matcher::InList(decode_in_list_match(in_list)?),
        (Some(_), Some(_)) => {
            return Err(QueryError::AmbiguousMatcher {
                field: field.to_string(),
            })
        }
        (None, None) => {
            return Err(QueryError::MissingMatcher {
                field: field.to_string(),
            })
        }
    };

    Ok(RawFilter::Leaf { field, matcher })
}

fn case_sensitive(obj: &Map<String, Value>, what: &str) -> Result<bool> {
    match obj.get("caseSensitive") {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(malformed(format!(
            "{what}.caseSensitive must be a boolean, got {}",
            type_name(other)
        ))),
    }
}

fn decode_string_match(raw: &Value) -> Result<StringMatch> {
    let obj = as_object(raw, "stringFilter")?;
    reject_unknown_keys(obj, &STRING_KEYS, "stringFilter")?;

    let value = match obj.get("value") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(malformed(format!(
                "stringFilter.value must be a string, got {}",
                type_name(other)
            )))
        }
    };
    let match_type = obj
        .get("matchType")
        .and_then(Value::as_str)
        .and_then(MatchType::from_wire)
        .unwrap_or_default();

    Ok(StringMatch {
        value,
        match_type,
        case_sensitive: case_sensitive(obj, "stringFilter")?,
    })
}

fn decode_in_list_match(raw: &Value) -> Result<InListMatch> {
    let obj = as_object(raw, "inListFilter")?;
    reject_unknown_keys(obj, &IN_LIST_KEYS, "inListFilter")?;

    let values = match obj.get("values") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(malformed(format!(
                    "inListFilter.values must contain strings, got {}",
                    type_name(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(malformed(format!(
                "inListFilter.values must be an array, got {}",
                type_name(other)
            )))
        }
    };

    Ok(InListMatch {
        values,
        case_sensitive: case_sensitive(obj, "inListFilter")?,
    })
}
