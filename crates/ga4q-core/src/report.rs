//! Report responses and row flattening
//!
//! The backend answers column-oriented: header arrays name the columns and
//! each row carries positional value arrays. [`flatten_rows`] turns that into
//! one name → value mapping per row.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Header {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Cell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRow {
    #[serde(default)]
    pub dimension_values: Vec<Cell>,
    #[serde(default)]
    pub metric_values: Vec<Cell>,
}

/// Column-oriented runReport response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    #[serde(default)]
    pub dimension_headers: Vec<Header>,
    #[serde(default)]
    pub metric_headers: Vec<Header>,
    #[serde(default)]
    pub rows: Vec<ResponseRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u64>,
}

impl ReportResponse {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// `Serialization` if the text is not a runReport-shaped JSON object.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// One flattened row, keyed by column name in header order
///
/// Backed by a `preserve_order` JSON map: re-inserting a key overwrites the
/// value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReportRow(Map<String, Value>);

impl ReportRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; an existing key keeps its position and is overwritten.
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0
            .insert(key.into(), value.map_or(Value::Null, Value::String));
    }

    /// `None` if the key is absent, `Some(None)` if present without a value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.0.get(key).map(Value::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Flatten every response row.
///
/// Headers pair with values by position. A header past the end of a row's
/// values maps to `None`; values without a header are dropped. Dimension
/// columns come first, then metrics, and a metric sharing a dimension's name
/// overwrites it. Row order follows the response.
pub fn flatten_rows(response: &ReportResponse) -> Vec<ReportRow> {
    response
        .rows
        .iter()
        .map(|row| {
            let mut flat = ReportRow::new();
            fill(&mut flat, &response.dimension_headers, &row.dimension_values);
            fill(&mut flat, &response.metric_headers, &row.metric_values);
            flat
        })
        .collect()
}

fn fill(row: &mut ReportRow, headers: &[Header], cells: &[Cell]) {
    for (i, header) in headers.iter().enumerate() {
        let value = cells.get(i).and_then(|cell| cell.value.clone());
        row.set(header.name.as_str(), value);
    }
}
