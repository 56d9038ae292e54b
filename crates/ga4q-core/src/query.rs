//! Assembled report requests

use serde_json::{json, Value};

use crate::filter::FilterNode;
use crate::normalize::FieldList;

pub const DEFAULT_DIMENSIONS: &[&str] = &["date"];
pub const DEFAULT_METRICS: &[&str] = &[
    "totalUsers",
    "newUsers",
    "bounceRate",
    "screenPageViewsPerSession",
    "averageSessionDuration",
];
pub const DEFAULT_START_DATE: &str = "7daysAgo";
pub const DEFAULT_END_DATE: &str = "yesterday";

/// Inclusive date range, in any form the backend accepts
/// (`YYYY-MM-DD`, `today`, `NdaysAgo`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new(DEFAULT_START_DATE, DEFAULT_END_DATE)
    }
}

/// A fully validated report query, built once per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub property_id: String,
    pub dimensions: FieldList,
    pub metrics: FieldList,
    pub date_range: DateRange,
    pub filter: Option<FilterNode>,
}

impl QueryRequest {
    /// Backend resource name, `properties/{id}`.
    pub fn resource_name(&self) -> String {
        format!("properties/{}", self.property_id)
    }

    /// Render the runReport request body.
    pub fn to_wire(&self) -> Value {
        let names = |list: &FieldList| -> Vec<Value> {
            list.iter().map(|name| json!({ "name": name })).collect()
        };
        let mut body = json!({
            "property": self.resource_name(),
            "dimensions": names(&self.dimensions),
            "metrics": names(&self.metrics),
            "dateRanges": [{
                "startDate": self.date_range.start,
                "endDate": self.date_range.end,
            }],
        });
        if let (Some(filter), Some(obj)) = (&self.filter, body.as_object_mut()) {
            obj.insert("dimensionFilter".to_string(), filter.to_wire());
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldKind;

    fn request(filter: Option<FilterNode>) -> QueryRequest {
        QueryRequest {
            property_id: "123456".to_string(),
            dimensions: FieldList::new(FieldKind::Dimension, ["date", "city"]).unwrap(),
            metrics: FieldList::new(FieldKind::Metric, ["totalUsers"]).unwrap(),
            date_range: DateRange::default(),
            filter,
        }
    }

    #[test]
    fn test_wire_body_without_filter() {
        let body = request(None).to_wire();
        assert_eq!(
            body,
            json!({
                "property": "properties/123456",
                "dimensions": [{"name": "date"}, {"name": "city"}],
                "metrics": [{"name": "totalUsers"}],
                "dateRanges": [{"startDate": "7daysAgo", "endDate": "yesterday"}]
            })
        );
    }

    #[test]
    fn test_wire_body_with_filter() {
        use crate::filter::{FilterLeaf, InListMatch, Matcher};
        let filter = FilterNode::Leaf(FilterLeaf {
            field: "city".to_string(),
            matcher: Matcher::InList(InListMatch {
                values: vec!["Paris".to_string()],
                case_sensitive: false,
            }),
        });
        let body = request(Some(filter.clone())).to_wire();
        assert_eq!(body["dimensionFilter"], filter.to_wire());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_DIMENSIONS, &["date"]);
        assert_eq!(DEFAULT_METRICS.len(), 5);
        assert_eq!(DateRange::default(), DateRange::new("7daysAgo", "yesterday"));
    }
}
