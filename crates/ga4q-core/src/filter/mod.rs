//! Dimension filter trees
//!
//! A filter expression arrives as loosely-typed JSON using the backend's
//! FilterExpression keys (`andGroup`, `orGroup`, `notExpression`, `filter`).
//! [`FilterCompiler`] turns it into a validated [`FilterNode`] tree or fails
//! as a whole; [`FilterNode::to_wire`] renders the tree back into the
//! backend's JSON shape.

mod compile;
mod raw;

use serde_json::{json, Value};

pub use compile::{FilterCompiler, MAX_FILTER_DEPTH};
pub use raw::RawFilter;

/// How a string filter compares its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchType {
    #[default]
    Exact,
    BeginsWith,
    EndsWith,
    Contains,
    FullRegexp,
    PartialRegexp,
}

impl MatchType {
    /// Parse a wire name. Unknown names yield `None`.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "EXACT" => Some(MatchType::Exact),
            "BEGINS_WITH" => Some(MatchType::BeginsWith),
            "ENDS_WITH" => Some(MatchType::EndsWith),
            "CONTAINS" => Some(MatchType::Contains),
            "FULL_REGEXP" => Some(MatchType::FullRegexp),
            "PARTIAL_REGEXP" => Some(MatchType::PartialRegexp),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            MatchType::Exact => "EXACT",
            MatchType::BeginsWith => "BEGINS_WITH",
            MatchType::EndsWith => "ENDS_WITH",
            MatchType::Contains => "CONTAINS",
            MatchType::FullRegexp => "FULL_REGEXP",
            MatchType::PartialRegexp => "PARTIAL_REGEXP",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringMatch {
    pub value: String,
    pub match_type: MatchType,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InListMatch {
    pub values: Vec<String>,
    pub case_sensitive: bool,
}

/// Predicate applied to one dimension's value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    String(StringMatch),
    InList(InListMatch),
}

/// A predicate on one catalog dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLeaf {
    pub field: String,
    pub matcher: Matcher,
}

/// Validated filter tree
///
/// Only the compiler builds these from client input, so every leaf field is
/// a catalog dimension and every group has at least one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterNode {
    And(Vec<FilterNode>),
    Or(Vec<FilterNode>),
    Not(Box<FilterNode>),
    Leaf(FilterLeaf),
}

impl FilterNode {
    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            FilterNode::And(children) | FilterNode::Or(children) => {
                children.iter().map(FilterNode::leaf_count).sum()
            }
            FilterNode::Not(child) => child.leaf_count(),
            FilterNode::Leaf(_) => 1,
        }
    }

    /// Render as a backend FilterExpression.
    pub fn to_wire(&self) -> Value {
        match self {
            FilterNode::And(children) => json!({
                "andGroup": { "expressions": children.iter().map(FilterNode::to_wire).collect::<Vec<_>>() }
            }),
            FilterNode::Or(children) => json!({
                "orGroup": { "expressions": children.iter().map(FilterNode::to_wire).collect::<Vec<_>>() }
            }),
            FilterNode::Not(child) => json!({ "notExpression": child.to_wire() }),
            FilterNode::Leaf(leaf) => {
                let matcher = match &leaf.matcher {
                    Matcher::String(m) => json!({
                        "stringFilter": {
                            "value": m.value,
                            "matchType": m.match_type.as_wire(),
                            "caseSensitive": m.case_sensitive,
                        }
                    }),
                    Matcher::InList(m) => json!({
                        "inListFilter": {
                            "values": m.values,
                            "caseSensitive": m.case_sensitive,
                        }
                    }),
                };
                let mut filter = json!({ "fieldName": leaf.field });
                if let (Some(target), Value::Object(extra)) = (filter.as_object_mut(), matcher) {
                    target.extend(extra);
                }
                json!({ "filter": filter })
            }
        }
    }
}
