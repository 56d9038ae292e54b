//! Recursive filter compilation

use serde_json::Value;

use super::raw::RawFilter;
use super::{FilterLeaf, FilterNode};
use crate::catalog::Catalog;
use crate::errors::{QueryError, Result};

/// Default bound on nodes along any root-to-leaf path
pub const MAX_FILTER_DEPTH: usize = 32;

/// Compiles raw filter expressions against a catalog
///
/// Compilation is all-or-nothing: the first invalid node anywhere in the
/// tree fails the whole call and no partial tree is returned.
#[derive(Debug, Clone, Copy)]
pub struct FilterCompiler<'c> {
    catalog: &'c Catalog,
    max_depth: usize,
}

impl<'c> FilterCompiler<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            max_depth: MAX_FILTER_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Compile a parsed filter expression.
    ///
    /// # Errors
    ///
    /// Any structural problem, unknown dimension, or excess nesting.
    pub fn compile(&self, raw: &Value) -> Result<FilterNode> {
        self.compile_node(raw, 1).inspect_err(|err| {
            tracing::debug!(reason = %err, "dimension_filter rejected");
        })
    }

    fn compile_node(&self, raw: &Value, depth: usize) -> Result<FilterNode> {
        if depth > self.max_depth {
            return Err(QueryError::FilterTooDeep {
                max_depth: self.max_depth,
            });
        }

        match RawFilter::decode(raw)? {
            RawFilter::AndGroup(children) => self.compile_children(children, depth).map(FilterNode::And),
            RawFilter::OrGroup(children) => self.compile_children(children, depth).map(FilterNode::Or),
            RawFilter::Not(child) => self
                .compile_node(child, depth + 1)
                .map(|node| FilterNode::Not(Box::new(node))),
            RawFilter::Leaf { field, matcher } => {
                if !self.catalog.is_dimension(field) {
                    return Err(QueryError::UnknownFilterField {
                        field: field.to_string(),
                    });
                }
                Ok(FilterNode::Leaf(FilterLeaf {
                    field: field.to_string(),
                    matcher,
                }))
            }
        }
    }

    fn compile_children(&self, children: &[Value], depth: usize) -> Result<Vec<FilterNode>> {
        children
            .iter()
            .map(|child| self.compile_node(child, depth + 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{MatchType, Matcher, StringMatch};
    use serde_json::json;

    fn nested_not(levels: usize) -> Value {
        let mut node = json!({"filter": {"fieldName": "country", "stringFilter": {"value": "US"}}});
        for _ in 0..levels {
            node = json!({ "notExpression": node });
        }
        node
    }

    #[test]
    fn test_compile_single_leaf() {
        let compiler = FilterCompiler::new(Catalog::builtin());
        let node = compiler
            .compile(&json!({"filter": {"fieldName": "country", "stringFilter": {"value": "US"}}}))
            .unwrap();
        assert_eq!(
            node,
            FilterNode::Leaf(FilterLeaf {
                field: "country".to_string(),
                matcher: Matcher::String(StringMatch {
                    value: "US".to_string(),
                    match_type: MatchType::Exact,
                    case_sensitive: false,
                }),
            })
        );
    }

    #[test]
    fn test_depth_limit_counts_nodes_on_path() {
        let compiler = FilterCompiler::new(Catalog::builtin()).with_max_depth(3);
        // leaf plus two wrappers = 3 nodes
        assert!(compiler.compile(&nested_not(2)).is_ok());
        assert_eq!(
            compiler.compile(&nested_not(3)).unwrap_err(),
            QueryError::FilterTooDeep { max_depth: 3 }
        );
    }

    #[test]
    fn test_default_depth_limit() {
        let compiler = FilterCompiler::new(Catalog::builtin());
        assert_eq!(compiler.max_depth(), MAX_FILTER_DEPTH);
        assert!(compiler.compile(&nested_not(MAX_FILTER_DEPTH - 1)).is_ok());
        assert!(compiler.compile(&nested_not(MAX_FILTER_DEPTH)).is_err());
    }

    #[test]
    fn test_unknown_dimension_fails() {
        let compiler = FilterCompiler::new(Catalog::builtin());
        let err = compiler
            .compile(&json!({"filter": {"fieldName": "totalUsers", "stringFilter": {"value": "1"}}}))
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownFilterField {
                field: "totalUsers".to_string()
            }
        );
    }
}
