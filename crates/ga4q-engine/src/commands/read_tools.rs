//! Result types for the catalog and property tools.
//!
//! Plain data containers built from the catalog or the property directory;
//! each renders the JSON payload its tool returns.

use ga4q_core::catalog::{Catalog, Category, FieldKind};
use serde_json::{json, Map, Value};

/// One category in a category listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: &'static str,
    pub fields: Vec<&'static str>,
}

impl CategorySummary {
    fn from_category(category: &Category) -> Self {
        Self {
            name: category.name(),
            fields: category.field_names().collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.fields.len()
    }
}

/// Every category of one namespace, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub kind: FieldKind,
    pub categories: Vec<CategorySummary>,
}

impl CategoryListing {
    pub fn from_catalog(catalog: &Catalog, kind: FieldKind) -> Self {
        Self {
            kind,
            categories: catalog
                .categories(kind)
                .iter()
                .map(CategorySummary::from_category)
                .collect(),
        }
    }

    /// `{category: {"count": n, "<kind plural>": [names]}}`
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        for summary in &self.categories {
            let mut entry = Map::new();
            entry.insert("count".to_string(), json!(summary.count()));
            entry.insert(self.kind.plural().to_string(), json!(summary.fields));
            out.insert(summary.name.to_string(), Value::Object(entry));
        }
        Value::Object(out)
    }
}

/// Field names and descriptions of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFields {
    pub kind: FieldKind,
    pub category: &'static str,
    pub fields: Vec<(&'static str, &'static str)>,
}

impl CategoryFields {
    pub fn from_category(kind: FieldKind, category: &Category) -> Self {
        Self {
            kind,
            category: category.name(),
            fields: category
                .fields()
                .iter()
                .map(|f| (f.name, f.description))
                .collect(),
        }
    }

    /// `{name: description}`
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, description)| (name.to_string(), json!(description)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ga4q_core::catalog::CategoryTable;

    const DIMS: &[CategoryTable] = &[
        ("time", &[("date", "The date"), ("hour", "The hour")]),
        ("geography", &[("country", "The country")]),
    ];

    #[test]
    fn test_listing_json() {
        let catalog = Catalog::from_tables(DIMS, &[]);
        let listing = CategoryListing::from_catalog(&catalog, FieldKind::Dimension);
        assert_eq!(
            listing.to_json(),
            json!({
                "time": {"count": 2, "dimensions": ["date", "hour"]},
                "geography": {"count": 1, "dimensions": ["country"]}
            })
        );
    }

    #[test]
    fn test_listing_keeps_declaration_order() {
        let catalog = Catalog::from_tables(DIMS, &[]);
        let listing = CategoryListing::from_catalog(&catalog, FieldKind::Dimension);
        let keys: Vec<String> = listing
            .to_json()
            .as_object()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["time", "geography"]);
    }

    #[test]
    fn test_category_fields_json() {
        let catalog = Catalog::from_tables(DIMS, &[]);
        let category = catalog.category(FieldKind::Dimension, "time").unwrap();
        let fields = CategoryFields::from_category(FieldKind::Dimension, category);
        assert_eq!(
            fields.to_json(),
            json!({"date": "The date", "hour": "The hour"})
        );
    }
}
