//! Dimension and metric catalog
//!
//! A fixed, read-only mapping of category → {field name → description},
//! kept separately for dimensions and metrics. The built-in catalog is
//! initialised once per process and shared by every request; the filter
//! compiler consults it for dimension membership.

mod data;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::errors::{QueryError, Result};

/// Raw table shape: (category, [(field name, description)])
pub type CategoryTable = (&'static str, &'static [(&'static str, &'static str)]);

/// Which namespace a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Dimension,
    Metric,
}

impl FieldKind {
    /// Lowercase plural, as used in argument and payload keys.
    pub fn plural(&self) -> &'static str {
        match self {
            FieldKind::Dimension => "dimensions",
            FieldKind::Metric => "metrics",
        }
    }

    /// Capitalised plural, as used at the start of messages.
    pub fn title(&self) -> &'static str {
        match self {
            FieldKind::Dimension => "Dimensions",
            FieldKind::Metric => "Metrics",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Dimension => f.write_str("dimension"),
            FieldKind::Metric => f.write_str("metric"),
        }
    }
}

/// One catalog field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCatalogEntry {
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A named group of fields, in declaration order
#[derive(Debug, Clone)]
pub struct Category {
    name: &'static str,
    fields: Vec<FieldCatalogEntry>,
}

impl Category {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldCatalogEntry] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

/// Categories of one namespace plus a name index
#[derive(Debug, Clone, Default)]
struct FieldTable {
    categories: Vec<Category>,
    /// field name → (category index, field index); first declaration wins
    index: HashMap<&'static str, (usize, usize)>,
}

impl FieldTable {
    fn from_tables(tables: &[CategoryTable]) -> Self {
        let mut table = FieldTable::default();
        for (cat_idx, &(category, fields)) in tables.iter().enumerate() {
            let entries: Vec<FieldCatalogEntry> = fields
                .iter()
                .map(|&(name, description)| FieldCatalogEntry {
                    category,
                    name,
                    description,
                })
                .collect();
            for (field_idx, entry) in entries.iter().enumerate() {
                table
                    .index
                    .entry(entry.name)
                    .or_insert((cat_idx, field_idx));
            }
            table.categories.push(Category {
                name: category,
                fields: entries,
            });
        }
        table
    }

    fn entry(&self, name: &str) -> Option<&FieldCatalogEntry> {
        self.index
            .get(name)
            .map(|&(c, f)| &self.categories[c].fields[f])
    }
}

/// Immutable dimension and metric catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    dimensions: FieldTable,
    metrics: FieldTable,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The built-in GA4 catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| Catalog::from_tables(data::DIMENSIONS, data::METRICS))
    }

    /// Build a catalog from explicit tables.
    pub fn from_tables(dimensions: &[CategoryTable], metrics: &[CategoryTable]) -> Self {
        Self {
            dimensions: FieldTable::from_tables(dimensions),
            metrics: FieldTable::from_tables(metrics),
        }
    }

    fn table(&self, kind: FieldKind) -> &FieldTable {
        match kind {
            FieldKind::Dimension => &self.dimensions,
            FieldKind::Metric => &self.metrics,
        }
    }

    pub fn categories(&self, kind: FieldKind) -> &[Category] {
        &self.table(kind).categories
    }

    pub fn category_names(&self, kind: FieldKind) -> Vec<String> {
        self.categories(kind)
            .iter()
            .map(|c| c.name.to_string())
            .collect()
    }

    /// Look up a category by exact name.
    pub fn category(&self, kind: FieldKind, name: &str) -> Option<&Category> {
        self.categories(kind).iter().find(|c| c.name == name)
    }

    /// Like [`Catalog::category`], failing with the available names.
    pub fn require_category(&self, kind: FieldKind, name: &str) -> Result<&Category> {
        self.category(kind, name)
            .ok_or_else(|| QueryError::UnknownCategory {
                kind,
                category: name.to_string(),
                available: self.category_names(kind),
            })
    }

    pub fn contains(&self, kind: FieldKind, name: &str) -> bool {
        self.table(kind).index.contains_key(name)
    }

    pub fn is_dimension(&self, name: &str) -> bool {
        self.contains(FieldKind::Dimension, name)
    }

    pub fn entry(&self, kind: FieldKind, name: &str) -> Option<&FieldCatalogEntry> {
        self.table(kind).entry(name)
    }

    /// Every field name of a namespace, in declaration order.
    pub fn field_names(&self, kind: FieldKind) -> Vec<&'static str> {
        self.categories(kind)
            .iter()
            .flat_map(|c| c.field_names())
            .collect()
    }

    /// Number of distinct field names in a namespace.
    pub fn len(&self, kind: FieldKind) -> usize {
        self.table(kind).index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMS: &[CategoryTable] = &[
        ("time", &[("date", "Date"), ("hour", "Hour")]),
        ("geography", &[("country", "Country"), ("date", "Duplicate")]),
    ];
    const METS: &[CategoryTable] = &[("user_metrics", &[("totalUsers", "Users")])];

    #[test]
    fn test_category_order_is_preserved() {
        let catalog = Catalog::from_tables(DIMS, METS);
        assert_eq!(
            catalog.category_names(FieldKind::Dimension),
            vec!["time", "geography"]
        );
        assert_eq!(
            catalog.field_names(FieldKind::Dimension),
            vec!["date", "hour", "country", "date"]
        );
    }

    #[test]
    fn test_first_declaration_wins_for_duplicates() {
        let catalog = Catalog::from_tables(DIMS, METS);
        let entry = catalog.entry(FieldKind::Dimension, "date").unwrap();
        assert_eq!(entry.category, "time");
        assert_eq!(entry.description, "Date");
        assert_eq!(catalog.len(FieldKind::Dimension), 3);
    }

    #[test]
    fn test_namespaces_are_separate() {
        let catalog = Catalog::from_tables(DIMS, METS);
        assert!(catalog.is_dimension("country"));
        assert!(!catalog.is_dimension("totalUsers"));
        assert!(catalog.contains(FieldKind::Metric, "totalUsers"));
    }

    #[test]
    fn test_require_category_lists_available() {
        let catalog = Catalog::from_tables(DIMS, METS);
        let err = catalog
            .require_category(FieldKind::Metric, "nope")
            .unwrap_err();
        match err {
            QueryError::UnknownCategory { available, .. } => {
                assert_eq!(available, vec!["user_metrics"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories(FieldKind::Dimension).len(), 18);
        assert_eq!(catalog.categories(FieldKind::Metric).len(), 11);
        assert!(catalog.is_dimension("date"));
        assert!(catalog.is_dimension("country"));
        assert!(catalog.contains(FieldKind::Metric, "totalUsers"));
        assert_eq!(
            catalog.categories(FieldKind::Dimension)[0].field_names().next(),
            Some("date")
        );
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }
}
