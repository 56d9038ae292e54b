//! Property directory interface
//!
//! Which properties exist and are readable is owned by an external
//! collaborator (the admin API and its cache). The core only reads it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{QueryError, Result};

const RESOURCE_PREFIX: &str = "properties/";

/// Summary of one analytics property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
}

impl PropertyInfo {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            create_time: None,
            update_time: None,
            parent: None,
            account_name: None,
        }
    }
}

/// Read access to the known properties.
pub trait PropertyDirectory: Send + Sync {
    /// Whether the id names a known, accessible property.
    fn validate(&self, property_id: &str) -> bool;

    /// Every accessible property.
    ///
    /// # Errors
    ///
    /// `DirectoryUnavailable` when the listing cannot be produced.
    fn list(&self) -> Result<Vec<PropertyInfo>>;

    /// One property's details.
    ///
    /// # Errors
    ///
    /// `UnknownProperty` for an id the directory does not know.
    fn get(&self, property_id: &str) -> Result<PropertyInfo>;

    /// Known ids, or empty if the listing fails.
    fn known_ids(&self) -> Vec<String> {
        self.list()
            .map(|props| props.into_iter().map(|p| p.id).collect())
            .unwrap_or_default()
    }
}

/// In-memory directory over a fixed property list
#[derive(Debug, Clone, Default)]
pub struct StaticPropertyDirectory {
    properties: Vec<PropertyInfo>,
}

impl StaticPropertyDirectory {
    pub fn new(properties: Vec<PropertyInfo>) -> Self {
        Self { properties }
    }

    /// Load from a JSON array of property objects.
    ///
    /// # Errors
    ///
    /// `Serialization` if the text is not such an array.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    fn find(&self, property_id: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.id == property_id)
    }
}

impl PropertyDirectory for StaticPropertyDirectory {
    fn validate(&self, property_id: &str) -> bool {
        self.find(property_id).is_some()
    }

    fn list(&self) -> Result<Vec<PropertyInfo>> {
        Ok(self.properties.clone())
    }

    fn get(&self, property_id: &str) -> Result<PropertyInfo> {
        self.find(property_id)
            .cloned()
            .ok_or_else(|| QueryError::UnknownProperty {
                property_id: property_id.to_string(),
                known: self.known_ids(),
            })
    }
}

/// Canonical property id from a raw argument.
///
/// Strings are trimmed and lose a `properties/` prefix; integers are
/// rendered in decimal.
///
/// # Errors
///
/// `MissingProperty` for null or blank input, `InvalidArgument` for any
/// other JSON type.
pub fn normalize_property_id(raw: &Value) -> Result<String> {
    let id = match raw {
        Value::Null => String::new(),
        Value::String(s) => {
            let s = s.trim();
            s.strip_prefix(RESOURCE_PREFIX).unwrap_or(s).trim().to_string()
        }
        Value::Number(n) => n.to_string(),
        other => {
            return Err(QueryError::InvalidArgument {
                name: "property_id".to_string(),
                reason: format!("expected a string or number, got {other}"),
            })
        }
    };
    if id.is_empty() {
        return Err(QueryError::MissingProperty);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn directory() -> StaticPropertyDirectory {
        StaticPropertyDirectory::new(vec![
            PropertyInfo::new("123456", "Main site"),
            PropertyInfo::new("654321", "Staging"),
        ])
    }

    #[test]
    fn test_validate_and_get() {
        let dir = directory();
        assert!(dir.validate("123456"));
        assert!(!dir.validate("999"));
        assert_eq!(dir.get("654321").unwrap().display_name, "Staging");
    }

    #[test]
    fn test_get_unknown_lists_known_ids() {
        let err = directory().get("999").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownProperty {
                property_id: "999".to_string(),
                known: vec!["123456".to_string(), "654321".to_string()],
            }
        );
    }

    #[test]
    fn test_from_json() {
        let dir = StaticPropertyDirectory::from_json(
            r#"[{"id": "1", "display_name": "One", "parent": "accounts/9"}]"#,
        )
        .unwrap();
        let info = dir.get("1").unwrap();
        assert_eq!(info.parent.as_deref(), Some("accounts/9"));
        assert_eq!(info.create_time, None);
        assert!(StaticPropertyDirectory::from_json("{}").is_err());
    }

    #[test]
    fn test_normalize_property_id() {
        assert_eq!(normalize_property_id(&json!(" 123456 ")).unwrap(), "123456");
        assert_eq!(
            normalize_property_id(&json!("properties/123456")).unwrap(),
            "123456"
        );
        assert_eq!(normalize_property_id(&json!(123456)).unwrap(), "123456");
    }

    #[test]
    fn test_normalize_property_id_errors() {
        for raw in [json!(null), json!(""), json!("   "), json!("properties/")] {
            assert_eq!(
                normalize_property_id(&raw).unwrap_err(),
                QueryError::MissingProperty
            );
        }
        assert!(matches!(
            normalize_property_id(&json!(["1"])),
            Err(QueryError::InvalidArgument { .. })
        ));
    }
}
