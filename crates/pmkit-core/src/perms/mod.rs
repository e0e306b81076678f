//! Permission records as served by the backend, and grouping by model.

mod group;

pub use group::{group_perms_by_model, PermGroup};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Anything that belongs to a model (the `content_type.model` of a permission).
pub trait ModelScoped {
    fn model(&self) -> &str;
}

/// The model a permission applies to. Unknown backend fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentType {
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_label: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single permission record. `content_type` is required; any other field is passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    pub content_type: ContentType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Permission {
    /// `<model>.<codename>`, falling back to the display name when there is no codename.
    pub fn key(&self) -> String {
        let action = self
            .codename
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default();
        format!("{}.{}", self.content_type.model, action)
    }
}

impl ModelScoped for Permission {
    fn model(&self) -> &str {
        &self.content_type.model
    }
}

/// Parses a JSON array of permission records.
pub fn parse_permissions(json: &str) -> serde_json::Result<Vec<Permission>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_unknown_fields() {
        let perms = parse_permissions(
            r#"[{"id": 7, "name": "Can view document", "codename": "view_document",
                 "content_type": {"model": "document", "app_label": "core", "id": 3},
                 "selected": true}]"#,
        )
        .unwrap();
        assert_eq!(perms.len(), 1);
        let p = &perms[0];
        assert_eq!(p.model(), "document");
        assert_eq!(p.content_type.app_label.as_deref(), Some("core"));
        assert_eq!(p.content_type.extra.get("id"), Some(&Value::from(3)));
        assert_eq!(p.extra.get("selected"), Some(&Value::Bool(true)));
        assert_eq!(p.key(), "document.view_document");
    }

    #[test]
    fn missing_content_type_is_an_error() {
        let err = parse_permissions(r#"[{"codename": "view_document"}]"#).unwrap_err();
        assert!(err.to_string().contains("content_type"));
    }

    #[test]
    fn key_falls_back_to_name() {
        let perms =
            parse_permissions(r#"[{"name": "Can tag", "content_type": {"model": "tag"}}]"#)
                .unwrap();
        assert_eq!(perms[0].key(), "tag.Can tag");
    }
}
