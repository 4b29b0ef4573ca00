//! Request records for the entity-type and entity endpoints.

use std::collections::HashMap;

use serde::Serialize;

/// Body of `POST /entity-type/create`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CreateEntityTypeRequest {
    pub value: String,
    pub label: String,
    pub data_type: String,
    pub allow_filtering: bool,
    pub has_entities: bool,
    pub allow_custom_entities: bool,
    pub model_names: Vec<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl CreateEntityTypeRequest {
    /// Creates a request with the defaults the admin dialog does not expose.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            data_type: "STRING".to_string(),
            allow_filtering: false,
            has_entities: true,
            allow_custom_entities: false,
            model_names: Vec::new(),
            required: false,
            regex: None,
        }
    }

    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = data_type.into();
        self
    }

    pub fn allow_filtering(mut self, allow: bool) -> Self {
        self.allow_filtering = allow;
        self
    }

    pub fn allow_custom_entities(mut self, allow: bool) -> Self {
        self.allow_custom_entities = allow;
        self
    }

    pub fn model_names(mut self, models: Vec<String>) -> Self {
        self.model_names = models;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn regex(mut self, regex: impl Into<String>) -> Self {
        self.regex = Some(regex.into());
        self
    }
}

/// Body of `POST /entity/create`. Core fields are typed; anything else the
/// caller wants to send rides along in `extra`.
#[derive(Clone, Debug, Serialize, Default)]
pub struct CreateEntityRequest {
    pub entity_type_id: i64,
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl CreateEntityRequest {
    #[must_use]
    pub fn new(entity_type_id: i64, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            entity_type_id,
            value: value.into(),
            label: label.into(),
            status: None,
            extra: HashMap::new(),
        }
    }
}

/// Body of `POST /org-admin/inheritEntityType`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct InheritEntityTypeRequest {
    pub entity_type_value: String,
    pub target_organization_id: i64,
}

/// Body of `POST /entity/list`; pagination rides in the query string.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EntitySearchBody {
    pub search: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_entity_type_request_skips_absent_regex() {
        let request = CreateEntityTypeRequest::new("designation", "Designation");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["value"], "designation");
        assert_eq!(json["data_type"], "STRING");
        assert!(json.get("regex").is_none());

        let with_regex = request.regex("^[a-z]+$");
        let json = serde_json::to_value(&with_regex).unwrap();
        assert_eq!(json["regex"], "^[a-z]+$");
    }

    #[test]
    fn test_create_entity_request_flattens_extras() {
        let mut request = CreateEntityRequest::new(4, "cto", "CTO");
        request
            .extra
            .insert("type".to_string(), serde_json::json!("SYSTEM"));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["entity_type_id"], 4);
        assert_eq!(json["type"], "SYSTEM");
        assert!(json.get("status").is_none());
    }
}
