use serde::{Deserialize, Serialize};

/// A user-defined schema/category that entities are instances of,
/// e.g. "designation".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EntityType {
    pub id: i64,
    pub value: String,
    pub label: String,
    pub data_type: String,
    #[serde(default)]
    pub allow_filtering: bool,
    #[serde(default)]
    pub has_entities: bool,
    #[serde(default)]
    pub allow_custom_entities: bool,
    /// Models this type is attached to, e.g. "Session" or "MentorExtension".
    #[serde(default)]
    pub model_names: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub regex: Option<String>,
}
