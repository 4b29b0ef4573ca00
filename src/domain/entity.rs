use serde::{Deserialize, Serialize};

use crate::domain::Searchable;

/// A concrete value belonging to an entity type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub id: i64,
    pub entity_type_id: i64,
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Searchable for Entity {
    fn name(&self) -> &str {
        &self.label
    }

    fn code(&self) -> &str {
        &self.value
    }
}
