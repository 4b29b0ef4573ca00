use serde::{Deserialize, Serialize};

use crate::domain::Searchable;

/// A tenant record managed by platform administrators.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Searchable for Organization {
    fn name(&self) -> &str {
        &self.name
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
