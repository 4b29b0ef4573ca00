//! Controlled form behind the create-entity-type dialog.

use serde::Deserialize;
use validator::Validate;

use crate::dto::entity::CreateEntityTypeRequest;
use crate::forms::FormError;

/// The three fields the dialog exposes. The remaining creation flags use
/// backend defaults; callers adjust them on the produced request when an
/// advanced dialog needs to.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EntityTypeForm {
    #[validate(length(min = 1, message = "value is required"))]
    pub value: String,
    #[validate(length(min = 1, message = "label is required"))]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

impl EntityTypeForm {
    /// Validates the fields and produces the creation request, then resets
    /// the form back to empty strings.
    pub fn submit(&mut self) -> Result<CreateEntityTypeRequest, FormError> {
        self.value = self.value.trim().to_string();
        self.label = self.label.trim().to_string();
        self.validate()?;

        let request = CreateEntityTypeRequest::from(&*self);
        self.reset();
        Ok(request)
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.label.clear();
        self.description.clear();
    }
}

impl From<&EntityTypeForm> for CreateEntityTypeRequest {
    fn from(form: &EntityTypeForm) -> Self {
        CreateEntityTypeRequest::new(form.value.as_str(), form.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_trims_builds_request_and_resets() {
        let mut form = EntityTypeForm {
            value: "  designation ".to_string(),
            label: "Designation".to_string(),
            description: "Job titles".to_string(),
        };

        let request = form.submit().unwrap();
        assert_eq!(request.value, "designation");
        assert_eq!(request.label, "Designation");

        assert_eq!(form.value, "");
        assert_eq!(form.label, "");
        assert_eq!(form.description, "");
    }

    #[test]
    fn test_submit_rejects_blank_value() {
        let mut form = EntityTypeForm {
            value: "   ".to_string(),
            label: "Designation".to_string(),
            description: String::new(),
        };

        assert!(matches!(form.submit(), Err(FormError::Validation(_))));
        // A failed submit keeps the entered label for correction.
        assert_eq!(form.label, "Designation");
    }
}
