//! Form definitions backing the admin dialogs.

use thiserror::Error;
use validator::ValidationErrors;

pub mod entity_type;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}
