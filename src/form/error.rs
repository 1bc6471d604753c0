use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::field::FieldId;

/// A validation failure reported by a field's validator.
///
/// `code` is meant for matching, `description` for display.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormError {
    pub code: String,
    pub description: String,
}

impl FormError {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

/// Structural misuse of the update API
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateError {
    #[error("Unknown field: {0} is not registered in this form")]
    UnknownField(FieldId),

    #[error("Form is primitive: {0} is a field and has no registry to update")]
    FormIsPrimitive(FieldId),
}

impl UpdateError {
    /// Stable code for matching
    pub fn code(&self) -> &'static str {
        match self {
            UpdateError::UnknownField(_) => "unknownField",
            UpdateError::FormIsPrimitive(_) => "formIsPrimitive",
        }
    }
}
