use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the collection managers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error("Validation errors: {}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl ManagerError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ManagerError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Names of the fields that failed validation, in report order
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            ManagerError::Validation(errors) => errors.iter().map(|e| e.field.as_str()).collect(),
            ManagerError::NotFound { .. } => Vec::new(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ManagerError::NotFound { .. })
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ManagerResult<T> = Result<T, ManagerError>;

/// A label that does not name any variant of a closed enumeration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind}: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        ParseEnumError {
            kind,
            value: value.into(),
        }
    }
}
