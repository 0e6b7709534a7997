use producthub_core::{ManagerError, ParseEnumError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the command line
#[derive(Debug, Error)]
pub enum AppError {
    /// Wrap validation and lookup errors from the managers
    #[error(transparent)]
    Manager(#[from] ManagerError),

    #[error(transparent)]
    InvalidLabel(#[from] ParseEnumError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Detail lookups report the missing product the way the dashboard page does
    #[error("Product Not Found")]
    ProductNotFound(String),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::ProductNotFound(_) => true,
            AppError::Manager(error) => error.is_not_found(),
            _ => false,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_errors_keep_their_message() {
        let err = AppError::from(ManagerError::not_found("Delivery", "9"));
        assert_eq!(err.to_string(), "Delivery not found: 9");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_product_not_found_message() {
        let err = AppError::ProductNotFound("42".to_string());
        assert_eq!(err.to_string(), "Product Not Found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_label_errors() {
        let err = AppError::from(ParseEnumError::new("sentiment", "angry"));
        assert_eq!(err.to_string(), "Invalid sentiment: 'angry'");
        assert!(!err.is_not_found());
    }
}
