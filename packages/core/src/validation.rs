use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{DeliveryFormInput, ProductInput};

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Only a truly empty value is missing; whitespace counts as input
fn require(errors: &mut Vec<ValidationError>, value: &str, field: &str, message: &str) {
    if value.is_empty() {
        errors.push(ValidationError::new(field, message));
    }
}

/// Validates the four required fields of a new product
pub fn validate_product_input(data: &ProductInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    require(&mut errors, &data.name, "name", "Product name is required");
    require(
        &mut errors,
        &data.description,
        "description",
        "Description is required",
    );
    require(
        &mut errors,
        &data.pm_name,
        "pmName",
        "Product manager is required",
    );
    require(
        &mut errors,
        &data.launch_date,
        "launchDate",
        "Launch date is required",
    );

    errors
}

/// Validates a delivery form before it is added to the schedule.
///
/// `features` is checked as raw text, so `" , ,"` passes and produces a
/// delivery with no feature names.
pub fn validate_delivery_form(form: &DeliveryFormInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    require(
        &mut errors,
        &form.product_name,
        "productName",
        "Product name is required",
    );
    require(&mut errors, &form.version, "version", "Version is required");
    require(
        &mut errors,
        &form.features,
        "features",
        "At least one feature is required",
    );
    require(
        &mut errors,
        &form.estimated_date,
        "estimatedDate",
        "Estimated date is required",
    );

    errors
}

/// Feedback text must contain something other than whitespace
pub fn validate_feedback_text(text: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    require(&mut errors, text.trim(), "feedback", "Feedback cannot be empty");
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeliveryPriority, DeliveryStatus, ProductStatus};

    fn valid_product() -> ProductInput {
        ProductInput {
            name: "Fraud Detection Engine".to_string(),
            description: "Real-time transaction scoring".to_string(),
            pm_name: "Priya Patel".to_string(),
            launch_date: "2024-09-01".to_string(),
            status: ProductStatus::Planned,
            delivery_schedule: None,
        }
    }

    fn valid_form() -> DeliveryFormInput {
        DeliveryFormInput {
            product_id: "2".to_string(),
            product_name: "Mobile Banking App".to_string(),
            version: "v1.6.0".to_string(),
            features: "Card controls, Spending insights".to_string(),
            estimated_date: "2024-08-01".to_string(),
            status: DeliveryStatus::Planned,
            priority: DeliveryPriority::Medium,
            description: String::new(),
        }
    }

    #[test]
    fn test_validate_product_input_valid() {
        assert!(validate_product_input(&valid_product()).is_empty());
    }

    #[test]
    fn test_validate_product_input_lists_every_missing_field() {
        let data = ProductInput {
            name: String::new(),
            launch_date: String::new(),
            ..valid_product()
        };

        let fields: Vec<String> = validate_product_input(&data)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["name", "launchDate"]);
    }

    #[test]
    fn test_validate_product_input_all_empty() {
        let errors = validate_product_input(&ProductInput::default());
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_validate_delivery_form_valid() {
        assert!(validate_delivery_form(&valid_form()).is_empty());
    }

    #[test]
    fn test_validate_product_input_accepts_whitespace_values() {
        let data = ProductInput {
            name: "   ".to_string(),
            pm_name: " ".to_string(),
            ..valid_product()
        };
        assert!(validate_product_input(&data).is_empty());
    }

    #[test]
    fn test_validate_delivery_form_rejects_empty_features() {
        let form = DeliveryFormInput {
            features: String::new(),
            ..valid_form()
        };

        let errors = validate_delivery_form(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "features");
    }

    #[test]
    fn test_validate_delivery_form_accepts_separator_only_features() {
        let form = DeliveryFormInput {
            product_name: "   ".to_string(),
            features: " , ".to_string(),
            ..valid_form()
        };
        assert!(validate_delivery_form(&form).is_empty());
    }

    #[test]
    fn test_validate_delivery_form_ignores_optional_fields() {
        let form = DeliveryFormInput {
            product_id: String::new(),
            description: String::new(),
            ..valid_form()
        };
        assert!(validate_delivery_form(&form).is_empty());
    }

    #[test]
    fn test_validate_feedback_text() {
        assert!(validate_feedback_text("Great app").is_empty());
        assert_eq!(validate_feedback_text("").len(), 1);
        assert_eq!(validate_feedback_text(" \n\t ").len(), 1);
    }
}
