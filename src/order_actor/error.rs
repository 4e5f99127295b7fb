use thiserror::Error;

use crate::domain::OrderStatus;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order id must be a positive integer, got {0:?}")]
    InvalidIdentifier(String),
    #[error("Request body failed validation ({} field error(s))", .0.len())]
    InvalidRequestBody(Vec<FieldViolation>),
    #[error("Order not found: {0}")]
    NotFound(u64),
    #[error("{0}")]
    UpdateFailed(String),
    #[error("{0}")]
    Rejected(String),
    #[error("Order status cannot change from {from} to {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Flattens validator output into one violation per failed rule, ordered by field.
    pub fn from_validation(errors: &validator::ValidationErrors) -> Vec<FieldViolation> {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed '{}' check", err.code));
                    FieldViolation::new(field.clone(), err.code.to_string(), message)
                })
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        violations
    }
}

impl From<validator::ValidationErrors> for OrderError {
    fn from(errors: validator::ValidationErrors) -> Self {
        OrderError::InvalidRequestBody(FieldViolation::from_validation(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::fixtures;
    use validator::Validate;

    #[test]
    fn validation_errors_flatten_in_field_order() {
        let mut details = fixtures::details();
        details.shipping_method = String::new();
        details.product_id = 0;

        let err: OrderError = details.validate().unwrap_err().into();
        let OrderError::InvalidRequestBody(violations) = err else {
            panic!("expected InvalidRequestBody");
        };
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["product_id", "shipping_method"]);
        assert_eq!(violations[0].message, "product_id must be greater than 0");
        assert_eq!(violations[1].code, "length");
    }

    #[test]
    fn update_failed_displays_raw_message() {
        let err = OrderError::UpdateFailed("Order 3 is DELIVERED and can no longer be edited".into());
        assert_eq!(err.to_string(), "Order 3 is DELIVERED and can no longer be edited");
    }
}
