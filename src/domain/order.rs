use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Lifecycle state of an order. Only the status workflow moves an order
/// between states; a plain update never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Terminal orders accept neither edits nor further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Paid)
                | (Pending, Cancelled)
                | (Paid, Processing)
                | (Paid, Cancelled)
                | (Processing, Shipped)
                | (Processing, Cancelled)
                | (Shipped, Delivered)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The client-editable part of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderDetails {
    #[validate(range(min = 1, message = "user_id must be greater than 0"))]
    pub user_id: u64,
    #[validate(range(min = 1, message = "product_id must be greater than 0"))]
    pub product_id: u64,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
    #[validate(range(min = 0.0, message = "total_money must not be negative"))]
    pub total_money: f64,
    #[validate(length(max = 100), custom(function = "validate_not_blank"))]
    pub first_name: String,
    #[validate(length(max = 100), custom(function = "validate_not_blank"))]
    pub last_name: String,
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
    #[validate(length(max = 200), custom(function = "validate_not_blank"))]
    pub address: String,
    #[validate(length(min = 1, max = 50, message = "shipping_method is required"))]
    pub shipping_method: String,
    #[validate(length(max = 200), custom(function = "validate_not_blank"))]
    pub shipping_address: String,
    #[validate(length(min = 1, max = 50, message = "payment_method is required"))]
    pub payment_method: String,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub shipping_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub tracking_number: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

/// Represents a stored customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub details: OrderDetails,
    pub status: OrderStatus,
}

/// Payload for creating a new order.
pub type OrderCreate = OrderDetails;

/// Full replacement of an order's fields, status included. Callers that must
/// not move the status copy the stored one into `status`.
#[derive(Debug, Clone)]
pub struct OrderPatch {
    pub details: OrderDetails,
    pub status: OrderStatus,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// 9 to 15 digits with an optional leading `+`.
fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    let well_formed = (9..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        let mut err = ValidationError::new("phone_number");
        err.message = Some(Cow::from("must be 9 to 15 digits with an optional leading +"));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn details() -> OrderDetails {
        OrderDetails {
            user_id: 7,
            product_id: 11,
            quantity: 1,
            total_money: 250.0,
            first_name: "Mai".to_string(),
            last_name: "Tran".to_string(),
            phone_number: "+84901234567".to_string(),
            address: "12 Nguyen Hue, District 1".to_string(),
            shipping_method: "EXPRESS".to_string(),
            shipping_address: "12 Nguyen Hue, District 1".to_string(),
            payment_method: "VNPAY".to_string(),
            order_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            shipping_date: None,
            tracking_number: None,
            note: None,
        }
    }

    pub fn order(id: u64, status: OrderStatus) -> Order {
        Order { id, details: details(), status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");
        let parsed: OrderStatus = serde_json::from_str("\"PAID\"").unwrap();
        assert_eq!(parsed, OrderStatus::Paid);
    }

    #[test]
    fn transition_table() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Paid));
        assert!(Paid.can_transition_to(Processing));
        assert!(Processing.can_transition_to(Shipped));
        assert!(Shipped.can_transition_to(Delivered));
        assert!(Processing.can_transition_to(Cancelled));

        assert!(!Shipped.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Delivered));
        for next in [Pending, Paid, Processing, Shipped, Delivered, Cancelled] {
            assert!(!Delivered.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn valid_details_pass() {
        assert!(fixtures::details().validate().is_ok());
    }

    #[test]
    fn invalid_fields_are_all_reported() {
        let mut details = fixtures::details();
        details.quantity = 0;
        details.first_name = "   ".to_string();
        details.phone_number = "12-34".to_string();
        details.note = Some("x".repeat(501));

        let errors = details.validate().unwrap_err();
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        assert_eq!(fields, vec!["first_name", "note", "phone_number", "quantity"]);
    }

    #[test]
    fn phone_number_rules() {
        assert!(validate_phone_number("0901234567").is_ok());
        assert!(validate_phone_number("+84901234567").is_ok());
        assert!(validate_phone_number("12345678").is_err());
        assert!(validate_phone_number("+8490123456789012").is_err());
        assert!(validate_phone_number("09012a4567").is_err());
    }
}
