//! Request and response bodies. No business logic lives here beyond the
//! conversions between wire shapes and domain types.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::{Order, OrderDetails, OrderPatch, OrderStatus};

/// Body of `PUT /api/orders/:id`.
///
/// A `status` key in any JSON form is tolerated and dropped during
/// deserialization: the stored status always wins.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderUpdateRequest {
    #[serde(flatten)]
    pub details: OrderDetails,
}

impl Validate for OrderUpdateRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.details.validate()
    }
}

impl OrderUpdateRequest {
    /// Discards the client's status in favour of `current`.
    pub fn into_patch(self, current: OrderStatus) -> OrderPatch {
        OrderPatch {
            details: self.details,
            status: current,
        }
    }
}

/// Body of `PUT /api/orders/:id/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusChangeRequest {
    pub status: OrderStatus,
}

/// Query of `GET /api/orders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersQuery {
    pub user_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: u64,
    #[serde(flatten)]
    pub details: OrderDetails,
    pub status: OrderStatus,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            details: order.details,
            status: order.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub version: String,
}
