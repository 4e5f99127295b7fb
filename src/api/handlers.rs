//! Order operations behind the HTTP routes. Each function takes already
//! extracted inputs and talks to the store only through [`OrderClient`].

use tracing::{error, info, instrument, warn};
use validator::Validate;

use super::dtos::{ListOrdersQuery, OrderResponse, OrderUpdateRequest, StatusChangeRequest};
use super::extract::OrderId;
use crate::clients::OrderClient;
use crate::domain::OrderCreate;
use crate::order_actor::OrderError;

/// Replaces an order's editable fields while keeping its stored status.
///
/// Validation happens before the store is contacted. After that, `NotFound`
/// and store unavailability keep their classification; any other failure is
/// reported as `UpdateFailed` with the underlying message.
#[instrument(skip(orders, request), fields(order_id = %id))]
pub async fn update_order(
    orders: &OrderClient,
    id: OrderId,
    request: OrderUpdateRequest,
) -> Result<OrderResponse, OrderError> {
    request.validate()?;

    let id = id.get();
    let persisted = async {
        let existing = orders.fetch_order(id).await?;
        orders.replace_order(id, request.into_patch(existing.status)).await
    }
    .await;

    match persisted {
        Ok(order) => {
            info!(status = %order.status, "Order updated");
            Ok(order.into())
        }
        Err(e @ OrderError::NotFound(_)) => Err(e),
        Err(e @ OrderError::ActorCommunicationError(_)) => {
            error!(error = %e, "Order store unreachable");
            Err(e)
        }
        Err(e) => {
            warn!(error = %e, "Order update failed");
            Err(OrderError::UpdateFailed(e.to_string()))
        }
    }
}

#[instrument(skip(orders, request), fields(user_id = request.user_id))]
pub async fn create_order(orders: &OrderClient, request: OrderCreate) -> Result<OrderResponse, OrderError> {
    request.validate()?;
    let order = orders.create_order(request).await?;
    Ok(order.into())
}

#[instrument(skip(orders), fields(order_id = %id))]
pub async fn get_order(orders: &OrderClient, id: OrderId) -> Result<OrderResponse, OrderError> {
    Ok(orders.fetch_order(id.get()).await?.into())
}

/// All orders sorted by id, optionally restricted to one user.
#[instrument(skip(orders))]
pub async fn list_orders(orders: &OrderClient, query: ListOrdersQuery) -> Result<Vec<OrderResponse>, OrderError> {
    let mut found = orders.list_orders().await?;
    if let Some(user_id) = query.user_id {
        found.retain(|order| order.details.user_id == user_id);
    }
    found.sort_by_key(|order| order.id);
    info!(count = found.len(), "Listed orders");
    Ok(found.into_iter().map(OrderResponse::from).collect())
}

#[instrument(skip(orders, request), fields(order_id = %id, to = %request.status))]
pub async fn change_order_status(
    orders: &OrderClient,
    id: OrderId,
    request: StatusChangeRequest,
) -> Result<OrderResponse, OrderError> {
    Ok(orders.change_status(id.get(), request.status).await?.into())
}
