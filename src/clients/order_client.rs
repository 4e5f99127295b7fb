use tracing::{debug, info, instrument, warn};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Order, OrderCreate, OrderPatch, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

crate::impl_basic_client!(OrderClient, Order, OrderError, order);

impl OrderClient {
    #[instrument(skip(self, params), fields(user_id = params.user_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(|e| store_error(None, e))?;
        info!(order_id = id, "Order created");
        self.fetch_order(id).await
    }

    /// Like `get_order`, but a missing order is an error.
    #[instrument(skip(self))]
    pub async fn fetch_order(&self, id: u64) -> Result<Order, OrderError> {
        self.get_order(id).await?.ok_or(OrderError::NotFound(id))
    }

    /// Persists a full replacement of the order, status included.
    #[instrument(skip(self, patch), fields(status = %patch.status))]
    pub async fn replace_order(&self, id: u64, patch: OrderPatch) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(|e| store_error(Some(id), e))
    }

    #[instrument(skip(self))]
    pub async fn change_status(&self, id: u64, next: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        let (result, order) = self
            .inner
            .perform_action(id, OrderAction::ChangeStatus(next))
            .await
            .map_err(|e| store_error(Some(id), e))?;

        match result {
            OrderActionResult::ChangeStatus { applied: true, from } => {
                info!(%from, to = %next, "Order status changed");
                Ok(order)
            }
            OrderActionResult::ChangeStatus { applied: false, from } => {
                warn!(%from, to = %next, "Status transition refused");
                Err(OrderError::InvalidStatusTransition { from, to: next })
            }
        }
    }
}

fn store_error(id: Option<u64>, e: FrameworkError) -> OrderError {
    match (e, id) {
        (FrameworkError::NotFound(_), Some(id)) => OrderError::NotFound(id),
        (FrameworkError::Rejected(reason), _) => OrderError::Rejected(reason),
        (e, _) => OrderError::ActorCommunicationError(e.to_string()),
    }
}
