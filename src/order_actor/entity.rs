use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderPatch, OrderStatus};

use super::actions::{OrderAction, OrderActionResult};

impl Entity for Order {
    type Id = u64;
    type CreateParams = OrderCreate;
    type Patch = OrderPatch;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is initialized with status `PENDING`.
    fn from_create_params(id: u64, params: OrderCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            details: params,
            status: OrderStatus::Pending,
        })
    }

    /// Replaces the editable details. Status is never written here.
    ///
    /// # Errors
    /// - Orders in a terminal status (`DELIVERED`, `CANCELLED`) are frozen.
    /// - The patch must carry the status currently stored; a mismatch means
    ///   the status moved after the caller read the order.
    fn on_update(&mut self, patch: OrderPatch) -> Result<(), String> {
        if self.status.is_terminal() {
            return Err(format!(
                "Order {} is {} and can no longer be edited",
                self.id, self.status
            ));
        }
        if patch.status != self.status {
            return Err(format!(
                "Order {} moved from {} to {} during the edit; reload and retry",
                self.id, patch.status, self.status
            ));
        }
        self.details = patch.details;
        Ok(())
    }

    /// Handles order-specific actions.
    ///
    /// # Actions
    /// - `ChangeStatus(next)`: applies the transition when the table allows it,
    ///   otherwise reports it as not applied and leaves the order unchanged.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::ChangeStatus(next) => {
                let from = self.status;
                let applied = from.can_transition_to(next);
                if applied {
                    self.status = next;
                }
                Ok(OrderActionResult::ChangeStatus { from, applied })
            }
        }
    }
}
