use crate::domain::OrderStatus;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to a new status if the transition table allows it.
    ChangeStatus(OrderStatus),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// `applied` is false when the transition was refused; the order is then unchanged.
    ChangeStatus { from: OrderStatus, applied: bool },
}
