use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::OrderClient;
use crate::domain::Order;

use super::ServiceConfig;

/// The main application system that owns the store actor.
///
/// Responsible for starting the actor, handing out clients, and shutting down.
pub struct OrderSystem {
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new(config: &ServiceConfig) -> Self {
        let order_id_counter = Arc::new(AtomicU64::new(1));
        let next_order_id = move || order_id_counter.fetch_add(1, Ordering::SeqCst);

        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.store_buffer, next_order_id);
        let order_client = OrderClient::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.run());

        info!(store_buffer = config.store_buffer, "Order store started");

        Self {
            order_client,
            handles: vec![order_handle],
        }
    }

    /// Waits for the actors to drain. Every other clone of the client (for
    /// example the one held by the router) must already be dropped.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::fixtures;
    use crate::domain::OrderStatus;

    #[tokio::test]
    async fn assigns_sequential_ids_and_shuts_down() {
        let system = OrderSystem::new(&ServiceConfig::default());

        let first = system.order_client.create_order(fixtures::details()).await.unwrap();
        let second = system.order_client.create_order(fixtures::details()).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(first.status, OrderStatus::Pending);

        system.shutdown().await.unwrap();
    }
}
