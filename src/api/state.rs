//! Shared state handed to every handler as `State<Arc<AppState>>`.

use crate::clients::OrderClient;

/// Static build metadata included in health responses.
#[derive(Clone, Debug)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
    pub build: BuildInfo,
}

impl AppState {
    pub fn new(orders: OrderClient) -> Self {
        Self {
            orders,
            build: BuildInfo {
                service: "order-desk",
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}
