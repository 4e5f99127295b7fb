//! Axum router and the thin HTTP wrappers around [`super::handlers`].
//!
//! `build_router` is the single entry point; `main.rs` attaches the tracing
//! layer after this call so tests can drive the bare router.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use tracing::info;

use super::auth::{self, require_roles, Role};
use super::dtos::{HealthResponse, ListOrdersQuery, OrderResponse, OrderUpdateRequest, StatusChangeRequest};
use super::error::ApiError;
use super::extract::{JsonBody, OrderId, QueryParams};
use super::handlers;
use super::state::AppState;
use crate::domain::OrderCreate;

/// Build the complete application router wired to the given shared state.
/// Each protected route carries its own role guard.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/orders",
            post(create_order).route_layer(from_fn_with_state(auth::CREATE_ORDER, require_roles)),
        )
        .route(
            "/api/orders",
            get(list_orders).route_layer(from_fn_with_state(auth::LIST_ORDERS, require_roles)),
        )
        .route(
            "/api/orders/:id",
            get(get_order).route_layer(from_fn_with_state(auth::VIEW_ORDER, require_roles)),
        )
        .route(
            "/api/orders/:id",
            put(update_order).route_layer(from_fn_with_state(auth::UPDATE_ORDER, require_roles)),
        )
        .route(
            "/api/orders/:id/status",
            put(change_order_status).route_layer(from_fn_with_state(auth::CHANGE_ORDER_STATUS, require_roles)),
        )
        .with_state(state)
}

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        ok: true,
        service: st.build.service.to_string(),
        version: st.build.version.to_string(),
    })
}

pub(crate) async fn create_order(
    State(st): State<Arc<AppState>>,
    JsonBody(request): JsonBody<OrderCreate>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let order = handlers::create_order(&st.orders, request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub(crate) async fn list_orders(
    State(st): State<Arc<AppState>>,
    QueryParams(query): QueryParams<ListOrdersQuery>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    Ok(Json(handlers::list_orders(&st.orders, query).await?))
}

pub(crate) async fn get_order(
    State(st): State<Arc<AppState>>,
    id: OrderId,
) -> Result<Json<OrderResponse>, ApiError> {
    Ok(Json(handlers::get_order(&st.orders, id).await?))
}

pub(crate) async fn update_order(
    State(st): State<Arc<AppState>>,
    Extension(role): Extension<Role>,
    id: OrderId,
    JsonBody(request): JsonBody<OrderUpdateRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    info!(%role, order_id = %id, "PUT /api/orders/:id");
    Ok(Json(handlers::update_order(&st.orders, id, request).await?))
}

pub(crate) async fn change_order_status(
    State(st): State<Arc<AppState>>,
    Extension(role): Extension<Role>,
    id: OrderId,
    JsonBody(request): JsonBody<StatusChangeRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    info!(%role, order_id = %id, to = %request.status, "PUT /api/orders/:id/status");
    Ok(Json(handlers::change_order_status(&st.orders, id, request).await?))
}
