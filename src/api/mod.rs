//! HTTP surface: request/response types, extractors, the role guard, the
//! centralized error translation, and the handlers behind each route.

pub mod auth;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;
