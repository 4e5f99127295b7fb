//! The one place where failures become HTTP responses.
//!
//! Every error kind maps to a fixed status code and a stable `error` code in
//! the JSON body; handlers return `Result<_, ApiError>` and never build error
//! responses themselves.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::api::auth::Role;
use crate::order_actor::{FieldViolation, OrderError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Missing or unrecognised caller role")]
    Unauthenticated,
    #[error("Role {role} may not perform this operation")]
    Forbidden { role: Role },
    #[error("Invalid path: {0}")]
    Path(#[from] PathRejection),
    #[error("Invalid query: {0}")]
    Query(#[from] QueryRejection),
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl ApiError {
    /// Status code and stable error code for each kind.
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Order(e) => match e {
                OrderError::InvalidIdentifier(_) => (StatusCode::BAD_REQUEST, "invalid_identifier"),
                OrderError::InvalidRequestBody(_) => (StatusCode::BAD_REQUEST, "invalid_request_body"),
                OrderError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
                OrderError::UpdateFailed(_) => (StatusCode::BAD_REQUEST, "update_failed"),
                OrderError::Rejected(_) => (StatusCode::BAD_REQUEST, "rejected"),
                OrderError::InvalidStatusTransition { .. } => (StatusCode::CONFLICT, "invalid_status_transition"),
                OrderError::ActorCommunicationError(_) => (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable"),
            },
            ApiError::Unauthenticated => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            ApiError::Forbidden { .. } => (StatusCode::FORBIDDEN, "forbidden"),
            ApiError::Path(_) => (StatusCode::BAD_REQUEST, "invalid_path"),
            ApiError::Query(_) => (StatusCode::BAD_REQUEST, "invalid_query"),
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        let (_, code) = self.classify();
        let message = match self {
            ApiError::Path(rejection) => rejection.body_text(),
            ApiError::Query(rejection) => rejection.body_text(),
            other => other.to_string(),
        };
        let details = match self {
            ApiError::Order(OrderError::InvalidRequestBody(violations)) => {
                Some(violations.clone())
            }
            _ => None,
        };
        ErrorResponse {
            error: code.to_string(),
            message,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();
        if status.is_server_error() {
            error!(error = %self, code, "Request failed");
        } else {
            warn!(error = %self, code, "Request rejected");
        }
        (status, Json(self.to_error_response())).into_response()
    }
}
