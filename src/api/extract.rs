//! Extractors that turn raw request parts into validated inputs, failing with
//! the same error kinds the handlers use.

use std::fmt;
use std::str::FromStr;

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::order_actor::{FieldViolation, OrderError};

/// A path identifier known to be a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderId(u64);

impl OrderId {
    pub fn get(self) -> u64 {
        self.0
    }
}

// Anything that is not a positive integer (negative, zero, non-numeric, or
// too large for an id) is the same error.
impl FromStr for OrderId {
    type Err = OrderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.parse::<u64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(OrderError::InvalidIdentifier(raw.to_string())),
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Runs before any body extractor, so a bad id wins over a bad body.
#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for OrderId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(raw.parse::<OrderId>()?)
    }
}

/// `Query<T>` whose rejections go through [`ApiError`].
pub struct QueryParams<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// `Json<T>` whose rejections are reported as `InvalidRequestBody`.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let violation = FieldViolation::new("body", "json", rejection.body_text());
                Err(OrderError::InvalidRequestBody(vec![violation]).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_that_are_not_positive_integers_are_invalid_identifiers() {
        assert_eq!("42".parse::<OrderId>().unwrap().get(), 42);
        for raw in ["0", "-1", "-9223372036854775808", "abc", "1.5", "", "99999999999999999999"] {
            assert_eq!(
                raw.parse::<OrderId>(),
                Err(OrderError::InvalidIdentifier(raw.to_string())),
                "segment {raw:?}"
            );
        }
    }
}
