pub mod health;
pub mod get;
pub mod update;
pub mod delete;

pub use health::health_handler;
pub use get::get_profile_handler;
pub use update::update_profile_handler;
pub use delete::delete_profile_handler;

use crate::error::ApiError;
use crate::models::ProfileQuery;
use axum::{
    extract::{FromRequestParts, Query},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::convert::Infallible;

/// Fallback for any verb the profile route does not serve
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Encode `body` as a JSON response, reporting encode failures as 500
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body)
        .map_err(|_| ApiError::Internal("Failed to encode response".to_string()))?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

/// Reads `clientId` from the query string. A repeated key resolves to its
/// first value; an undecodable query counts as no `clientId` at all.
impl<S> FromRequestParts<S> for ProfileQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => Ok(ProfileQuery::from_pairs(pairs)),
            Err(rejection) => {
                tracing::debug!("Ignoring undecodable query string: {}", rejection);
                Ok(ProfileQuery::default())
            }
        }
    }
}
