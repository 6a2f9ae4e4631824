use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error type for API endpoints
///
/// Every variant maps to one HTTP status and is rendered as a short
/// plain-text body. Failures are terminal for the request.
#[derive(Debug)]
pub enum ApiError {
    /// Missing `clientId` or an unparseable request body
    BadRequest(String),
    /// PATCH/DELETE target that is not in the store
    NotFound(String),
    /// GET on a profile that is missing or blank
    Forbidden,
    /// Verb other than GET, PATCH or DELETE
    MethodNotAllowed,
    /// Response could not be encoded
    Internal(String),
}

impl ApiError {
    pub fn missing_client_id() -> Self {
        ApiError::BadRequest("clientId is required".to_string())
    }

    pub fn client_not_found() -> Self {
        ApiError::NotFound("Client not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => {
                f.write_str(msg)
            }
            ApiError::Forbidden => f.write_str("Forbidden"),
            ApiError::MethodNotAllowed => f.write_str("Method not allowed"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        // String bodies are sent as text/plain; charset=utf-8
        (status, self.to_string()).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("JSON parse error: {}", err);
        ApiError::BadRequest("Invalid JSON".to_string())
    }
}
