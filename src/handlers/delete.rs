use crate::error::ApiError;
use crate::models::ProfileQuery;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
};

/// DELETE /user/profile handler - Remove a client profile
#[utoipa::path(
    delete,
    path = routes::USER_PROFILE,
    params(ProfileQuery),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 400, description = "Missing clientId", body = String, content_type = "text/plain"),
        (status = 404, description = "Client not found", body = String, content_type = "text/plain")
    ),
    tag = "profile"
)]
pub async fn delete_profile_handler(
    State(state): State<AppState>,
    query: ProfileQuery,
) -> Result<StatusCode, ApiError> {
    let client_id = query.client_id().ok_or_else(ApiError::missing_client_id)?;

    if !state.store.delete(client_id).await {
        tracing::info!("Profile not found with id: {}", client_id);
        return Err(ApiError::client_not_found());
    }

    tracing::info!("Successfully deleted profile with id: {}", client_id);
    Ok(StatusCode::NO_CONTENT)
}
