use super::json_response;
use crate::error::ApiError;
use crate::models::{ClientProfile, ProfilePatch, ProfileQuery};
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Response,
};

/// PATCH /user/profile handler - Partially update a client profile
///
/// Only non-empty `Name` and `Email` values are applied. `Id` and `Token` in
/// the body are type-checked but never applied. The response carries the full
/// merged record.
///
/// The body is taken as raw bytes so the id checks run before it is parsed.
#[utoipa::path(
    patch,
    path = routes::USER_PROFILE,
    params(ProfileQuery),
    request_body = ProfilePatch,
    responses(
        (status = 200, description = "Profile updated", body = ClientProfile),
        (status = 400, description = "Missing clientId or invalid JSON", body = String, content_type = "text/plain"),
        (status = 404, description = "Client not found", body = String, content_type = "text/plain")
    ),
    tag = "profile"
)]
pub async fn update_profile_handler(
    State(state): State<AppState>,
    query: ProfileQuery,
    body: Bytes,
) -> Result<Response, ApiError> {
    let client_id = query.client_id().ok_or_else(ApiError::missing_client_id)?;

    let merged = state
        .store
        .update(client_id, |profile| {
            let patch = ProfilePatch::from_json(&body)?;
            patch.merge_into(profile);
            Ok::<ClientProfile, ApiError>(profile.clone())
        })
        .await
        .ok_or_else(ApiError::client_not_found)??;

    tracing::info!("Successfully updated profile with id: {}", client_id);
    json_response(StatusCode::OK, &merged)
}
