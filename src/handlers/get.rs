use super::json_response;
use crate::error::ApiError;
use crate::models::{ProfileQuery, ProfileView};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};

/// GET /user/profile handler - Read a client profile without its token
///
/// A missing `clientId`, an unknown id and a blank record all answer 403
/// rather than 404, so callers cannot probe which ids exist.
#[utoipa::path(
    get,
    path = routes::USER_PROFILE,
    params(ProfileQuery),
    responses(
        (status = 200, description = "Profile found", body = ProfileView),
        (status = 403, description = "Missing clientId or unknown profile", body = String, content_type = "text/plain")
    ),
    tag = "profile"
)]
pub async fn get_profile_handler(
    State(state): State<AppState>,
    query: ProfileQuery,
) -> Result<Response, ApiError> {
    let profile = match query.client_id() {
        Some(id) => state.store.get(id).await,
        None => None,
    };

    match profile.filter(|profile| !profile.is_blank()) {
        Some(profile) => {
            tracing::info!("Successfully retrieved profile with id: {}", profile.id);
            json_response(StatusCode::OK, &ProfileView::from(&profile))
        }
        None => {
            tracing::info!("Profile lookup refused for clientId: {:?}", query.client_id());
            Err(ApiError::Forbidden)
        }
    }
}
