use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The store lives in process memory, so the service is healthy whenever it
/// can answer. The current profile count is included for operators.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let profiles = state.store.len().await;
    tracing::debug!("Health check passed ({} profiles)", profiles);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            profiles,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProfileStore;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let app = Router::new()
            .route(routes::HEALTH, get(health_handler))
            .with_state(AppState::new(ProfileStore::seeded()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
        assert_eq!(response_json.profiles, 2);
    }
}
