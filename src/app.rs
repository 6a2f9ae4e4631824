use crate::api_doc::ApiDoc;
use crate::handlers::{
    delete_profile_handler, get_profile_handler, health_handler, method_not_allowed_handler,
    update_profile_handler,
};
use crate::routes;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the application router
///
/// `/user/profile` serves GET, PATCH and DELETE; every other verb on that
/// path is answered by the 405 fallback. HEAD is registered explicitly so it
/// is not routed to the GET handler.
pub fn router(state: AppState) -> Router {
    let profile = get(get_profile_handler)
        .head(method_not_allowed_handler)
        .patch(update_profile_handler)
        .delete(delete_profile_handler)
        .fallback(method_not_allowed_handler);

    Router::new()
        .route(routes::USER_PROFILE, profile)
        .route(routes::HEALTH, get(health_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProfileStore;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        router(AppState::new(ProfileStore::seeded()))
    }

    #[tokio::test]
    async fn test_method_routing() {
        let cases = [
            ("GET", "/user/profile?clientId=user1", StatusCode::OK),
            ("PATCH", "/user/profile", StatusCode::BAD_REQUEST),
            ("DELETE", "/user/profile?clientId=user1", StatusCode::NO_CONTENT),
            ("POST", "/user/profile?clientId=user1", StatusCode::METHOD_NOT_ALLOWED),
            ("PUT", "/user/profile?clientId=user1", StatusCode::METHOD_NOT_ALLOWED),
            ("OPTIONS", "/user/profile?clientId=user1", StatusCode::METHOD_NOT_ALLOWED),
            ("HEAD", "/user/profile?clientId=user1", StatusCode::METHOD_NOT_ALLOWED),
            ("TRACE", "/user/profile?clientId=user1", StatusCode::METHOD_NOT_ALLOWED),
        ];

        for (method, uri, expected) in cases {
            let response = setup_test_app()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), expected, "{} {}", method, uri);
        }
    }

    #[tokio::test]
    async fn test_method_not_allowed_body() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/user/profile?clientId=user1")
                    .body(Body::from(r#"{"name": "ignored"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Method not allowed");
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(routes::OPENAPI_JSON)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let profile_path = &doc["paths"]["/user/profile"];
        assert!(profile_path.get("get").is_some());
        assert!(profile_path.get("patch").is_some());
        assert!(profile_path.get("delete").is_some());
    }
}
