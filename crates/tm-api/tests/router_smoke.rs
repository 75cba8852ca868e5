use axum::{body::Body, http::Request, http::StatusCode};
use std::sync::atomic::Ordering;
use tm_common::dataset::Dataset;
use tower::ServiceExt;

#[tokio::test]
async fn livez_and_health_respond_ok() {
    let app = tm_api::create_router(tm_api::test_state(Dataset::default()));

    for uri in ["/livez", "/health", "/readyz"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn readyz_returns_service_unavailable_when_not_ready() {
    let state = tm_api::test_state(Dataset::default());
    state.readiness.store(false, Ordering::SeqCst);
    let app = tm_api::create_router(state);

    let response = app
        .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn metrics_endpoint_is_routed() {
    let app = tm_api::create_router(tm_api::test_state(Dataset::default()));

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = tm_api::create_router(tm_api::test_state(Dataset::default()));

    let response = app
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
