use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use route_guide::catalog::InMemoryCatalog;
use route_guide::server::{app, AppState};

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let state = Arc::new(AppState::new(Arc::new(InMemoryCatalog::new(vec![])), 4));

    let response = app(state)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
