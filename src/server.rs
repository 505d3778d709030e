//! Router and per-call admission for the four interaction patterns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::connect_info::ConnectInfo;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Router, TypedHeader};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::debug;

use crate::catalog::FeatureStore;
use crate::handlers::socket_actor::serve_call;
use crate::handlers::{CallHandler, FeatureLookup, FeatureStream, RecommendSession, RouteRecorder};
use crate::recommend::RecommendationEngine;

pub struct AppState {
    store: Arc<dyn FeatureStore>,
    permits: Arc<Semaphore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FeatureStore>, max_concurrent_calls: usize) -> Self {
        Self {
            store,
            permits: Arc::new(Semaphore::new(max_concurrent_calls)),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ws/get_feature", get(get_feature_ws))
        .route("/ws/list_features", get(list_features_ws))
        .route("/ws/record_route", get(record_route_ws))
        .route("/ws/recommend", get(recommend_ws))
        // logging so we can see whats going on
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn get_feature_ws(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    _user_agent: Option<TypedHeader<headers::UserAgent>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, StatusCode> {
    let handler = FeatureLookup::new(state.store.clone());
    open_call(&state, ws, addr, handler).await
}

async fn list_features_ws(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    _user_agent: Option<TypedHeader<headers::UserAgent>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, StatusCode> {
    let handler = FeatureStream::new(state.store.clone());
    open_call(&state, ws, addr, handler).await
}

async fn record_route_ws(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    _user_agent: Option<TypedHeader<headers::UserAgent>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, StatusCode> {
    open_call(&state, ws, addr, RouteRecorder).await
}

async fn recommend_ws(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    _user_agent: Option<TypedHeader<headers::UserAgent>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, StatusCode> {
    let handler = RecommendSession::new(RecommendationEngine::new(state.store.clone()));
    open_call(&state, ws, addr, handler).await
}

/// Admits the call against the concurrency budget and hands the upgraded
/// socket to its handler. The permit is held for the life of the session.
async fn open_call<H: CallHandler>(
    state: &Arc<AppState>,
    ws: WebSocketUpgrade,
    addr: SocketAddr,
    handler: H,
) -> Result<Response, StatusCode> {
    let permit: OwnedSemaphorePermit = state
        .permits
        .clone()
        .acquire_owned()
        .await
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;

    debug!("{} call from {}", H::name(), addr);
    Ok(ws
        .on_upgrade(move |socket| async move {
            let _permit = permit;
            serve_call(handler, socket).await;
        })
        .into_response())
}
