//! Feature service over websockets.
//!
//! Run the server with
//! ```not_rust
//! cargo run --bin route-guide
//! ```
//!
//! Exercise all four call patterns with the demo client
//! ```not_rust
//! cargo run --bin client
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Server;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use route_guide::catalog::{default_catalog, FeatureStore};
use route_guide::config::CONFIG;
use route_guide::server::{app, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_guide=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store: Arc<dyn FeatureStore> = Arc::new(default_catalog());
    let state = Arc::new(AppState::new(store, CONFIG.max_concurrent_calls));

    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port)
        .parse()
        .expect("HOST/PORT does not form a socket address");
    info!("listening on {}", addr);

    Server::bind(&addr)
        .serve(app(state).into_make_service_with_connect_info::<SocketAddr>())
        .await
        .unwrap();
}
