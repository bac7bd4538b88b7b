//! HTTP autocomplete API.

mod handlers;
mod state;

use axum::routing::get;
use axum::Router;
use state::AppState;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::destination::DestinationResolver;

pub fn build_router(resolver: DestinationResolver, default_timeout: Duration) -> Router {
    let state = Arc::new(AppState {
        resolver,
        default_timeout,
    });

    Router::new()
        .route("/api/suggest", get(handlers::suggest))
        .route("/api/destinations", get(handlers::destinations))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(
    host: &str,
    port: u16,
    resolver: DestinationResolver,
    default_timeout: Duration,
) -> io::Result<()> {
    let app = build_router(resolver, default_timeout);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("waypoint server listening on http://{}", addr);
    axum::serve(listener, app).await
}
