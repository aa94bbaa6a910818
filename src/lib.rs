pub mod api;
pub mod config;
pub mod prompt;
pub mod runner;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::runner::ModelRunner;

#[derive(Debug, Clone)]
pub struct AppState {
    pub runner: ModelRunner,
}

/// Builds the router with a permissive CORS policy applied to every route.
///
/// Each request spawns its own runner process; nothing bounds how many run at once.
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(state).layer(cors)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await
}
