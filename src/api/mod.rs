mod handlers;
mod models;

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::AppState;

pub use handlers::{analyze, not_found};
pub use models::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, DEFAULT_MODEL};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .fallback(not_found)
        .with_state(state)
}
