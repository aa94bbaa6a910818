use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{prompt, AppState};

use super::models::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};

/// Runs the model over the described symptoms.
///
/// Runner failures are reported as `{"error": ...}` with status 200; only a
/// body that does not decode into [`AnalyzeRequest`] gets a 4xx.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(status = %rejection.status(), "rejected analyze request body");
            return (
                rejection.status(),
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(
        model = %request.model,
        symptoms_len = request.symptoms.len(),
        "analyzing symptoms"
    );

    let prompt = prompt::build(&request.symptoms);
    match state.runner.run(&request.model, &prompt).await {
        Ok(response) => (StatusCode::OK, Json(AnalyzeResponse { response })).into_response(),
        Err(err) => {
            tracing::warn!(model = %request.model, error = %err, "model runner failed");
            (
                StatusCode::OK,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
