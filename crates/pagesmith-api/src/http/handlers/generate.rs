//! `POST /api/generate` handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use pagesmith_types::generation::GenerationRequest;

use crate::http::response::GenerateResponse;
use crate::state::AppState;

/// Generate a page for `topic`. Every outcome is HTTP 200.
pub async fn generate_page(
    State(state): State<AppState>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> GenerateResponse {
    let request_id = Uuid::now_v7();

    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(%request_id, error = %rejection, "rejected generate request body");
            return GenerateResponse::Error {
                message: rejection.body_text(),
            };
        }
    };

    let span = info_span!("api.generate", %request_id, topic_len = request.topic.len());
    async move {
        match state.generation_service.generate(&request.topic).await {
            Ok(code) => {
                info!(html_len = code.len(), "generation succeeded");
                GenerateResponse::Success { code }
            }
            Err(e) => {
                warn!(kind = %e.kind(), error = %e, "generation failed");
                GenerateResponse::Error {
                    message: e.to_string(),
                }
            }
        }
    }
    .instrument(span)
    .await
}
