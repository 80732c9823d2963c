use super::types::{ErrorResponse, SimplifyRequest, SimplifyResponse};
use crate::{Error, flow::Simplifier};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub simplify_flow: Arc<Simplifier>,
    pub example_flow: Arc<Simplifier>,
}

pub async fn simplify(
    State(state): State<AppState>,
    Json(request): Json<SimplifyRequest>,
) -> Result<Json<SimplifyResponse>, (StatusCode, Json<ErrorResponse>)> {
    run_flow(&state.simplify_flow, request).await
}

pub async fn example(
    State(state): State<AppState>,
    Json(request): Json<SimplifyRequest>,
) -> Result<Json<SimplifyResponse>, (StatusCode, Json<ErrorResponse>)> {
    run_flow(&state.example_flow, request).await
}

async fn run_flow(
    flow: &Simplifier,
    request: SimplifyRequest,
) -> Result<Json<SimplifyResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Echo the caller's request id so it can discard stale responses,
    // generate one otherwise
    let request_id = request
        .request_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    info!("Received simplification request: {}", request_id);

    match flow.submit(&request.complex_text).await {
        Ok(result) => {
            info!("Successfully simplified request: {}", request_id);
            Ok(Json(SimplifyResponse {
                request_id,
                simplified_text: result.simplified_text,
            }))
        }
        Err(e) => {
            let status = match &e {
                Error::Validation(_) => {
                    warn!("Rejected request {}: {}", request_id, e);
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                Error::Service(_) => {
                    error!("Capability failed for request {}: {}", request_id, e);
                    StatusCode::BAD_GATEWAY
                }
                _ => {
                    error!("Failed to process request {}: {}", request_id, e);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            Err((
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
