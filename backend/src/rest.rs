use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use shared::SettlementRequest;
use tracing::info;

use crate::domain::{DomainError, SettlementService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settlement_service: SettlementService,
}

impl AppState {
    pub fn new(settlement_service: SettlementService) -> Self {
        Self { settlement_service }
    }
}

/// Build the /api sub-router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/settlements", post(compute_settlement))
        .with_state(state)
}

/// Axum handler for POST /api/settlements
pub async fn compute_settlement(
    State(state): State<AppState>,
    Json(request): Json<SettlementRequest>,
) -> impl IntoResponse {
    info!("POST /api/settlements - {} entries", request.entries.len());

    match state.settlement_service.compute_settlement(request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err @ DomainError::InvalidInput(_)) => {
            tracing::error!("Rejected settlement request: {}", err);
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(err) => {
            tracing::error!("Settlement computation failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
