//! Webinars service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::{ChangeSeatsRequest, User},
    state::AppState,
    use_cases::ChangeSeatsPayload,
};

/// Create the router for the webinars service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/webinars/:id/seats", post(change_seats))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "webinars-service"
    }))
}

/// Change the number of seats of a webinar
pub async fn change_seats(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<ChangeSeatsRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let seats = payload
        .parse_seats()
        .ok_or_else(|| ApiError::BadRequest("Seats must be an integer".to_string()))?;

    let user = User::new(
        payload
            .user_id
            .unwrap_or_else(|| state.default_user_id.clone()),
    );

    state
        .change_seats
        .execute(ChangeSeatsPayload {
            user,
            webinar_id: id.clone(),
            seats,
        })
        .await?;

    info!("Seats of webinar {} updated to {}", id, seats);

    Ok(Json(json!({ "message": "Seats updated" })))
}
