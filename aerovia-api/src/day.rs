use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
use serde_json::json;

use crate::auth::{require_admin, require_claims};
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/day/open", post(open_day))
        .route("/v1/day/close", post(close_day))
}

/// POST /v1/day/open — administrator only.
async fn open_day(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = require_claims(&headers, &state)?;
    require_admin(&claims)?;

    state.day.open()?;
    Ok(Json(json!({ "open": true })))
}

/// POST /v1/day/close — administrator only.
async fn close_day(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = require_claims(&headers, &state)?;
    require_admin(&claims)?;

    state.day.close()?;
    Ok(Json(json!({ "open": false })))
}
