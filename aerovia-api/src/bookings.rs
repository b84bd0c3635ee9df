use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::require_claims;
use crate::error::AppError;
use crate::state::AppState;
use aerovia_shared::{Reservation, ReservationId};

#[derive(Debug, Deserialize)]
struct CreateBookingRequest {
    origin: String,
    destination: String,
    travel_date: NaiveDate,
}

#[derive(Debug, Serialize)]
struct BookingResponse {
    reservation_id: ReservationId,
}

#[derive(Debug, Deserialize)]
struct ItineraryRequest {
    stops: Vec<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
struct ItineraryResponse {
    reservation_ids: Vec<ReservationId>,
}

#[derive(Debug, Serialize)]
struct ReservationResponse {
    id: ReservationId,
    origin: String,
    destination: String,
    travel_date: NaiveDate,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            origin: r.route.origin,
            destination: r.route.destination,
            travel_date: r.travel_date,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", get(list_bookings).post(create_booking))
        .route("/v1/bookings/itinerary", post(book_itinerary))
        .route("/v1/bookings/{id}", axum::routing::delete(cancel_booking))
}

/// POST /v1/bookings
async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let claims = require_claims(&headers, &state)?;

    let reservation_id = state
        .desk
        .book(&claims.sub, &req.origin, &req.destination, req.travel_date)
        .await?;

    Ok(Json(BookingResponse { reservation_id }))
}

/// DELETE /v1/bookings/{id}
async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<ReservationId>,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = require_claims(&headers, &state)?;

    state.desk.cancel(id).await?;
    info!("Reservation {} cancelled by {}", id, claims.sub);

    Ok(Json(serde_json::json!({ "cancelled": id })))
}

/// POST /v1/bookings/itinerary
async fn book_itinerary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ItineraryRequest>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let claims = require_claims(&headers, &state)?;

    let reservation_ids = state
        .planner
        .book_route(&claims.sub, &req.stops, req.start_date, req.end_date)
        .await?;

    Ok(Json(ItineraryResponse { reservation_ids }))
}

/// GET /v1/bookings — the caller's own reservations.
async fn list_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let claims = require_claims(&headers, &state)?;

    let reservations = state.desk.reservations_for(&claims.sub).await?;
    Ok(Json(
        reservations
            .into_iter()
            .map(ReservationResponse::from)
            .collect(),
    ))
}
