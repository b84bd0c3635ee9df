use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::auth::{require_admin, require_claims};
use crate::error::AppError;
use crate::state::AppState;
use aerovia_core::repository::FlightRepository;
use aerovia_shared::Flight;

#[derive(Debug, Deserialize)]
struct CreateFlightRequest {
    origin: String,
    destination: String,
    capacity: i64,
}

#[derive(Debug, Serialize)]
struct FlightResponse {
    origin: String,
    destination: String,
    capacity: u32,
    booked: u32,
    seats_left: u32,
}

impl From<Flight> for FlightResponse {
    fn from(flight: Flight) -> Self {
        Self {
            origin: flight.route.origin.clone(),
            destination: flight.route.destination.clone(),
            capacity: flight.capacity,
            booked: flight.booked,
            seats_left: flight.seats_left(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RouteQuery {
    origin: String,
    destination: String,
}

#[derive(Debug, Serialize)]
struct RoutesResponse {
    routes: Vec<Vec<String>>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights", get(list_flights).post(create_flight))
        .route("/v1/flights/routes", get(search_routes))
}

/// POST /v1/flights — administrator only.
async fn create_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateFlightRequest>,
) -> Result<Json<FlightResponse>, AppError> {
    let claims = require_claims(&headers, &state)?;
    require_admin(&claims)?;

    // Out-of-range capacities cannot reach the catalog's unsigned type,
    // so they are rejected here with the same error kind.
    if req.capacity <= 0 || req.capacity > u32::MAX as i64 {
        return Err(AppError::ValidationError(format!(
            "Invalid capacity: {}",
            req.capacity
        )));
    }

    let flight = state
        .catalog
        .add_flight(&req.origin, &req.destination, req.capacity as u32)
        .await?;
    Ok(Json(flight.into()))
}

/// GET /v1/flights
async fn list_flights(
    State(state): State<AppState>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    let flights = state.catalog.list_flights().await?;
    Ok(Json(flights.into_iter().map(FlightResponse::from).collect()))
}

/// GET /v1/flights/routes?origin=OPO&destination=CDG
async fn search_routes(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RoutesResponse>, AppError> {
    let routes = state.catalog.routes_between(
        &query.origin,
        &query.destination,
        state.business_rules.max_route_legs,
    );
    Ok(Json(RoutesResponse { routes }))
}
