use aerovia_booking::{BookingError, DayError, ItineraryError};
use aerovia_core::error::{CatalogError, ReservationError, UserError};
use aerovia_shared::ReservationId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    AuthorizationError(String),
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    /// An itinerary stopped mid-sequence; the committed leg ids stay
    /// booked and are reported to the caller.
    ItineraryStopped {
        message: String,
        committed: Vec<ReservationId>,
    },
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::AuthenticationError(msg) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": msg })),
            ),
            AppError::AuthorizationError(msg) => {
                (StatusCode::FORBIDDEN, Json(json!({ "error": msg })))
            }
            AppError::ValidationError(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": msg })),
            ),
            AppError::NotFoundError(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg })))
            }
            AppError::ConflictError(msg) => {
                (StatusCode::CONFLICT, Json(json!({ "error": msg })))
            }
            AppError::ItineraryStopped { message, committed } => (
                StatusCode::CONFLICT,
                Json(json!({ "error": message, "committed": committed })),
            ),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
            }
        };

        (status, body).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::FlightNotFound(_) => AppError::NotFoundError(err.to_string()),
            CatalogError::FlightExists(_) | CatalogError::SoldOut(_) => {
                AppError::ConflictError(err.to_string())
            }
            CatalogError::InvalidCapacity(_) | CatalogError::SameEndpoints(_) => {
                AppError::ValidationError(err.to_string())
            }
            CatalogError::Backend(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::NotFound => AppError::NotFoundError(err.to_string()),
            ReservationError::AlreadyExists(_) => AppError::ConflictError(err.to_string()),
            ReservationError::Backend(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFoundError(err.to_string()),
            UserError::AlreadyExists(_) => AppError::ConflictError(err.to_string()),
            UserError::BadCredentials => AppError::AuthenticationError(err.to_string()),
            UserError::InvalidUsername(_) | UserError::InvalidPassword => {
                AppError::ValidationError(err.to_string())
            }
        }
    }
}

impl From<DayError> for AppError {
    fn from(err: DayError) -> Self {
        AppError::ConflictError(err.to_string())
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::DayClosed => AppError::ConflictError(err.to_string()),
            BookingError::Catalog(inner) => inner.into(),
            BookingError::Reservation(inner) => inner.into(),
            BookingError::CompensationFailed { .. } => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ItineraryError> for AppError {
    fn from(err: ItineraryError) -> Self {
        match err {
            ItineraryError::TooFewStops | ItineraryError::InvalidDate { .. } => {
                AppError::ValidationError(err.to_string())
            }
            ItineraryError::LegFailed { ref booked, .. } => {
                let committed = booked.clone();
                AppError::ItineraryStopped {
                    message: err.to_string(),
                    committed,
                }
            }
        }
    }
}
