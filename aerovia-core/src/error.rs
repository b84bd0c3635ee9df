use aerovia_shared::{ReservationId, Route};

/// Failures raised by the flight catalog.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("No flight on route {0}")]
    FlightNotFound(Route),

    #[error("A flight already exists on route {0}")]
    FlightExists(Route),

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(i64),

    #[error("Origin and destination are the same: {0}")]
    SameEndpoints(String),

    #[error("Flight {0} is sold out")]
    SoldOut(Route),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}

/// Failures raised by the reservation store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReservationError {
    #[error("Reservation not found")]
    NotFound,

    #[error("Reservation {0} already held for this route and date")]
    AlreadyExists(ReservationId),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}

/// Failures raised by the identity collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UserError {
    #[error("No account for {0}")]
    NotFound(String),

    #[error("An account already exists for {0}")]
    AlreadyExists(String),

    #[error("Wrong email or password")]
    BadCredentials,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password does not meet the minimum requirements")]
    InvalidPassword,
}
