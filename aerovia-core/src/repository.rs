use crate::error::{CatalogError, ReservationError};
use aerovia_shared::{Flight, Reservation, ReservationId, ReservationKey};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Data-access contract for flights.
///
/// `reserve_seat` and `release_seat` are check-and-update operations:
/// implementations must apply them atomically per route, so that two
/// concurrent callers can never both take the last seat.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Register a new flight. Rejects duplicate routes, zero capacity and
    /// routes whose endpoints coincide.
    async fn add_flight(
        &self,
        origin: &str,
        destination: &str,
        capacity: u32,
    ) -> Result<Flight, CatalogError>;

    async fn flight(&self, origin: &str, destination: &str) -> Result<Flight, CatalogError>;

    /// Atomically take one seat if any is left.
    async fn reserve_seat(&self, origin: &str, destination: &str) -> Result<(), CatalogError>;

    /// Atomically give one seat back (floor at zero).
    async fn release_seat(&self, origin: &str, destination: &str) -> Result<(), CatalogError>;

    /// Snapshot of every flight; copies, not live views.
    async fn list_flights(&self) -> Result<Vec<Flight>, CatalogError>;
}

/// Data-access contract for reservations.
///
/// Mutations on the same logical key are atomic with respect to one
/// another: of N concurrent `create` calls for one key exactly one
/// succeeds, and of N concurrent `remove` calls exactly one succeeds.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Store a new reservation and return its assigned id.
    async fn create(
        &self,
        requester: &str,
        origin: &str,
        destination: &str,
        travel_date: NaiveDate,
    ) -> Result<ReservationId, ReservationError>;

    async fn get(&self, key: &ReservationKey) -> Result<Reservation, ReservationError>;

    async fn get_by_id(&self, id: ReservationId) -> Result<Reservation, ReservationError>;

    /// Delete the reservation under `key`, returning the removed record.
    async fn remove(&self, key: &ReservationKey) -> Result<Reservation, ReservationError>;

    /// Snapshot of one requester's live reservations.
    async fn list_for(&self, requester: &str) -> Result<Vec<Reservation>, ReservationError>;
}
