use crate::day::DayState;
use aerovia_core::error::{CatalogError, ReservationError};
use aerovia_core::repository::{FlightRepository, ReservationRepository};
use aerovia_shared::{Reservation, ReservationId};
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("The booking day is closed")]
    DayClosed,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error("Seat release failed after reservation failure ({create}): {release}")]
    CompensationFailed {
        create: ReservationError,
        release: CatalogError,
    },
}

/// Coordinates the flight catalog, the reservation store and the day
/// switch into single logical booking operations.
///
/// Booking is a two-phase protocol: take the seat first, record the
/// reservation second, and give the seat back if recording fails. The
/// seat reservation is what arbitrates concurrent bookers, so a flight
/// can never be oversubscribed no matter how the record phase goes.
pub struct BookingDesk {
    flights: Arc<dyn FlightRepository>,
    reservations: Arc<dyn ReservationRepository>,
    day: Arc<DayState>,
}

impl BookingDesk {
    pub fn new(
        flights: Arc<dyn FlightRepository>,
        reservations: Arc<dyn ReservationRepository>,
        day: Arc<DayState>,
    ) -> Self {
        Self {
            flights,
            reservations,
            day,
        }
    }

    /// Book one seat for `requester` on the given route and date.
    pub async fn book(
        &self,
        requester: &str,
        origin: &str,
        destination: &str,
        travel_date: NaiveDate,
    ) -> Result<ReservationId, BookingError> {
        if !self.day.is_open() {
            return Err(BookingError::DayClosed);
        }

        self.flights.reserve_seat(origin, destination).await?;

        match self
            .reservations
            .create(requester, origin, destination, travel_date)
            .await
        {
            Ok(id) => {
                tracing::info!(
                    "Booking {} confirmed: {} {} -> {} on {}",
                    id,
                    requester,
                    origin,
                    destination,
                    travel_date
                );
                Ok(id)
            }
            Err(create) => {
                // The seat is taken but the record phase failed; the seat
                // must go back before the failure propagates.
                if let Err(release) = self.flights.release_seat(origin, destination).await {
                    tracing::error!(
                        "Compensation failed on {} -> {}: seat leaked ({})",
                        origin,
                        destination,
                        release
                    );
                    return Err(BookingError::CompensationFailed { create, release });
                }
                Err(create.into())
            }
        }
    }

    /// Cancel a reservation by id, freeing its seat.
    pub async fn cancel(&self, id: ReservationId) -> Result<(), BookingError> {
        if !self.day.is_open() {
            return Err(BookingError::DayClosed);
        }

        let reservation = self.reservations.get_by_id(id).await?;

        // Removal must be confirmed before the seat is released, so no
        // concurrent booker can observe freed capacity while the record
        // is still live. Of two racing cancels for one id, only the one
        // that wins the removal releases the seat.
        let removed = self.reservations.remove(&reservation.key()).await?;
        self.flights
            .release_seat(&removed.route.origin, &removed.route.destination)
            .await?;

        tracing::info!("Booking {} cancelled for {}", id, removed.requester);
        Ok(())
    }

    /// Snapshot of one requester's live reservations.
    pub async fn reservations_for(&self, requester: &str) -> Result<Vec<Reservation>, BookingError> {
        Ok(self.reservations.list_for(requester).await?)
    }
}
