use crate::desk::{BookingDesk, BookingError};
use aerovia_shared::ReservationId;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Policy deriving each leg's travel date from the itinerary start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LegSchedule {
    /// Leg `n` departs `days_per_leg * (n + 1)` days after the start, so
    /// consecutive legs fall on strictly increasing dates.
    Spaced { days_per_leg: i64 },
    /// Every leg departs the same fixed number of days after the start.
    FixedLead { days: i64 },
}

impl Default for LegSchedule {
    fn default() -> Self {
        LegSchedule::Spaced { days_per_leg: 1 }
    }
}

impl LegSchedule {
    pub fn leg_date(&self, start: NaiveDate, leg: usize) -> NaiveDate {
        match self {
            LegSchedule::Spaced { days_per_leg } => {
                start + Duration::days(days_per_leg * (leg as i64 + 1))
            }
            LegSchedule::FixedLead { days } => start + Duration::days(*days),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    #[error("An itinerary needs at least two stops")]
    TooFewStops,

    #[error("Itinerary window is invalid: {start} to {end}")]
    InvalidDate { start: NaiveDate, end: NaiveDate },

    #[error("Leg {leg} failed after {} committed legs: {source}", .booked.len())]
    LegFailed {
        leg: usize,
        /// Reservation ids already committed before the failure. These
        /// stay booked; rollback is the caller's decision.
        booked: Vec<ReservationId>,
        source: BookingError,
    },
}

/// Books a multi-stop route as a sequence of single-leg bookings.
///
/// Legs are booked in order through the desk. A failed leg stops the
/// sequence and reports the ids committed so far; it never rolls back
/// earlier legs.
pub struct ItineraryPlanner {
    desk: Arc<BookingDesk>,
    schedule: LegSchedule,
}

impl ItineraryPlanner {
    pub fn new(desk: Arc<BookingDesk>, schedule: LegSchedule) -> Self {
        Self { desk, schedule }
    }

    pub async fn book_route(
        &self,
        requester: &str,
        stops: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ReservationId>, ItineraryError> {
        if stops.len() < 2 {
            return Err(ItineraryError::TooFewStops);
        }
        if start > end {
            return Err(ItineraryError::InvalidDate { start, end });
        }

        // Date derivation is total, so the whole window can be validated
        // before any seat is taken.
        let legs = stops.len() - 1;
        let last = self.schedule.leg_date(start, legs - 1);
        if last > end {
            return Err(ItineraryError::InvalidDate { start, end });
        }

        let mut booked = Vec::with_capacity(legs);
        for (leg, pair) in stops.windows(2).enumerate() {
            let travel_date = self.schedule.leg_date(start, leg);
            match self.desk.book(requester, &pair[0], &pair[1], travel_date).await {
                Ok(id) => booked.push(id),
                Err(source) => {
                    tracing::warn!(
                        "Itinerary for {} stopped at leg {} ({} legs committed): {}",
                        requester,
                        leg,
                        booked.len(),
                        source
                    );
                    return Err(ItineraryError::LegFailed {
                        leg,
                        booked,
                        source,
                    });
                }
            }
        }
        Ok(booked)
    }
}
