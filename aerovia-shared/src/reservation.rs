use crate::flight::Route;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Surrogate reservation identifier. Assigned once, never reused.
pub type ReservationId = u64;

/// The logical identity of a reservation: one requester, one route, one
/// travel date. At most one live reservation exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationKey {
    pub requester: String,
    pub route: Route,
    pub travel_date: NaiveDate,
}

impl ReservationKey {
    pub fn new(requester: impl Into<String>, route: Route, travel_date: NaiveDate) -> Self {
        Self {
            requester: requester.into(),
            route,
            travel_date,
        }
    }
}

/// A requester's claim on one seat of one flight on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub requester: String,
    pub route: Route,
    pub travel_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn key(&self) -> ReservationKey {
        ReservationKey {
            requester: self.requester.clone(),
            route: self.route.clone(),
            travel_date: self.travel_date,
        }
    }
}
