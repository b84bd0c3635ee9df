use serde::{Deserialize, Serialize};
use std::fmt;

/// An origin/destination pair. At most one flight exists per route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// A bookable flight with a fixed seat capacity.
///
/// `booked` never exceeds `capacity`; the catalog enforces this on every
/// seat reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub route: Route,
    pub capacity: u32,
    pub booked: u32,
}

impl Flight {
    pub fn new(route: Route, capacity: u32) -> Self {
        Self {
            route,
            capacity,
            booked: 0,
        }
    }

    pub fn seats_left(&self) -> u32 {
        self.capacity - self.booked
    }

    pub fn is_full(&self) -> bool {
        self.booked >= self.capacity
    }
}
