pub mod day;
pub mod desk;
pub mod itinerary;
pub mod ledger;

pub use day::{DayError, DayState};
pub use desk::{BookingDesk, BookingError};
pub use itinerary::{ItineraryError, ItineraryPlanner, LegSchedule};
pub use ledger::ReservationLedger;
