pub mod flight;
pub mod pii;
pub mod reservation;
pub mod user;

pub use flight::{Flight, Route};
pub use pii::Masked;
pub use reservation::{Reservation, ReservationId, ReservationKey};
pub use user::{Authority, User};
