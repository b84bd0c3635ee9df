pub mod error;
pub mod identity;
pub mod repository;

pub use error::{CatalogError, ReservationError, UserError};
pub use identity::{Authenticator, MemoryUserDirectory};
pub use repository::{FlightRepository, ReservationRepository};
