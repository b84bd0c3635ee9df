use aerovia_booking::{BookingDesk, DayState, ItineraryPlanner, ReservationLedger};
use aerovia_catalog::FlightCatalog;
use aerovia_core::identity::{Authenticator, MemoryUserDirectory};
use std::sync::Arc;

use crate::config::BusinessRules;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FlightCatalog>,
    pub desk: Arc<BookingDesk>,
    pub planner: Arc<ItineraryPlanner>,
    pub day: Arc<DayState>,
    pub users: Arc<dyn Authenticator>,
    pub auth: AuthConfig,
    pub business_rules: BusinessRules,
}

impl AppState {
    /// Wire up a fresh engine: catalog, ledger and day switch shared
    /// between the desk and the planner.
    pub fn new(auth: AuthConfig, business_rules: BusinessRules) -> Self {
        let catalog = Arc::new(FlightCatalog::new());
        let ledger = Arc::new(ReservationLedger::new());
        let day = Arc::new(DayState::new());
        let desk = Arc::new(BookingDesk::new(catalog.clone(), ledger, day.clone()));
        let planner = Arc::new(ItineraryPlanner::new(
            desk.clone(),
            business_rules.leg_schedule,
        ));

        Self {
            catalog,
            desk,
            planner,
            day,
            users: Arc::new(MemoryUserDirectory::new()),
            auth,
            business_rules,
        }
    }
}
