use aerovia_core::error::CatalogError;
use aerovia_core::repository::FlightRepository;
use aerovia_shared::{Flight, Route};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::search;

/// In-memory flight inventory.
///
/// Flights live in a sharded map keyed by route, so seat reservations on
/// one route serialize against each other without blocking unrelated
/// routes. A flight's booked count is only ever updated while its map
/// entry is held exclusively.
pub struct FlightCatalog {
    flights: DashMap<Route, Flight>,
}

impl FlightCatalog {
    pub fn new() -> Self {
        Self {
            flights: DashMap::new(),
        }
    }

    /// All routings from `origin` to `destination` using at most
    /// `max_legs` flights, as ordered stop lists.
    pub fn routes_between(
        &self,
        origin: &str,
        destination: &str,
        max_legs: usize,
    ) -> Vec<Vec<String>> {
        let edges: Vec<Route> = self.flights.iter().map(|f| f.route.clone()).collect();
        search::paths_between(&edges, origin, destination, max_legs)
    }
}

impl Default for FlightCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlightRepository for FlightCatalog {
    async fn add_flight(
        &self,
        origin: &str,
        destination: &str,
        capacity: u32,
    ) -> Result<Flight, CatalogError> {
        if capacity == 0 {
            return Err(CatalogError::InvalidCapacity(capacity as i64));
        }
        if origin == destination {
            return Err(CatalogError::SameEndpoints(origin.to_string()));
        }

        let route = Route::new(origin, destination);
        match self.flights.entry(route.clone()) {
            Entry::Occupied(_) => Err(CatalogError::FlightExists(route)),
            Entry::Vacant(slot) => {
                let flight = Flight::new(route.clone(), capacity);
                slot.insert(flight.clone());
                tracing::info!("Added flight {} with {} seats", route, capacity);
                Ok(flight)
            }
        }
    }

    async fn flight(&self, origin: &str, destination: &str) -> Result<Flight, CatalogError> {
        let route = Route::new(origin, destination);
        self.flights
            .get(&route)
            .map(|f| f.value().clone())
            .ok_or(CatalogError::FlightNotFound(route))
    }

    async fn reserve_seat(&self, origin: &str, destination: &str) -> Result<(), CatalogError> {
        let route = Route::new(origin, destination);
        let mut flight = self
            .flights
            .get_mut(&route)
            .ok_or_else(|| CatalogError::FlightNotFound(route.clone()))?;

        if flight.is_full() {
            return Err(CatalogError::SoldOut(route));
        }

        flight.booked += 1;
        Ok(())
    }

    async fn release_seat(&self, origin: &str, destination: &str) -> Result<(), CatalogError> {
        let route = Route::new(origin, destination);
        let mut flight = self
            .flights
            .get_mut(&route)
            .ok_or(CatalogError::FlightNotFound(route))?;

        flight.booked = flight.booked.saturating_sub(1);
        Ok(())
    }

    async fn list_flights(&self) -> Result<Vec<Flight>, CatalogError> {
        Ok(self.flights.iter().map(|f| f.value().clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seat_lifecycle() {
        let catalog = FlightCatalog::new();
        catalog.add_flight("OPO", "CDG", 2).await.unwrap();

        catalog.reserve_seat("OPO", "CDG").await.unwrap();
        catalog.reserve_seat("OPO", "CDG").await.unwrap();
        assert!(matches!(
            catalog.reserve_seat("OPO", "CDG").await,
            Err(CatalogError::SoldOut(_))
        ));

        catalog.release_seat("OPO", "CDG").await.unwrap();
        catalog.reserve_seat("OPO", "CDG").await.unwrap();

        let flight = catalog.flight("OPO", "CDG").await.unwrap();
        assert_eq!(flight.booked, 2);
    }

    #[tokio::test]
    async fn test_add_flight_validation() {
        let catalog = FlightCatalog::new();

        assert!(matches!(
            catalog.add_flight("OPO", "CDG", 0).await,
            Err(CatalogError::InvalidCapacity(0))
        ));
        assert!(matches!(
            catalog.add_flight("OPO", "OPO", 10).await,
            Err(CatalogError::SameEndpoints(_))
        ));

        catalog.add_flight("OPO", "CDG", 10).await.unwrap();
        assert!(matches!(
            catalog.add_flight("OPO", "CDG", 5).await,
            Err(CatalogError::FlightExists(_))
        ));
    }

    #[tokio::test]
    async fn test_release_floors_at_zero() {
        let catalog = FlightCatalog::new();
        catalog.add_flight("OPO", "CDG", 3).await.unwrap();

        catalog.release_seat("OPO", "CDG").await.unwrap();
        let flight = catalog.flight("OPO", "CDG").await.unwrap();
        assert_eq!(flight.booked, 0);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let catalog = FlightCatalog::new();
        assert!(matches!(
            catalog.reserve_seat("OPO", "CDG").await,
            Err(CatalogError::FlightNotFound(_))
        ));
        assert!(matches!(
            catalog.flight("OPO", "CDG").await,
            Err(CatalogError::FlightNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_is_a_snapshot() {
        let catalog = FlightCatalog::new();
        catalog.add_flight("OPO", "CDG", 5).await.unwrap();

        let snapshot = catalog.list_flights().await.unwrap();
        catalog.reserve_seat("OPO", "CDG").await.unwrap();

        assert_eq!(snapshot[0].booked, 0);
        assert_eq!(catalog.flight("OPO", "CDG").await.unwrap().booked, 1);
    }
}
