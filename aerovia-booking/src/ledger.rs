use aerovia_core::error::ReservationError;
use aerovia_core::repository::ReservationRepository;
use aerovia_shared::{Reservation, ReservationId, ReservationKey, Route};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory reservation store.
///
/// The primary map is keyed by logical key; a secondary index maps the
/// surrogate id back to its key. Creates and removes on one logical key
/// serialize on that key's map entry, which makes the entry itself the
/// linearization point: of N concurrent identical creates exactly one
/// wins, and of N concurrent removes of one key exactly one wins.
pub struct ReservationLedger {
    by_key: DashMap<ReservationKey, Reservation>,
    by_id: DashMap<ReservationId, ReservationKey>,
    next_id: AtomicU64,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self {
            by_key: DashMap::new(),
            by_id: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of live reservations.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl Default for ReservationLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for ReservationLedger {
    async fn create(
        &self,
        requester: &str,
        origin: &str,
        destination: &str,
        travel_date: NaiveDate,
    ) -> Result<ReservationId, ReservationError> {
        let key = ReservationKey::new(requester, Route::new(origin, destination), travel_date);

        match self.by_key.entry(key.clone()) {
            Entry::Occupied(existing) => {
                Err(ReservationError::AlreadyExists(existing.get().id))
            }
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let reservation = Reservation {
                    id,
                    requester: requester.to_string(),
                    route: key.route.clone(),
                    travel_date,
                    created_at: Utc::now(),
                };
                slot.insert(reservation);
                self.by_id.insert(id, key);
                Ok(id)
            }
        }
    }

    async fn get(&self, key: &ReservationKey) -> Result<Reservation, ReservationError> {
        self.by_key
            .get(key)
            .map(|r| r.value().clone())
            .ok_or(ReservationError::NotFound)
    }

    async fn get_by_id(&self, id: ReservationId) -> Result<Reservation, ReservationError> {
        // Clone the key out before touching the primary map; holding the
        // index entry while locking the primary map would invert the lock
        // order used by `create`.
        let key = self
            .by_id
            .get(&id)
            .map(|k| k.value().clone())
            .ok_or(ReservationError::NotFound)?;

        let reservation = self
            .by_key
            .get(&key)
            .map(|r| r.value().clone())
            .ok_or(ReservationError::NotFound)?;

        // The key may have been cancelled and rebooked under a fresh id
        // between the two lookups; a stale index entry is not a hit.
        if reservation.id != id {
            return Err(ReservationError::NotFound);
        }
        Ok(reservation)
    }

    async fn remove(&self, key: &ReservationKey) -> Result<Reservation, ReservationError> {
        let (_, removed) = self.by_key.remove(key).ok_or(ReservationError::NotFound)?;
        self.by_id.remove(&removed.id);
        Ok(removed)
    }

    async fn list_for(&self, requester: &str) -> Result<Vec<Reservation>, ReservationError> {
        Ok(self
            .by_key
            .iter()
            .filter(|r| r.requester == requester)
            .map(|r| r.value().clone())
            .collect())
    }
}
