use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DayError {
    #[error("The booking day is already open")]
    AlreadyOpen,

    #[error("The booking day is already closed")]
    AlreadyClosed,
}

/// Process-wide open/closed switch for the booking day.
///
/// One shared instance is injected into every component that gates on it;
/// nothing reads day state from globals. All accesses are `SeqCst`, so a
/// `close()` that returns before a booking starts its gate check is always
/// observed by that booking.
pub struct DayState {
    open: AtomicBool,
}

impl DayState {
    /// The day starts open.
    pub fn new() -> Self {
        Self {
            open: AtomicBool::new(true),
        }
    }

    pub fn open(&self) -> Result<(), DayError> {
        self.open
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| {
                tracing::info!("Booking day opened");
            })
            .map_err(|_| DayError::AlreadyOpen)
    }

    pub fn close(&self) -> Result<(), DayError> {
        self.open
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| {
                tracing::info!("Booking day closed");
            })
            .map_err(|_| DayError::AlreadyClosed)
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

impl Default for DayState {
    fn default() -> Self {
        Self::new()
    }
}
