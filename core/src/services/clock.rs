//! Clock abstraction for testable expiry logic.

use chrono::{DateTime, Utc};

/// Source of the current instant
///
/// Every service that reasons about expiry receives a clock at construction
/// instead of calling `Utc::now()` directly, so tests can advance time
/// deterministically. Lifetimes are expressed as `chrono::Duration`s added
/// to UTC instants; no wall-clock offset arithmetic.
pub trait Clock: Send + Sync {
    /// The current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub mod mock {
    //! Mock clock for deterministic expiry tests

    use std::sync::Mutex;

    use chrono::{DateTime, Duration, Utc};

    use super::Clock;

    /// Clock frozen at a settable instant
    pub struct MockClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl MockClock {
        /// Create a clock frozen at the given instant
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Mutex::new(start),
            }
        }

        /// Move the clock forward
        pub fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now = *now + by;
        }

        /// Set the clock to an exact instant
        pub fn set(&self, to: DateTime<Utc>) {
            *self.now.lock().unwrap() = to;
        }
    }

    impl Clock for MockClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    impl Clock for std::sync::Arc<MockClock> {
        fn now(&self) -> DateTime<Utc> {
            self.as_ref().now()
        }
    }
}
