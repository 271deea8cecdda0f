//! Time sources injected into the token service.
//!
//! Verification never reads the wall clock directly, so tests can pin
//! "now" and exercise expiry boundaries deterministically.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Supplies the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall-clock time source used in production wiring
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time source pinned to a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// A new clock pinned `delta` after this one
    pub fn advanced_by(&self, delta: Duration) -> Self {
        Self {
            instant: self.instant + delta,
        }
    }
}

impl Default for FixedClock {
    /// 2023-01-01T00:00:00Z
    fn default() -> Self {
        Self {
            instant: Utc
                .with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
