//! Per-device inter-event gap tracking.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use meshbridge_domain::address::IeeeAddress;
use tokio::time::Instant;

/// Tracks, per device, the instant of its last published event.
///
/// Entries are created on first use and never evicted; a stale entry for
/// a departed device is harmless.
#[derive(Debug, Default)]
pub struct ElapsedTracker {
    last_seen: Mutex<HashMap<IeeeAddress, Instant>>,
}

impl ElapsedTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a publish for `address` and return the gap since the
    /// previous one, or `None` on the first.
    pub fn touch(&self, address: IeeeAddress) -> Option<Duration> {
        let mut last_seen = self
            .last_seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        last_seen
            .insert(address, now)
            .map(|previous| now - previous)
    }
}
