//! Per-device trailing-edge debounce of state payloads.
//!
//! Devices that report in bursts (multi-cluster sensors, remotes with
//! several endpoints) would otherwise cause one publish per fragment.
//! The aggregator merges fragments per device and publishes the union
//! once the device has been quiet for its configured window.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use meshbridge_domain::address::IeeeAddress;
use meshbridge_domain::payload::Payload;

use crate::ports::PublishSink;

/// Trailing-edge per-device payload aggregation.
///
/// Every [`accumulate`](Self::accumulate) call merges the fragment into
/// the device's pending payload and rearms its flush timer; the timer
/// firing with no further calls publishes the accumulated payload and
/// clears the entry. Rearming is cancel-and-reschedule: the previous
/// flush task is aborted before a new one is spawned, so at most one
/// timer is armed per device.
pub struct DebounceAggregator<S> {
    inner: Arc<Inner<S>>,
}

struct Inner<S> {
    sink: S,
    entries: Mutex<HashMap<IeeeAddress, DebounceEntry>>,
}

struct DebounceEntry {
    pending: Payload,
    timer: JoinHandle<()>,
}

impl<S: PublishSink + 'static> DebounceAggregator<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                sink,
                entries: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Merge `fragment` into the device's pending payload and restart its
    /// quiet-window timer.
    pub fn accumulate(&self, address: IeeeAddress, fragment: Payload, window: Duration) {
        let timer = self.arm(address, window);
        let mut entries = self
            .inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match entries.entry(address) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.timer.abort();
                entry.pending.merge(fragment);
                entry.timer = timer;
            }
            Entry::Vacant(vacant) => {
                vacant.insert(DebounceEntry {
                    pending: fragment,
                    timer,
                });
            }
        }
    }

    /// Spawn a flush task firing after `window`.
    fn arm(&self, address: IeeeAddress, window: Duration) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            inner.flush(address).await;
        })
    }
}

impl<S: PublishSink> Inner<S> {
    /// Publish and clear the device's pending payload.
    ///
    /// The entry is taken out under the lock, the publish happens after
    /// it is released.
    async fn flush(&self, address: IeeeAddress) {
        let pending = {
            let mut entries = self
                .entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            entries.remove(&address).map(|entry| entry.pending)
        };

        let Some(payload) = pending else {
            return;
        };
        if payload.is_empty() {
            return;
        }

        if let Err(err) = self.sink.publish(address, payload).await {
            tracing::warn!(%err, %address, "failed to publish debounced state");
        }
    }
}
