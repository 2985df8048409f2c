//! In-process publish sink backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use meshbridge_domain::address::IeeeAddress;
use meshbridge_domain::error::BridgeError;
use meshbridge_domain::payload::Payload;
use meshbridge_domain::publication::StatePublication;

use crate::ports::PublishSink;

/// In-process publish sink using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the publication is simply dropped).
#[derive(Clone)]
pub struct InProcessBus {
    sender: broadcast::Sender<StatePublication>,
}

impl InProcessBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to publications on this bus.
    ///
    /// Returns a receiver that will get all publications made *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StatePublication> {
        self.sender.subscribe()
    }
}

impl PublishSink for InProcessBus {
    fn publish(
        &self,
        address: IeeeAddress,
        payload: Payload,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — we simply ignore the error.
        let _ = self.sender.send(StatePublication::new(address, payload));
        async { Ok(()) }
    }
}
