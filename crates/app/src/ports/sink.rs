//! Publish sink port — where translated state leaves the pipeline.

use std::future::Future;
use std::sync::Arc;

use meshbridge_domain::address::IeeeAddress;
use meshbridge_domain::error::BridgeError;
use meshbridge_domain::payload::Payload;

/// Delivery of a device's translated state to subscribers.
///
/// Implemented by transport adapters (message bus, broker bridge) and by
/// the in-process bus used for tests and demos. Called zero or more
/// times per inbound event: zero when nothing decodes, once per
/// immediate publish, once per flushed debounce window, plus reset
/// publishes when dual-publish mode is active.
pub trait PublishSink: Send + Sync {
    /// Deliver `payload` as the state of the device at `address`.
    fn publish(
        &self,
        address: IeeeAddress,
        payload: Payload,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;
}

impl<S: PublishSink> PublishSink for Arc<S> {
    fn publish(
        &self,
        address: IeeeAddress,
        payload: Payload,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send {
        S::publish(self, address, payload)
    }
}
