//! Event admission policy.
//!
//! Decides whether an inbound protocol message is meaningful application
//! state. Every rejection is a policy decision, not an error: the event
//! is logged and dropped, nothing reaches the publish path.

use meshbridge_domain::converter::Definition;
use meshbridge_domain::event::MessageEvent;

/// Whether `event` should be translated and published.
///
/// Side-effect-free except diagnostic logging. Rejections:
/// coordinator traffic, relayed group frames from known re-transmitting
/// vendors, devices still being interviewed, and unsupported models
/// (the only case logged at warn).
#[must_use]
pub fn admit(event: &MessageEvent, definition: Option<&Definition>) -> bool {
    let device = &event.device;

    if device.is_coordinator() {
        tracing::debug!(address = %device.address, "ignoring coordinator traffic");
        return false;
    }

    if device.relays_group_traffic() && event.group_id.is_some_and(|group| group != 0) {
        tracing::debug!(
            address = %device.address,
            group = event.group_id,
            "ignoring relayed group frame"
        );
        return false;
    }

    if device.model.is_none() && device.interviewing {
        tracing::debug!(
            address = %device.address,
            "ignoring message from device still being interviewed"
        );
        return false;
    }

    if definition.is_none() {
        tracing::warn!(
            address = %device.address,
            model = device.model.as_deref().unwrap_or("unknown"),
            "received message from unsupported device model"
        );
        return false;
    }

    true
}
