//! Converters for momentary switches.
//!
//! Two generations of wireless switches report clicks differently: newer
//! ones send a multistate value describing the whole gesture in one
//! message, older ones send separate press and release frames that must
//! be correlated over time.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use meshbridge_domain::address::IeeeAddress;
use meshbridge_domain::converter::{Converter, Definition};
use meshbridge_domain::event::{ClusterId, MessageEvent, MessageType, clusters};
use meshbridge_domain::options::DeviceOptions;
use meshbridge_domain::payload::Payload;
use serde_json::Value;
use tokio::time::Instant;

/// Press duration from which a release counts as a long click.
const LONG_PRESS: Duration = Duration::from_secs(1);

fn click_payload(click: &str) -> Payload {
    let mut payload = Payload::new();
    payload.insert("click", click);
    payload
}

/// `genMultistateInput` reports → `{click}`.
///
/// The `presentValue` encodes the whole gesture: 0 hold, 1–4 click
/// counts, 255 release after hold.
pub struct MultistateAction;

impl Converter for MultistateAction {
    fn cluster(&self) -> ClusterId {
        clusters::GEN_MULTISTATE_INPUT
    }

    fn types(&self) -> &'static [MessageType] {
        &[MessageType::AttributeReport]
    }

    fn decode(
        &self,
        _definition: &Definition,
        event: &MessageEvent,
        _emit: &mut dyn FnMut(Payload),
        _options: &DeviceOptions,
    ) -> Option<Payload> {
        let click = match event.data.get("presentValue").and_then(Value::as_u64)? {
            0 => "hold",
            1 => "single",
            2 => "double",
            3 => "triple",
            4 => "quadruple",
            255 => "release",
            other => {
                tracing::debug!(value = other, "unrecognised multistate gesture");
                return None;
            }
        };
        Some(click_payload(click))
    }
}

/// `genOnOff` press/release frames → `{click}`, correlated per device.
///
/// A press (`onOff == 0`) only records the instant; the matching release
/// (`onOff == 1`) publishes `single` or `long` **through the publish
/// callback**, since the gesture spans two messages. Multi-click counts
/// (2–4) arrive as a single frame and are returned as a fragment.
pub struct PressReleaseClick {
    presses: Mutex<HashMap<IeeeAddress, Instant>>,
}

impl PressReleaseClick {
    #[must_use]
    pub fn new() -> Self {
        Self {
            presses: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for PressReleaseClick {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for PressReleaseClick {
    fn cluster(&self) -> ClusterId {
        clusters::GEN_ON_OFF
    }

    fn types(&self) -> &'static [MessageType] {
        &[MessageType::AttributeReport]
    }

    fn decode(
        &self,
        _definition: &Definition,
        event: &MessageEvent,
        emit: &mut dyn FnMut(Payload),
        _options: &DeviceOptions,
    ) -> Option<Payload> {
        let address = event.device.address;
        let mut presses = self
            .presses
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match event.data.get("onOff").and_then(Value::as_u64)? {
            0 => {
                presses.insert(address, Instant::now());
                None
            }
            1 => {
                let held = presses.remove(&address).map(|pressed| pressed.elapsed());
                let click = match held {
                    Some(duration) if duration >= LONG_PRESS => "long",
                    _ => "single",
                };
                emit(click_payload(click));
                None
            }
            2 => Some(click_payload("double")),
            3 => Some(click_payload("triple")),
            4 => Some(click_payload("quadruple")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{definition, event, payload};
    use super::*;
    use serde_json::json;

    // ── MultistateAction ────────────────────────────────────────────────

    #[test]
    fn should_decode_multistate_gestures() {
        let definition = definition();
        for (value, click) in [
            (0, "hold"),
            (1, "single"),
            (2, "double"),
            (3, "triple"),
            (4, "quadruple"),
            (255, "release"),
        ] {
            let event = event(
                clusters::GEN_MULTISTATE_INPUT,
                MessageType::AttributeReport,
                json!({"presentValue": value}),
            );
            let fragment = MultistateAction
                .decode(&definition, &event, &mut |_| {}, &DeviceOptions::default())
                .unwrap();
            assert_eq!(fragment, payload(json!({"click": click})));
        }
    }

    #[test]
    fn should_ignore_unknown_multistate_values() {
        let definition = definition();
        let event = event(
            clusters::GEN_MULTISTATE_INPUT,
            MessageType::AttributeReport,
            json!({"presentValue": 17}),
        );
        let fragment =
            MultistateAction.decode(&definition, &event, &mut |_| {}, &DeviceOptions::default());
        assert!(fragment.is_none());
    }

    // ── PressReleaseClick ───────────────────────────────────────────────

    fn on_off_event(value: u64) -> MessageEvent {
        event(
            clusters::GEN_ON_OFF,
            MessageType::AttributeReport,
            json!({"onOff": value}),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn should_emit_single_click_on_quick_release() {
        let converter = PressReleaseClick::new();
        let definition = definition();
        let mut emitted = Vec::new();

        let fragment = converter.decode(
            &definition,
            &on_off_event(0),
            &mut |p| emitted.push(p),
            &DeviceOptions::default(),
        );
        assert!(fragment.is_none());
        assert!(emitted.is_empty());

        tokio::time::advance(Duration::from_millis(200)).await;

        let fragment = converter.decode(
            &definition,
            &on_off_event(1),
            &mut |p| emitted.push(p),
            &DeviceOptions::default(),
        );
        assert!(fragment.is_none());
        assert_eq!(emitted, vec![payload(json!({"click": "single"}))]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_emit_long_click_when_held_past_threshold() {
        let converter = PressReleaseClick::new();
        let definition = definition();
        let mut emitted = Vec::new();

        converter.decode(
            &definition,
            &on_off_event(0),
            &mut |p| emitted.push(p),
            &DeviceOptions::default(),
        );
        tokio::time::advance(Duration::from_millis(1500)).await;
        converter.decode(
            &definition,
            &on_off_event(1),
            &mut |p| emitted.push(p),
            &DeviceOptions::default(),
        );

        assert_eq!(emitted, vec![payload(json!({"click": "long"}))]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_emit_single_click_for_release_without_recorded_press() {
        let converter = PressReleaseClick::new();
        let definition = definition();
        let mut emitted = Vec::new();

        converter.decode(
            &definition,
            &on_off_event(1),
            &mut |p| emitted.push(p),
            &DeviceOptions::default(),
        );
        assert_eq!(emitted, vec![payload(json!({"click": "single"}))]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_return_multi_click_counts_as_fragments() {
        let converter = PressReleaseClick::new();
        let definition = definition();
        let mut emitted = Vec::new();

        let fragment = converter
            .decode(
                &definition,
                &on_off_event(2),
                &mut |p| emitted.push(p),
                &DeviceOptions::default(),
            )
            .unwrap();
        assert_eq!(fragment, payload(json!({"click": "double"})));
        assert!(emitted.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn should_track_presses_per_device() {
        let converter = PressReleaseClick::new();
        let definition = definition();
        let mut emitted = Vec::new();

        // Device A presses, device B releases without a press.
        converter.decode(
            &definition,
            &on_off_event(0),
            &mut |p| emitted.push(p),
            &DeviceOptions::default(),
        );

        let mut other = on_off_event(1);
        other.device.address = IeeeAddress::new(0xdead_beef);
        tokio::time::advance(Duration::from_millis(1500)).await;
        converter.decode(
            &definition,
            &other,
            &mut |p| emitted.push(p),
            &DeviceOptions::default(),
        );

        // B had no recorded press, so its release is a plain single.
        assert_eq!(emitted, vec![payload(json!({"click": "single"}))]);
    }
}
