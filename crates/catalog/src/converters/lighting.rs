//! Converters for on/off, brightness and color clusters.

use meshbridge_domain::converter::{Converter, Definition};
use meshbridge_domain::event::{ClusterId, MessageEvent, MessageType, clusters};
use meshbridge_domain::options::DeviceOptions;
use meshbridge_domain::payload::Payload;
use serde_json::Value;

use super::{as_flag, round_to};

/// Raw chromaticity coordinates are reported as u16 fractions of this.
const COLOR_SCALE: f64 = 65535.0;

/// `genOnOff` reports → `{state: "ON" | "OFF"}`.
pub struct OnOffReport;

impl Converter for OnOffReport {
    fn cluster(&self) -> ClusterId {
        clusters::GEN_ON_OFF
    }

    fn types(&self) -> &'static [MessageType] {
        &[MessageType::AttributeReport, MessageType::ReadResponse]
    }

    fn decode(
        &self,
        _definition: &Definition,
        event: &MessageEvent,
        _emit: &mut dyn FnMut(Payload),
        _options: &DeviceOptions,
    ) -> Option<Payload> {
        let on = as_flag(event.data.get("onOff")?)?;
        let mut payload = Payload::new();
        payload.insert("state", if on { "ON" } else { "OFF" });
        Some(payload)
    }
}

/// `genLevelCtrl` reports → `{brightness}` on the protocol's 0–254 scale.
pub struct BrightnessReport;

impl Converter for BrightnessReport {
    fn cluster(&self) -> ClusterId {
        clusters::GEN_LEVEL_CTRL
    }

    fn types(&self) -> &'static [MessageType] {
        &[MessageType::AttributeReport, MessageType::ReadResponse]
    }

    fn decode(
        &self,
        _definition: &Definition,
        event: &MessageEvent,
        _emit: &mut dyn FnMut(Payload),
        _options: &DeviceOptions,
    ) -> Option<Payload> {
        let level = event.data.get("currentLevel")?.as_u64()?;
        let mut payload = Payload::new();
        payload.insert("brightness", level);
        Some(payload)
    }
}

/// `lightingColorCtrl` reports → `{color: {x, y}}` and/or `{color_temp}`.
///
/// Chromaticity comes in as u16 fractions of 65535 and is rounded to four
/// decimals; color temperature is passed through in mireds.
pub struct ColorReport;

impl Converter for ColorReport {
    fn cluster(&self) -> ClusterId {
        clusters::LIGHTING_COLOR_CTRL
    }

    fn types(&self) -> &'static [MessageType] {
        &[MessageType::AttributeReport, MessageType::ReadResponse]
    }

    fn decode(
        &self,
        _definition: &Definition,
        event: &MessageEvent,
        _emit: &mut dyn FnMut(Payload),
        _options: &DeviceOptions,
    ) -> Option<Payload> {
        let mut payload = Payload::new();

        let raw_x = event.data.get("currentX").and_then(Value::as_u64);
        let raw_y = event.data.get("currentY").and_then(Value::as_u64);
        if let (Some(raw_x), Some(raw_y)) = (raw_x, raw_y) {
            let mut color = serde_json::Map::new();
            #[allow(clippy::cast_precision_loss)]
            color.insert(
                "x".to_owned(),
                round_to(raw_x as f64 / COLOR_SCALE, 4).into(),
            );
            #[allow(clippy::cast_precision_loss)]
            color.insert(
                "y".to_owned(),
                round_to(raw_y as f64 / COLOR_SCALE, 4).into(),
            );
            payload.insert("color", Value::Object(color));
        }

        if let Some(mireds) = event.data.get("colorTemperature").and_then(Value::as_u64) {
            payload.insert("color_temp", mireds);
        }

        if payload.is_empty() {
            None
        } else {
            Some(payload)
        }
    }
}
