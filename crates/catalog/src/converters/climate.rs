//! Converters for environmental measurement clusters.
//!
//! Measurement clusters report hundredths of a unit as signed integers;
//! the converters scale them back and round. Precision is configurable
//! per device through the `temperature_precision` / `humidity_precision`
//! options.

use meshbridge_domain::converter::{Converter, Definition};
use meshbridge_domain::event::{ClusterId, MessageEvent, MessageType, clusters};
use meshbridge_domain::options::DeviceOptions;
use meshbridge_domain::payload::Payload;
use serde_json::Value;

use super::round_to;

const DEFAULT_PRECISION: u32 = 2;

/// Decimal precision for a measurement, from options or the default.
fn precision(options: &DeviceOptions, key: &str) -> u32 {
    options
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|raw| u32::try_from(raw).ok())
        .unwrap_or(DEFAULT_PRECISION)
}

/// Read a cluster's `measuredValue` as a float.
#[allow(clippy::cast_precision_loss)]
fn measured_value(event: &MessageEvent) -> Option<f64> {
    event
        .data
        .get("measuredValue")
        .and_then(Value::as_i64)
        .map(|raw| raw as f64)
}

/// `msTemperatureMeasurement` reports → `{temperature}` in °C.
pub struct TemperatureReport;

impl Converter for TemperatureReport {
    fn cluster(&self) -> ClusterId {
        clusters::MS_TEMPERATURE
    }

    fn types(&self) -> &'static [MessageType] {
        &[MessageType::AttributeReport, MessageType::ReadResponse]
    }

    fn decode(
        &self,
        _definition: &Definition,
        event: &MessageEvent,
        _emit: &mut dyn FnMut(Payload),
        options: &DeviceOptions,
    ) -> Option<Payload> {
        let celsius = measured_value(event)? / 100.0;
        let mut payload = Payload::new();
        payload.insert(
            "temperature",
            round_to(celsius, precision(options, "temperature_precision")),
        );
        Some(payload)
    }
}

/// `msRelativeHumidity` reports → `{humidity}` in %.
pub struct HumidityReport;

impl Converter for HumidityReport {
    fn cluster(&self) -> ClusterId {
        clusters::MS_HUMIDITY
    }

    fn types(&self) -> &'static [MessageType] {
        &[MessageType::AttributeReport, MessageType::ReadResponse]
    }

    fn decode(
        &self,
        _definition: &Definition,
        event: &MessageEvent,
        _emit: &mut dyn FnMut(Payload),
        options: &DeviceOptions,
    ) -> Option<Payload> {
        let percent = measured_value(event)? / 100.0;
        let mut payload = Payload::new();
        payload.insert(
            "humidity",
            round_to(percent, precision(options, "humidity_precision")),
        );
        Some(payload)
    }
}

/// `msPressureMeasurement` reports → `{pressure}` in hPa.
pub struct PressureReport;

impl Converter for PressureReport {
    fn cluster(&self) -> ClusterId {
        clusters::MS_PRESSURE
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
        let hectopascal = measured_value(event)?;
        let mut payload = Payload::new();
        payload.insert("pressure", hectopascal);
        Some(payload)
    }
}
