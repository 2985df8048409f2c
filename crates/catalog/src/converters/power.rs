//! Converter for the power configuration cluster.

use meshbridge_domain::converter::{Converter, Definition};
use meshbridge_domain::event::{ClusterId, MessageEvent, MessageType, clusters};
use meshbridge_domain::options::DeviceOptions;
use meshbridge_domain::payload::Payload;
use serde_json::Value;

/// `genPowerCfg` reports → `{battery}` in % and/or `{voltage}` in volts.
///
/// `batteryPercentageRemaining` comes in half-percent steps and
/// `batteryVoltage` in 100 mV steps.
pub struct BatteryReport;

impl Converter for BatteryReport {
    fn cluster(&self) -> ClusterId {
        clusters::GEN_POWER_CFG
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

        if let Some(half_percent) = event
            .data
            .get("batteryPercentageRemaining")
            .and_then(Value::as_u64)
        {
            payload.insert("battery", half_percent / 2);
        }

        #[allow(clippy::cast_precision_loss)]
        if let Some(deci_volt) = event.data.get("batteryVoltage").and_then(Value::as_u64) {
            payload.insert("voltage", deci_volt as f64 / 10.0);
        }

        if payload.is_empty() {
            None
        } else {
            Some(payload)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{definition, event, payload};
    use super::*;
    use serde_json::json;

    fn decode(data: serde_json::Value) -> Option<Payload> {
        let definition = definition();
        let event = event(clusters::GEN_POWER_CFG, MessageType::AttributeReport, data);
        BatteryReport.decode(&definition, &event, &mut |_| {}, &DeviceOptions::default())
    }

    #[test]
    fn should_scale_battery_percentage_from_half_percent_steps() {
        let fragment = decode(json!({"batteryPercentageRemaining": 190})).unwrap();
        assert_eq!(fragment, payload(json!({"battery": 95})));
    }

    #[test]
    fn should_scale_voltage_from_deci_volt_steps() {
        let fragment = decode(json!({"batteryVoltage": 31})).unwrap();
        assert_eq!(fragment, payload(json!({"voltage": 3.1})));
    }

    #[test]
    fn should_decode_both_attributes_together() {
        let fragment =
            decode(json!({"batteryPercentageRemaining": 200, "batteryVoltage": 30})).unwrap();
        assert_eq!(fragment, payload(json!({"battery": 100, "voltage": 3.0})));
    }

    #[test]
    fn should_contribute_nothing_without_battery_attributes() {
        assert!(decode(json!({"other": 5})).is_none());
    }
}
