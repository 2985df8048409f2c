//! Concrete converters, grouped by concern.
//!
//! Each converter decodes one cluster's attribute reports into a payload
//! fragment. Converters are pure unless the device's semantics span
//! multiple messages (see [`PressReleaseClick`]).

mod action;
mod climate;
mod lighting;
mod occupancy;
mod power;

pub use action::{MultistateAction, PressReleaseClick};
pub use climate::{HumidityReport, PressureReport, TemperatureReport};
pub use lighting::{BrightnessReport, ColorReport, OnOffReport};
pub use occupancy::OccupancyReport;
pub use power::BatteryReport;

use serde_json::Value;

/// Interpret a reported attribute as a boolean flag (bool or 0/1 number).
fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(_) => value.as_u64().map(|raw| raw != 0),
        _ => None,
    }
}

/// Round to a fixed number of decimals.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = f64::from(10_u32.pow(decimals));
    (value * factor).round() / factor
}


#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for converter tests.

    use meshbridge_domain::address::IeeeAddress;
    use meshbridge_domain::converter::Definition;
    use meshbridge_domain::device::{Device, DeviceRole};
    use meshbridge_domain::event::{ClusterId, MessageEvent, MessageType};
    use meshbridge_domain::payload::Payload;

    pub fn device() -> Device {
        Device::new(IeeeAddress::new(0x0015_8d00_01e1_b2c3), DeviceRole::EndDevice)
            .with_model("test.model")
    }

    pub fn event(
        cluster: ClusterId,
        message_type: MessageType,
        data: serde_json::Value,
    ) -> MessageEvent {
        MessageEvent {
            device: device(),
            cluster,
            message_type,
            group_id: None,
            linkquality: None,
            data,
        }
    }

    pub fn definition() -> Definition {
        Definition::new("test.model", "Test Vendor", "Test device", Vec::new())
    }

    pub fn payload(value: serde_json::Value) -> Payload {
        Payload::try_from(value).unwrap()
    }
}
