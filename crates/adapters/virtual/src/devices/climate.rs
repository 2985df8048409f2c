//! Simulated climate sensor (`lumi.weather`).

use meshbridge_domain::address::IeeeAddress;
use meshbridge_domain::device::{Device, DeviceRole};
use meshbridge_domain::event::{MessageEvent, MessageType, StackEvent, clusters};
use serde_json::json;

const ADDRESS: IeeeAddress = IeeeAddress::new(0x0015_8d00_01e1_b2c3);
const LINKQUALITY: u8 = 84;

/// Cycles temperature, humidity and pressure reports with slowly
/// drifting values.
#[derive(Default)]
pub struct ClimateSensor {
    tick: u64,
}

impl ClimateSensor {
    #[must_use]
    pub fn device(&self) -> Device {
        Device::new(ADDRESS, DeviceRole::EndDevice)
            .with_model("lumi.weather")
            .with_manufacturer("LUMI")
    }

    pub fn next_event(&mut self) -> StackEvent {
        let tick = self.tick;
        self.tick += 1;

        let (cluster, data) = match tick % 3 {
            0 => (
                clusters::MS_TEMPERATURE,
                // 20.00 °C drifting upward in 0.25 °C steps, sawtooth.
                json!({"measuredValue": 2000 + i64::try_from(tick % 8).unwrap_or(0) * 25}),
            ),
            1 => (
                clusters::MS_HUMIDITY,
                json!({"measuredValue": 4000 + i64::try_from(tick % 5).unwrap_or(0) * 100}),
            ),
            _ => (clusters::MS_PRESSURE, json!({"measuredValue": 1013})),
        };

        StackEvent::Message(MessageEvent {
            device: self.device(),
            cluster,
            message_type: MessageType::AttributeReport,
            group_id: None,
            linkquality: Some(LINKQUALITY),
            data,
        })
    }
}
