//! Simulated color bulb (`LCT001`).

use meshbridge_domain::address::IeeeAddress;
use meshbridge_domain::device::{Device, DeviceRole};
use meshbridge_domain::event::{ClusterId, MessageEvent, MessageType, StackEvent, clusters};
use serde_json::json;

const ADDRESS: IeeeAddress = IeeeAddress::new(0x0017_8801_04e4_5517);
const LINKQUALITY: u8 = 110;

/// Raw (currentX, currentY) presets the bulb cycles through: warm white,
/// blue-ish and green-ish chromaticities.
const COLOR_PRESETS: &[(u16, u16)] = &[(19661, 19661), (32768, 21845), (13107, 39321)];

/// Cycles on/off, brightness and chromaticity reports.
#[derive(Default)]
pub struct ColorBulb {
    tick: u64,
}

impl ColorBulb {
    #[must_use]
    pub fn device(&self) -> Device {
        Device::new(ADDRESS, DeviceRole::Router)
            .with_model("LCT001")
            .with_manufacturer("Philips")
    }

    pub fn next_event(&mut self) -> StackEvent {
        let tick = self.tick;
        self.tick += 1;

        let (cluster, data): (ClusterId, serde_json::Value) = match tick % 3 {
            0 => (clusters::GEN_ON_OFF, json!({"onOff": 1})),
            1 => (
                clusters::GEN_LEVEL_CTRL,
                json!({"currentLevel": 120 + (tick % 4) * 30}),
            ),
            _ => {
                let preset = usize::try_from(tick).unwrap_or(0) % COLOR_PRESETS.len();
                let (x, y) = COLOR_PRESETS[preset];
                (
                    clusters::LIGHTING_COLOR_CTRL,
                    json!({"currentX": x, "currentY": y}),
                )
            }
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
