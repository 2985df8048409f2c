//! Simulated momentary button (`lumi.sensor_switch.aq2`).

use meshbridge_domain::address::IeeeAddress;
use meshbridge_domain::device::{Device, DeviceRole};
use meshbridge_domain::event::{MessageEvent, MessageType, StackEvent, clusters};
use serde_json::json;

const ADDRESS: IeeeAddress = IeeeAddress::new(0x0015_8d00_02a7_44f1);
const LINKQUALITY: u8 = 64;

/// Multistate gesture script: mostly single clicks with the occasional
/// multi-click.
const GESTURES: &[u64] = &[1, 1, 2, 1, 3, 1, 4];

/// Emits multistate click gestures.
#[derive(Default)]
pub struct MomentaryButton {
    tick: u64,
}

impl MomentaryButton {
    #[must_use]
    pub fn device(&self) -> Device {
        Device::new(ADDRESS, DeviceRole::EndDevice)
            .with_model("lumi.sensor_switch.aq2")
            .with_manufacturer("LUMI")
    }

    pub fn next_event(&mut self) -> StackEvent {
        let gesture = GESTURES[usize::try_from(self.tick).unwrap_or(0) % GESTURES.len()];
        self.tick += 1;

        StackEvent::Message(MessageEvent {
            device: self.device(),
            cluster: clusters::GEN_MULTISTATE_INPUT,
            message_type: MessageType::AttributeReport,
            group_id: None,
            linkquality: Some(LINKQUALITY),
            data: json!({"presentValue": gesture}),
        })
    }
}
