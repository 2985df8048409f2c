//! Converter for the occupancy sensing cluster.

use meshbridge_domain::converter::{Converter, Definition};
use meshbridge_domain::event::{ClusterId, MessageEvent, MessageType, clusters};
use meshbridge_domain::options::DeviceOptions;
use meshbridge_domain::payload::Payload;
use serde_json::Value;

/// `msOccupancySensing` reports → `{occupancy}`.
///
/// Only bit 0 of the occupancy bitmap is meaningful; the remaining bits
/// are sensor-type metadata.
pub struct OccupancyReport;

impl Converter for OccupancyReport {
    fn cluster(&self) -> ClusterId {
        clusters::MS_OCCUPANCY
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
        let bitmap = event.data.get("occupancy").and_then(Value::as_u64)?;
        let mut payload = Payload::new();
        payload.insert("occupancy", (bitmap & 1) == 1);
        Some(payload)
    }
}
