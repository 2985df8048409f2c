//! # meshbridge-adapter-virtual
//!
//! Virtual adapter — a simulated mesh stack that emits scripted protocol
//! events, for demos and end-to-end tests without radio hardware.
//!
//! ## Provided devices
//!
//! | Device | Model | Traffic |
//! |--------|-------|---------|
//! | Climate sensor | `lumi.weather` | temperature / humidity / pressure reports |
//! | Color bulb | `LCT001` | on/off, brightness and chromaticity reports |
//! | Momentary button | `lumi.sensor_switch.aq2` | multistate click gestures |
//!
//! ## Dependency rule
//!
//! Depends on `meshbridge-domain` only — it plays the role of the
//! protocol stack, which sits *outside* the application's ports.

mod devices;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use meshbridge_domain::event::StackEvent;

use devices::VirtualDevice;

/// A simulated mesh stack cycling through its devices, one report per
/// tick.
pub struct VirtualStack {
    devices: Vec<VirtualDevice>,
    next: usize,
}

impl Default for VirtualStack {
    fn default() -> Self {
        Self {
            devices: vec![
                VirtualDevice::climate_sensor(),
                VirtualDevice::color_bulb(),
                VirtualDevice::momentary_button(),
            ],
            next: 0,
        }
    }
}

impl VirtualStack {
    /// Announcement events for every simulated device, as a real stack
    /// would emit on startup.
    #[must_use]
    pub fn announcements(&self) -> Vec<StackEvent> {
        self.devices
            .iter()
            .map(|device| StackEvent::DeviceAnnounce {
                device: device.device(),
            })
            .collect()
    }

    /// Produce the next scripted event, round-robin across devices.
    pub fn next_event(&mut self) -> StackEvent {
        let idx = self.next % self.devices.len();
        let device = &mut self.devices[idx];
        self.next += 1;
        device.next_event()
    }

    /// Spawn the emit loop: announcements first, then one report per
    /// `interval` tick. Stops when the receiver side is dropped.
    pub fn spawn(sender: mpsc::Sender<StackEvent>, interval: Duration) -> JoinHandle<()> {
        let mut stack = Self::default();
        tokio::spawn(async move {
            for announcement in stack.announcements() {
                if sender.send(announcement).await.is_err() {
                    return;
                }
            }
            loop {
                tokio::time::sleep(interval).await;
                let event = stack.next_event();
                tracing::debug!(?event, "virtual stack emitting event");
                if sender.send(event).await.is_err() {
                    return;
                }
            }
        })
    }
}
