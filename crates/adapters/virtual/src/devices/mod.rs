//! Scripted virtual devices.

mod bulb;
mod button;
mod climate;

use meshbridge_domain::device::Device;
use meshbridge_domain::event::StackEvent;

use bulb::ColorBulb;
use button::MomentaryButton;
use climate::ClimateSensor;

/// A simulated device producing a deterministic event script.
pub enum VirtualDevice {
    Climate(ClimateSensor),
    Bulb(ColorBulb),
    Button(MomentaryButton),
}

impl VirtualDevice {
    #[must_use]
    pub fn climate_sensor() -> Self {
        Self::Climate(ClimateSensor::default())
    }

    #[must_use]
    pub fn color_bulb() -> Self {
        Self::Bulb(ColorBulb::default())
    }

    #[must_use]
    pub fn momentary_button() -> Self {
        Self::Button(MomentaryButton::default())
    }

    /// The stack-level device record.
    #[must_use]
    pub fn device(&self) -> Device {
        match self {
            Self::Climate(sensor) => sensor.device(),
            Self::Bulb(bulb) => bulb.device(),
            Self::Button(button) => button.device(),
        }
    }

    /// The next scripted event for this device.
    pub fn next_event(&mut self) -> StackEvent {
        match self {
            Self::Climate(sensor) => sensor.next_event(),
            Self::Bulb(bulb) => bulb.next_event(),
            Self::Button(button) => button.next_event(),
        }
    }
}
