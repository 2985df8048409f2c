//! Device — a radio on the mesh network, as reported by the protocol stack.
//!
//! The protocol stack owns and mutates devices (pairing, interview,
//! routing); the pipeline only reads them off inbound events.

use serde::{Deserialize, Serialize};

use crate::address::IeeeAddress;

/// Vendor families whose devices re-emit neighbour traffic as
/// group-addressed router hops. Matched by manufacturer-name prefix.
const RELAY_VENDORS: &[&str] = &["IKEA of Sweden"];

/// Network role of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceRole {
    /// The network coordinator — forms the network, never application state.
    Coordinator,
    /// A mains-powered device that routes traffic for others.
    Router,
    /// A (usually battery-powered) leaf device.
    EndDevice,
}

/// A device as known to the protocol stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Unique hardware address.
    pub address: IeeeAddress,
    /// Model identifier reported during interview; `None` until known.
    pub model: Option<String>,
    /// Manufacturer name reported during interview.
    pub manufacturer: Option<String>,
    /// Network role.
    pub role: DeviceRole,
    /// Interview still in progress.
    pub interviewing: bool,
}

impl Device {
    /// Create a device with no interview data yet.
    #[must_use]
    pub fn new(address: IeeeAddress, role: DeviceRole) -> Self {
        Self {
            address,
            model: None,
            manufacturer: None,
            role,
            interviewing: false,
        }
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the manufacturer name.
    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Mark the device as mid-interview.
    #[must_use]
    pub fn with_interviewing(mut self, interviewing: bool) -> Self {
        self.interviewing = interviewing;
        self
    }

    /// Whether this device is the network coordinator.
    #[must_use]
    pub fn is_coordinator(&self) -> bool {
        self.role == DeviceRole::Coordinator
    }

    /// Whether this device belongs to a vendor family known to re-transmit
    /// neighbour traffic as group-addressed frames. Messages from such
    /// devices carrying a non-zero group id are forwarding artifacts, not
    /// direct reports.
    #[must_use]
    pub fn relays_group_traffic(&self) -> bool {
        self.manufacturer
            .as_deref()
            .is_some_and(|name| RELAY_VENDORS.iter().any(|vendor| name.starts_with(vendor)))
    }
}
