//! Inbound protocol-stack events.
//!
//! The stack delivers one [`StackEvent`] at a time. Only
//! [`StackEvent::Message`] carries application state; the other variants
//! exist so the pipeline can observe (and ignore) network lifecycle
//! traffic without the stack filtering on its behalf.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::IeeeAddress;
use crate::device::Device;

/// Numeric category of device functionality in the protocol's data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterId(pub u16);

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Well-known cluster identifiers used by the standard catalog.
pub mod clusters {
    use super::ClusterId;

    pub const GEN_POWER_CFG: ClusterId = ClusterId(1);
    pub const GEN_ON_OFF: ClusterId = ClusterId(6);
    pub const GEN_LEVEL_CTRL: ClusterId = ClusterId(8);
    pub const GEN_MULTISTATE_INPUT: ClusterId = ClusterId(18);
    pub const LIGHTING_COLOR_CTRL: ClusterId = ClusterId(768);
    pub const MS_TEMPERATURE: ClusterId = ClusterId(1026);
    pub const MS_PRESSURE: ClusterId = ClusterId(1027);
    pub const MS_HUMIDITY: ClusterId = ClusterId(1029);
    pub const MS_OCCUPANCY: ClusterId = ClusterId(1030);
}

/// Kind of protocol message carried by a [`MessageEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageType {
    /// Unsolicited attribute report.
    AttributeReport,
    /// Response to an attribute read.
    ReadResponse,
    /// Raw cluster-specific frame.
    Raw,
    CommandOn,
    CommandOff,
    CommandToggle,
}

impl MessageType {
    /// Wire-style name, as used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AttributeReport => "attributeReport",
            Self::ReadResponse => "readResponse",
            Self::Raw => "raw",
            Self::CommandOn => "commandOn",
            Self::CommandOff => "commandOff",
            Self::CommandToggle => "commandToggle",
        }
    }

    /// High-frequency, low-signal message kinds that are logged at debug
    /// rather than warn when no converter matches.
    #[must_use]
    pub fn is_low_signal(self) -> bool {
        matches!(self, Self::ReadResponse | Self::Raw)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded protocol message received from a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// Source device.
    pub device: Device,
    /// Cluster the message belongs to.
    pub cluster: ClusterId,
    /// Kind of message.
    pub message_type: MessageType,
    /// Group the frame was addressed to, if any.
    pub group_id: Option<u16>,
    /// Signal quality of the received frame.
    pub linkquality: Option<u8>,
    /// Decoded attribute map (attribute name → value).
    pub data: serde_json::Value,
}

/// An event emitted by the protocol stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StackEvent {
    /// A message from a device — the only variant the pipeline translates.
    Message(MessageEvent),
    /// A device (re)joined the network.
    DeviceAnnounce { device: Device },
    /// A device left the network.
    DeviceLeave { address: IeeeAddress },
}
