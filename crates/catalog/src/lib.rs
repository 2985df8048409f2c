//! # meshbridge-catalog
//!
//! Converter catalog — the per-model decoding rules that turn protocol
//! messages into application-level state payloads.
//!
//! ## Supported models
//!
//! | Model | Vendor | State |
//! |-------|--------|-------|
//! | `lumi.sensor_ht` | Xiaomi | temperature, humidity, battery |
//! | `lumi.weather` | Xiaomi | temperature, humidity, pressure, battery |
//! | `lumi.sensor_switch` | Xiaomi | click (press/release), battery |
//! | `lumi.sensor_switch.aq2` | Xiaomi | click (multistate), battery |
//! | `lumi.sensor_motion` | Xiaomi | occupancy, battery |
//! | `LCT001` | Philips | state, brightness, color |
//! | `TRADFRI bulb E27 WS opal 980lm` | IKEA of Sweden | state, brightness, color temperature |
//!
//! Adding support for a new device is a new [`Definition`] entry in
//! [`Catalog::standard`] — no pipeline changes.
//!
//! ## Dependency rule
//!
//! Depends on `meshbridge-app` (port traits) and `meshbridge-domain` only.
//!
//! [`Definition`]: meshbridge_domain::converter::Definition

pub mod converters;
mod registry;

pub use registry::Catalog;
