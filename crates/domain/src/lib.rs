//! # meshbridge-domain
//!
//! Pure domain model for the meshbridge event-translation pipeline.
//!
//! ## Responsibilities
//! - Foundational types: IEEE addresses, publication ids, error conventions,
//!   timestamps
//! - Define **Devices** (radios on the mesh, as reported by the protocol stack)
//! - Define **Stack events** (inbound protocol messages and their metadata)
//! - Define **Payloads** (application-level state fragments and their merge
//!   semantics)
//! - Define the **Converter** contract and per-model **Definitions**
//! - Chromaticity → sRGB color conversion
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod address;
pub mod error;
pub mod id;
pub mod time;

pub mod color;
pub mod converter;
pub mod device;
pub mod event;
pub mod options;
pub mod payload;
pub mod publication;
