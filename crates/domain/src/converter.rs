//! Converter contract — the per-device decoding capability.
//!
//! A converter translates protocol messages of one cluster into
//! application-level payload fragments. The set of concrete converters
//! lives in the catalog crate; the pipeline only sees this trait and the
//! per-model [`Definition`] that orders them.

use std::fmt;

use crate::event::{ClusterId, MessageEvent, MessageType};
use crate::options::DeviceOptions;
use crate::payload::Payload;

/// A capability unit decoding one cluster's messages into state fragments.
///
/// Most converters are pure: they read the event's attribute map and
/// return a fragment. Stateful converters with multi-event semantics
/// (e.g. press/release click counting) may instead — or additionally —
/// hand payloads to `emit`, which routes them through the same publish
/// path as returned fragments.
pub trait Converter: Send + Sync {
    /// Cluster this converter handles.
    fn cluster(&self) -> ClusterId;

    /// Message types this converter handles.
    fn types(&self) -> &'static [MessageType];

    /// Decode an event into a payload fragment, or nothing when the event
    /// carries no contribution for this converter.
    fn decode(
        &self,
        definition: &Definition,
        event: &MessageEvent,
        emit: &mut dyn FnMut(Payload),
        options: &DeviceOptions,
    ) -> Option<Payload>;

    /// Whether this converter applies to the given cluster and type.
    fn matches(&self, cluster: ClusterId, message_type: MessageType) -> bool {
        self.cluster() == cluster && self.types().contains(&message_type)
    }
}

/// Static descriptor of a supported device model: identity plus the
/// ordered list of converters that decode its traffic.
///
/// Definitions are immutable at runtime and owned by the catalog.
pub struct Definition {
    model: &'static str,
    vendor: &'static str,
    description: &'static str,
    converters: Vec<Box<dyn Converter>>,
}

impl Definition {
    /// Create a definition with its converter list in decode order.
    #[must_use]
    pub fn new(
        model: &'static str,
        vendor: &'static str,
        description: &'static str,
        converters: Vec<Box<dyn Converter>>,
    ) -> Self {
        Self {
            model,
            vendor,
            description,
            converters,
        }
    }

    /// Model identifier as reported by the device interview.
    #[must_use]
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Vendor name.
    #[must_use]
    pub fn vendor(&self) -> &'static str {
        self.vendor
    }

    /// Human-readable product description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Converters in decode order.
    #[must_use]
    pub fn converters(&self) -> &[Box<dyn Converter>] {
        &self.converters
    }

    /// Converters applicable to the given cluster and message type, in
    /// decode order.
    pub fn matching_converters(
        &self,
        cluster: ClusterId,
        message_type: MessageType,
    ) -> impl Iterator<Item = &dyn Converter> {
        self.converters
            .iter()
            .map(AsRef::as_ref)
            .filter(move |converter| converter.matches(cluster, message_type))
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("model", &self.model)
            .field("vendor", &self.vendor)
            .field("converters", &self.converters.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::clusters;

    struct StubConverter {
        cluster: ClusterId,
        types: &'static [MessageType],
    }

    impl Converter for StubConverter {
        fn cluster(&self) -> ClusterId {
            self.cluster
        }

        fn types(&self) -> &'static [MessageType] {
            self.types
        }

        fn decode(
            &self,
            _definition: &Definition,
            _event: &MessageEvent,
            _emit: &mut dyn FnMut(Payload),
            _options: &DeviceOptions,
        ) -> Option<Payload> {
            None
        }
    }

    fn definition() -> Definition {
        Definition::new(
            "test.model",
            "Test Vendor",
            "Test device",
            vec![
                Box::new(StubConverter {
                    cluster: clusters::GEN_ON_OFF,
                    types: &[MessageType::AttributeReport, MessageType::ReadResponse],
                }),
                Box::new(StubConverter {
                    cluster: clusters::MS_TEMPERATURE,
                    types: &[MessageType::AttributeReport],
                }),
            ],
        )
    }

    #[test]
    fn should_match_on_cluster_and_type() {
        let def = definition();
        let converter = &def.converters()[0];
        assert!(converter.matches(clusters::GEN_ON_OFF, MessageType::AttributeReport));
        assert!(converter.matches(clusters::GEN_ON_OFF, MessageType::ReadResponse));
        assert!(!converter.matches(clusters::GEN_ON_OFF, MessageType::Raw));
        assert!(!converter.matches(clusters::GEN_LEVEL_CTRL, MessageType::AttributeReport));
    }

    #[test]
    fn should_select_matching_converters_in_order() {
        let def = definition();
        let matching: Vec<_> = def
            .matching_converters(clusters::MS_TEMPERATURE, MessageType::AttributeReport)
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].cluster(), clusters::MS_TEMPERATURE);
    }

    #[test]
    fn should_select_none_when_nothing_matches() {
        let def = definition();
        let matching: Vec<_> = def
            .matching_converters(clusters::MS_OCCUPANCY, MessageType::AttributeReport)
            .collect();
        assert!(matching.is_empty());
    }

    #[test]
    fn should_expose_identity_fields() {
        let def = definition();
        assert_eq!(def.model(), "test.model");
        assert_eq!(def.vendor(), "Test Vendor");
        assert_eq!(def.description(), "Test device");
    }
}
