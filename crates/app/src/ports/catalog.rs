//! Converter catalog port — decoding rules looked up by device model.

use std::sync::Arc;

use meshbridge_domain::converter::Definition;

/// Lookup of the decoding rules for a device model.
///
/// The catalog is immutable at runtime; returning `None` means the
/// hardware is unsupported and its traffic is dropped by the filter.
pub trait DefinitionCatalog: Send + Sync {
    /// The definition for `model`, if the model is supported.
    fn definition(&self, model: &str) -> Option<Arc<Definition>>;
}
