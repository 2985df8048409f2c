//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the pipeline and the outside world.
//! They are defined here (in `app`) so that both the pipeline and the
//! adapter layer can depend on them without creating circular
//! dependencies.

pub mod catalog;
pub mod sink;

pub use catalog::DefinitionCatalog;
pub use sink::PublishSink;
