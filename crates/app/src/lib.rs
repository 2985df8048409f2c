//! # meshbridge-app
//!
//! Application layer — the event-translation pipeline and its **port
//! definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `PublishSink` — deliver a device's translated state to subscribers
//!   - `DefinitionCatalog` — look up decoding rules by device model
//! - The pipeline itself:
//!   - `filter` — admit or reject inbound protocol messages
//!   - `Dispatcher` — select converters, merge fragments, publish
//!   - `DebounceAggregator` — collapse per-device bursts into one publish
//!   - `ElapsedTracker` — inter-event gap annotation
//! - Provide **in-process infrastructure** (`InProcessBus`) that doesn't
//!   need IO
//! - Runtime configuration (`Settings`)
//!
//! ## Dependency rule
//! Depends on `meshbridge-domain` only (plus `tokio::sync`/`tokio::time`
//! for channels and timers). Never imports adapter crates. Adapters depend
//! on *this* crate, not the reverse.

pub mod bus;
pub mod debounce;
pub mod dispatcher;
pub mod elapsed;
pub mod filter;
pub mod ports;
pub mod settings;
