//! # meshbridged — meshbridge daemon
//!
//! Composition root that wires all adapters together and runs the event
//! loop.
//!
//! ## Responsibilities
//! - Load configuration (`meshbridge.toml`, env overrides)
//! - Initialize tracing
//! - Construct the catalog, the in-process bus and the dispatcher
//! - Spawn the (virtual) protocol stack and a publication logger
//! - Drive the single-threaded event loop: one stack event at a time,
//!   run to completion
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no pipeline logic belongs here.

use std::time::Duration;

use anyhow::Context as _;
use tokio::sync::mpsc;
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use meshbridge_adapter_virtual::VirtualStack;
use meshbridge_app::bus::InProcessBus;
use meshbridge_app::dispatcher::Dispatcher;
use meshbridge_app::settings::Settings;
use meshbridge_catalog::Catalog;

/// Interval between scripted reports from the virtual stack.
const VIRTUAL_STACK_INTERVAL: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load configuration")?;

    let filter = tracing_subscriber::EnvFilter::try_new(&settings.logging.filter)
        .context("invalid logging filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = Catalog::standard();
    tracing::info!(models = catalog.len(), "converter catalog loaded");

    let bus = InProcessBus::new(256);
    spawn_publication_logger(&bus);

    let dispatcher = Dispatcher::new(bus, catalog, settings);

    let (sender, mut events) = mpsc::channel(32);
    VirtualStack::spawn(sender, VIRTUAL_STACK_INTERVAL);
    tracing::info!("virtual stack started");

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(event) => dispatcher.handle_event(event).await,
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Log every publication leaving the bus.
fn spawn_publication_logger(bus: &InProcessBus) {
    let mut publications = BroadcastStream::new(bus.subscribe());
    tokio::spawn(async move {
        while let Some(publication) = publications.next().await {
            match publication {
                Ok(publication) => tracing::info!(
                    address = %publication.address,
                    payload = %serde_json::to_string(&publication.payload)
                        .unwrap_or_default(),
                    "state published"
                ),
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "publication logger lagging");
                }
            }
        }
    });
}
