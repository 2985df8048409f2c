//! Converter dispatcher — the heart of the translation pipeline.
//!
//! For each admitted message the dispatcher selects the applicable
//! converters, runs them in definition order, merges their fragments
//! (last-writer-wins) and routes the result through the shared publish
//! path: linkquality and elapsed annotation, color enrichment, then
//! either an immediate sink publish or the debounce aggregator.

use std::sync::Arc;

use meshbridge_domain::address::IeeeAddress;
use meshbridge_domain::color;
use meshbridge_domain::converter::Converter;
use meshbridge_domain::event::{MessageEvent, StackEvent};
use meshbridge_domain::options::DeviceOptions;
use meshbridge_domain::payload::Payload;

use crate::debounce::DebounceAggregator;
use crate::elapsed::ElapsedTracker;
use crate::filter;
use crate::ports::{DefinitionCatalog, PublishSink};
use crate::settings::Settings;

/// Payload keys describing momentary events, reset to `""` by the
/// dual-publish mode after each immediate publish.
const MOMENTARY_KEYS: &[&str] = &["action", "click"];

/// Translates admitted protocol messages into state publications.
pub struct Dispatcher<S, C> {
    sink: Arc<S>,
    catalog: C,
    settings: Settings,
    debounce: DebounceAggregator<Arc<S>>,
    elapsed: ElapsedTracker,
}

impl<S, C> Dispatcher<S, C>
where
    S: PublishSink + 'static,
    C: DefinitionCatalog,
{
    #[must_use]
    pub fn new(sink: S, catalog: C, settings: Settings) -> Self {
        let sink = Arc::new(sink);
        let debounce = DebounceAggregator::new(Arc::clone(&sink));
        Self {
            sink,
            catalog,
            settings,
            debounce,
            elapsed: ElapsedTracker::new(),
        }
    }

    /// Handle one protocol-stack event to completion.
    ///
    /// Only message events are translated; network lifecycle events are
    /// traced and dropped.
    pub async fn handle_event(&self, event: StackEvent) {
        match event {
            StackEvent::Message(message) => self.handle_message(message).await,
            other => tracing::trace!(event = ?other, "ignoring non-message stack event"),
        }
    }

    async fn handle_message(&self, event: MessageEvent) {
        let definition = event
            .device
            .model
            .as_deref()
            .and_then(|model| self.catalog.definition(model));

        if !filter::admit(&event, definition.as_deref()) {
            return;
        }
        let Some(definition) = definition else {
            return;
        };

        let matching: Vec<&dyn Converter> = definition
            .matching_converters(event.cluster, event.message_type)
            .collect();

        if matching.is_empty() {
            if event.message_type.is_low_signal() {
                tracing::debug!(
                    model = definition.model(),
                    cluster = %event.cluster,
                    message_type = %event.message_type,
                    data = %event.data,
                    "no converter available"
                );
            } else {
                tracing::warn!(
                    model = definition.model(),
                    cluster = %event.cluster,
                    message_type = %event.message_type,
                    data = %event.data,
                    "no converter available, please report the message data"
                );
            }
            return;
        }

        let options = self.settings.options_for(event.device.address);
        let mut direct = Vec::new();
        let mut accumulated = Payload::new();

        for converter in matching {
            let mut emit = |payload: Payload| direct.push(payload);
            if let Some(fragment) = converter.decode(&definition, &event, &mut emit, &options) {
                accumulated.merge(fragment);
            }
        }

        for payload in direct {
            self.publish(&event, &options, payload).await;
        }
        if !accumulated.is_empty() {
            self.publish(&event, &options, accumulated).await;
        }
    }

    /// Shared publish path: annotate, enrich, then deliver — immediately
    /// or through the debounce aggregator.
    async fn publish(&self, event: &MessageEvent, options: &DeviceOptions, mut payload: Payload) {
        let address = event.device.address;

        if let Some(linkquality) = event.linkquality {
            payload.insert("linkquality", linkquality);
        }

        if self.settings.advanced.elapsed {
            if let Some(gap) = self.elapsed.touch(address) {
                payload.insert(
                    "elapsed",
                    u64::try_from(gap.as_millis()).unwrap_or(u64::MAX),
                );
            }
        }

        color::enrich(&mut payload);

        if let Some(window) = options.debounce_window() {
            self.debounce.accumulate(address, payload, window);
            return;
        }

        // Momentary keys are reset after the payload itself so consumers
        // keying off value changes see the event end.
        let resets: Vec<&str> = if self.settings.homeassistant {
            MOMENTARY_KEYS
                .iter()
                .copied()
                .filter(|key| payload.contains_key(key))
                .collect()
        } else {
            Vec::new()
        };

        self.send(address, payload).await;

        for key in resets {
            let mut reset = Payload::new();
            reset.insert(key, "");
            self.send(address, reset).await;
        }
    }

    async fn send(&self, address: IeeeAddress, payload: Payload) {
        if let Err(err) = self.sink.publish(address, payload).await {
            tracing::warn!(%err, %address, "failed to publish state");
        }
    }
}
