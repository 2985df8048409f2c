//! Per-device options handed to converters and the publish path.
//!
//! Options come from configuration in two layers: global defaults that
//! apply to every device, and per-device overrides keyed by address.
//! [`DeviceOptions::merged_with`] combines them key-wise, the device
//! layer winning.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options for one device, merged from global and per-device configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceOptions {
    /// Human-readable name used by consumers; no pipeline semantics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Quiet window in seconds for the debounce aggregator; absent or
    /// zero means publish immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce: Option<f64>,
    /// Free-form converter options (e.g. `temperature_precision`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeviceOptions {
    /// Overlay `self` on top of `base`: every key present here wins,
    /// everything else falls through to `base`.
    #[must_use]
    pub fn merged_with(&self, base: &DeviceOptions) -> DeviceOptions {
        let mut extra = base.extra.clone();
        for (key, value) in &self.extra {
            extra.insert(key.clone(), value.clone());
        }
        DeviceOptions {
            friendly_name: self
                .friendly_name
                .clone()
                .or_else(|| base.friendly_name.clone()),
            debounce: self.debounce.or(base.debounce),
            extra,
        }
    }

    /// The debounce quiet window, when one is configured and positive.
    #[must_use]
    pub fn debounce_window(&self) -> Option<Duration> {
        self.debounce
            .filter(|secs| *secs > 0.0)
            .map(Duration::from_secs_f64)
    }

    /// Read a free-form option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_default_to_no_options() {
        let options = DeviceOptions::default();
        assert!(options.friendly_name.is_none());
        assert!(options.debounce_window().is_none());
        assert!(options.extra.is_empty());
    }

    #[test]
    fn should_expose_positive_debounce_as_window() {
        let options = DeviceOptions {
            debounce: Some(1.5),
            ..DeviceOptions::default()
        };
        assert_eq!(options.debounce_window(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn should_treat_zero_debounce_as_disabled() {
        let options = DeviceOptions {
            debounce: Some(0.0),
            ..DeviceOptions::default()
        };
        assert!(options.debounce_window().is_none());
    }

    #[test]
    fn should_merge_with_device_layer_winning() {
        let global: DeviceOptions =
            serde_json::from_value(json!({"debounce": 2.0, "temperature_precision": 1}))
                .unwrap();
        let device: DeviceOptions =
            serde_json::from_value(json!({"friendly_name": "kitchen", "debounce": 0.5}))
                .unwrap();

        let merged = device.merged_with(&global);
        assert_eq!(merged.friendly_name.as_deref(), Some("kitchen"));
        assert_eq!(merged.debounce, Some(0.5));
        assert_eq!(merged.get("temperature_precision"), Some(&json!(1)));
    }

    #[test]
    fn should_merge_free_form_keys_with_device_layer_winning() {
        let global: DeviceOptions =
            serde_json::from_value(json!({"occupancy_timeout": 90, "temperature_precision": 2}))
                .unwrap();
        let device: DeviceOptions =
            serde_json::from_value(json!({"temperature_precision": 1})).unwrap();

        let merged = device.merged_with(&global);
        assert_eq!(merged.get("temperature_precision"), Some(&json!(1)));
        assert_eq!(merged.get("occupancy_timeout"), Some(&json!(90)));
    }

    #[test]
    fn should_deserialize_free_form_keys_into_extra() {
        let options: DeviceOptions =
            serde_json::from_value(json!({"debounce": 1.0, "custom": true})).unwrap();
        assert_eq!(options.debounce, Some(1.0));
        assert_eq!(options.get("custom"), Some(&json!(true)));
    }
}
