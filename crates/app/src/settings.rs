//! Runtime configuration — TOML file with environment variable overrides.
//!
//! Looks for `meshbridge.toml` in the working directory (overridable via
//! `MESHBRIDGE_CONFIG`). Every field has a sensible default so the file
//! is optional. Environment variables take precedence over file values.

use std::collections::HashMap;

use serde::Deserialize;

use meshbridge_domain::address::IeeeAddress;
use meshbridge_domain::options::DeviceOptions;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dual-publish mode: momentary keys (`action`, `click`) are reset
    /// with an extra publish, for integrations that key off value
    /// changes.
    pub homeassistant: bool,
    /// Advanced pipeline toggles.
    pub advanced: AdvancedSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
    /// Options applied to every device.
    pub device_options: DeviceOptions,
    /// Per-device option overrides, keyed by IEEE address.
    pub devices: HashMap<IeeeAddress, DeviceOptions>,
}

/// Advanced pipeline toggles.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdvancedSettings {
    /// Annotate publications with the milliseconds elapsed since the
    /// device's previous one.
    pub elapsed: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "meshbridged=info,meshbridge=info".to_string(),
        }
    }
}

impl Settings {
    /// Load configuration from `meshbridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed, or if a
    /// configured debounce window is not a finite, non-negative number.
    pub fn load() -> Result<Self, SettingsError> {
        let path = std::env::var("MESHBRIDGE_CONFIG")
            .unwrap_or_else(|_| "meshbridge.toml".to_string());
        let mut settings = Self::from_file(&path)?;
        settings.apply_env_overrides();
        settings.validate()?;
        Ok(settings)
    }

    fn from_file(path: &str) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(SettingsError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(SettingsError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MESHBRIDGE_HOMEASSISTANT") {
            if let Ok(flag) = val.parse() {
                self.homeassistant = flag;
            }
        }
        if let Ok(val) = std::env::var("MESHBRIDGE_ELAPSED") {
            if let Ok(flag) = val.parse() {
                self.advanced.elapsed = flag;
            }
        }
        if let Ok(val) = std::env::var("MESHBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let windows = self
            .devices
            .values()
            .chain(std::iter::once(&self.device_options))
            .filter_map(|options| options.debounce);
        for window in windows {
            if !window.is_finite() || window < 0.0 {
                return Err(SettingsError::Validation(format!(
                    "debounce must be a non-negative number of seconds, got {window}"
                )));
            }
        }
        Ok(())
    }

    /// Merged options for one device: per-device overrides on top of the
    /// global `device_options`.
    #[must_use]
    pub fn options_for(&self, address: IeeeAddress) -> DeviceOptions {
        self.devices
            .get(&address)
            .map_or_else(|| self.device_options.clone(), |overrides| {
                overrides.merged_with(&self.device_options)
            })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
