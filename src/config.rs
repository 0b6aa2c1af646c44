//! Configuration management
//!
//! Config file is `config.toml` next to the executable (or the current
//! directory during development). Missing or malformed config falls back to
//! defaults with a warning; the CLI can override the interesting fields.

use crate::constants::{DEFAULT_BAUD_RATE, DEFAULT_IDLE_TIMEOUT_TICKS, DEFAULT_POLL_INTERVAL_MS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

// =============================================================================
// Device Configuration
// =============================================================================

/// USB device detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Display name for the device
    pub name: String,
    /// USB Vendor ID
    pub vid: u16,
    /// List of accepted USB Product IDs
    pub pid_list: Vec<u16>,
    /// Platform-specific port name hints (optional)
    #[serde(default)]
    pub name_hint: PlatformNameHint,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        // u-blox receivers enumerate under vendor 0x1546; the PIDs cover
        // the USB variants of generations 5 through 9.
        Self {
            name: "u-blox GNSS receiver".to_string(),
            vid: 0x1546,
            pid_list: vec![0x01a4, 0x01a5, 0x01a6, 0x01a7, 0x01a8, 0x01a9],
            name_hint: PlatformNameHint {
                windows: Some("COM".to_string()),
                macos: Some("usbmodem".to_string()),
                linux: Some("ttyACM".to_string()),
            },
        }
    }
}

/// Platform-specific port name hints for device detection fallback
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformNameHint {
    /// Windows port name pattern (e.g., "COM")
    pub windows: Option<String>,
    /// macOS port name pattern (e.g., "usbmodem")
    pub macos: Option<String>,
    /// Linux port name pattern (e.g., "ttyACM")
    pub linux: Option<String>,
}

impl PlatformNameHint {
    /// Returns the hint for the current platform
    pub fn current(&self) -> Option<&str> {
        #[cfg(windows)]
        {
            self.windows.as_deref()
        }
        #[cfg(target_os = "macos")]
        {
            self.macos.as_deref()
        }
        #[cfg(target_os = "linux")]
        {
            self.linux.as_deref()
        }
        #[cfg(not(any(windows, target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

// =============================================================================
// Application Configuration
// =============================================================================

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub link: LinkConfig,
    pub device: DeviceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Serial port name (empty = auto-detect using the device section)
    pub serial_port: String,

    /// UART baud rate (ignored by USB CDC ports)
    pub baud_rate: u32,

    /// Interval between poll requests (milliseconds)
    pub poll_interval_ms: u64,

    /// Poll ticks without a decoded message before giving up
    pub idle_timeout_ticks: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            serial_port: String::new(),
            baud_rate: DEFAULT_BAUD_RATE,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            idle_timeout_ticks: DEFAULT_IDLE_TIMEOUT_TICKS,
        }
    }
}

/// Get the config file path: `config.toml` next to the executable,
/// falling back to the working directory
pub fn config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("config.toml")))
        .filter(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

/// Load config from file, or fall back to defaults
pub fn load() -> Config {
    let path = config_path();

    if !path.exists() {
        return Config::default();
    }

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Config parse error in {:?}: {}, using defaults", path, e);
                Config::default()
            }
        },
        Err(e) => {
            warn!("Failed to read config {:?}: {}, using defaults", path, e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.device.vid, 0x1546);
        assert!(config.link.serial_port.is_empty());
        assert_eq!(config.link.baud_rate, DEFAULT_BAUD_RATE);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.device.vid, config.device.vid);
        assert_eq!(parsed.link.poll_interval_ms, config.link.poll_interval_ms);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: Config = toml::from_str("[link]\nbaud_rate = 115200\n").unwrap();
        assert_eq!(parsed.link.baud_rate, 115_200);
        assert_eq!(parsed.link.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(parsed.device.vid, 0x1546);
    }
}
