//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Scan tint presets for the shield widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScanPreset {
    /// Green scan (the classic)
    #[default]
    Emerald,
    /// Red scan
    Crimson,
    /// Blue scan
    Azure,
    /// Orange scan
    Amber,
}

impl ScanPreset {
    /// Get all presets
    pub fn all() -> &'static [ScanPreset] {
        &[
            ScanPreset::Emerald,
            ScanPreset::Crimson,
            ScanPreset::Azure,
            ScanPreset::Amber,
        ]
    }

    /// Get display name for the preset
    pub fn display_name(&self) -> &'static str {
        match self {
            ScanPreset::Emerald => "Emerald",
            ScanPreset::Crimson => "Crimson",
            ScanPreset::Azure => "Azure",
            ScanPreset::Amber => "Amber",
        }
    }
}

impl std::fmt::Display for ScanPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Scan widget settings
    pub scan: ScanSettings,
    /// Display and interface settings
    pub display: DisplaySettings,
}

/// Scan-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Wedge and backdrop tint
    pub color: ScanPreset,
    /// Animation loop period in milliseconds
    pub cycle_ms: u64,
    /// Counter tick interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Counter step per tick
    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_tick_ms() -> u64 {
    500
}

fn default_step() -> f64 {
    0.01
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            color: ScanPreset::Emerald,
            cycle_ms: 1500,
            tick_ms: default_tick_ms(),
            step: default_step(),
        }
    }
}

impl ScanSettings {
    /// Loop period, floored so a stored zero cannot stall the phase math.
    pub fn cycle(&self) -> Duration {
        Duration::from_millis(self.cycle_ms.max(100))
    }

    /// Counter tick interval, floored the same way.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(50))
    }
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Power saving mode - throttles the animation clock
    #[serde(default)]
    pub power_saving_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            power_saving_mode: false,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "aegis", "Aegis")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.scan.color, settings.scan.color);
        assert_eq!(loaded.scan.cycle_ms, settings.scan.cycle_ms);
        assert_eq!(loaded.scan.tick_ms, settings.scan.tick_ms);
        assert_eq!(loaded.display.dark_mode, settings.display.dark_mode);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        // Older settings files predate the tick/step fields.
        let json = r#"{
            "scan": { "color": "crimson", "cycle_ms": 2000 },
            "display": { "dark_mode": false }
        }"#;
        let loaded: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(loaded.scan.color, ScanPreset::Crimson);
        assert_eq!(loaded.scan.cycle_ms, 2000);
        assert_eq!(loaded.scan.tick_ms, 500);
        assert!((loaded.scan.step - 0.01).abs() < 1e-12);
        assert!(!loaded.display.power_saving_mode);
    }

    #[test]
    fn degenerate_durations_are_floored() {
        let mut settings = Settings::default();
        settings.scan.cycle_ms = 0;
        settings.scan.tick_ms = 0;
        assert!(settings.scan.cycle() >= Duration::from_millis(100));
        assert!(settings.scan.tick() >= Duration::from_millis(50));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = std::env::temp_dir().join("aegis-settings-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        match Settings::load_from_file(&path) {
            Err(SettingsError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
        let _ = std::fs::remove_file(&path);
    }
}
