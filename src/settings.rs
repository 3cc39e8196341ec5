//! Runtime settings
//!
//! Persisted in LocalStorage on the web; read from the file named by
//! `FRP_PONG_SETTINGS` on native. Game rules are fixed and live in `consts`.

use serde::{Deserialize, Serialize};

use crate::PongError;
use crate::consts::{RNG_SEED, TICK_INTERVAL_MS};

/// Runtime settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Respawn generator seed; `None` or `0` seeds from the platform RNG
    pub seed: Option<u32>,
    /// Timer period in milliseconds
    pub tick_interval_ms: u32,
    /// `log` level filter name (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: Some(RNG_SEED),
            tick_interval_ms: TICK_INTERVAL_MS,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, PongError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> Result<String, PongError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parsed log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Timer period as the browser's `setInterval` takes it
    pub fn interval_ms_i32(&self) -> i32 {
        i32::try_from(self.tick_interval_ms).unwrap_or(i32::MAX)
    }

    fn sanitized(mut self) -> Self {
        self.tick_interval_ms = self.tick_interval_ms.clamp(1, i32::MAX as u32);
        self
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "frp_pong_settings";

    /// Environment variable naming a settings file (native only)
    pub const ENV_VAR: &'static str = "FRP_PONG_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), PongError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| PongError::Platform("LocalStorage unavailable".to_string()))?;
        storage
            .set_item(Self::STORAGE_KEY, &self.to_json()?)
            .map_err(|e| PongError::Platform(format!("{:?}", e)))?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Settings file named by `$FRP_PONG_SETTINGS`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn path() -> Option<std::path::PathBuf> {
        std::env::var_os(Self::ENV_VAR).map(std::path::PathBuf::from)
    }

    /// Read and parse a settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, PongError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write settings as JSON to `path`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), PongError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load settings from `$FRP_PONG_SETTINGS`, or defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to `$FRP_PONG_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) -> Result<(), PongError> {
        let path = Self::path()
            .ok_or_else(|| PongError::Platform(format!("{} is not set", Self::ENV_VAR)))?;
        self.save_to(&path)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.seed, Some(20));
        assert_eq!(s.tick_interval_ms, 10);
        assert_eq!(s.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"seed": null, "log_level": "debug"}"#).unwrap();
        assert_eq!(s.seed, None);
        assert_eq!(s.tick_interval_ms, 10);
        assert_eq!(s.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let s = Settings::from_json(r#"{"tick_interval_ms": 0}"#).unwrap();
        assert_eq!(s.tick_interval_ms, 1);
    }

    #[test]
    fn test_oversized_interval_fits_set_interval() {
        let s = Settings::from_json(r#"{"tick_interval_ms": 4294967295}"#).unwrap();
        assert_eq!(s.tick_interval_ms, i32::MAX as u32);
        assert_eq!(s.interval_ms_i32(), i32::MAX);

        let raw = Settings {
            tick_interval_ms: u32::MAX,
            ..Settings::default()
        };
        assert_eq!(raw.interval_ms_i32(), i32::MAX);
        assert_eq!(Settings::default().interval_ms_i32(), 10);
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!("frp_pong_settings_{}.json", std::process::id()));
        let s = Settings {
            seed: Some(99),
            tick_interval_ms: 16,
            log_level: "debug".to_string(),
        };
        s.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), s);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("frp_pong_settings_does_not_exist.json");
        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, PongError::Io(_)));
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = Settings::from_json("{seed: 3").unwrap_err();
        assert!(matches!(err, PongError::Settings(_)));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let s = Settings {
            log_level: "loud".to_string(),
            ..Settings::default()
        };
        assert_eq!(s.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            seed: Some(7),
            ..Settings::default()
        };
        assert_eq!(Settings::from_json(&s.to_json().unwrap()).unwrap(), s);
    }
}
