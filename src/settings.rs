//! Round configuration
//!
//! Persisted in LocalStorage so a host can retune durations without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Tunable round parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds shown before the first word (0 skips straight to the round)
    pub countdown_seconds: u32,
    /// Seconds of play per round
    pub round_seconds: u32,
    /// Tilt angle (degrees) at or beyond which a reading counts as neutral
    pub tilt_limit_degrees: f64,
    /// Word list location
    pub words_url: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: COUNTDOWN_SECONDS,
            round_seconds: ROUND_SECONDS,
            tilt_limit_degrees: TILT_LIMIT_DEGREES,
            words_url: WORDS_URL.to_string(),
        }
    }
}

impl GameConfig {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "tilt_words_config";

    /// Reject values the controller cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if self.round_seconds == 0 {
            return Err(GameError::InvalidConfig("round_seconds must be at least 1"));
        }
        if !self.tilt_limit_degrees.is_finite() || self.tilt_limit_degrees <= 0.0 {
            return Err(GameError::InvalidConfig("tilt_limit_degrees must be positive"));
        }
        if self.words_url.is_empty() {
            return Err(GameError::InvalidConfig("words_url must not be empty"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.countdown_seconds, 3);
        assert_eq!(config.round_seconds, 13);
        assert_eq!(config.words_url, "words.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{"round_seconds": 60}"#).unwrap();
        assert_eq!(config.round_seconds, 60);
        assert_eq!(config.countdown_seconds, 3);
        assert_eq!(config.tilt_limit_degrees, 50.0);
    }

    #[test]
    fn test_rejects_zero_round() {
        let err = GameConfig::from_json(r#"{"round_seconds": 0}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_tilt_limit() {
        let config = GameConfig {
            tilt_limit_degrees: -5.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_countdown_allowed() {
        let config = GameConfig {
            countdown_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
