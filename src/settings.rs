//! Game settings and difficulty selection
//!
//! Persisted in LocalStorage on the web, read from a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::DifficultyCurve;

/// Named difficulty tunings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CurvePreset {
    #[default]
    Standard,
    Classic,
}

impl CurvePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurvePreset::Standard => "Standard",
            CurvePreset::Classic => "Classic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "std" => Some(CurvePreset::Standard),
            "classic" => Some(CurvePreset::Classic),
            _ => None,
        }
    }

    pub fn curve(&self) -> DifficultyCurve {
        match self {
            CurvePreset::Standard => DifficultyCurve::standard(),
            CurvePreset::Classic => DifficultyCurve::classic(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty preset, used unless `curve` is set
    pub preset: CurvePreset,
    /// Full custom tuning (overrides the preset)
    pub curve: Option<DifficultyCurve>,
    /// Fixed RNG seed; random per session when unset
    pub seed: Option<u64>,
    /// Debounce between activate impulses
    pub impulse_cooldown_ms: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: CurvePreset::Standard,
            curve: None,
            seed: None,
            impulse_cooldown_ms: crate::consts::IMPULSE_COOLDOWN_MS,
        }
    }
}

impl Settings {
    /// Create settings from a preset
    pub fn from_preset(preset: CurvePreset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// The curve a session should run with
    pub fn effective_curve(&self) -> DifficultyCurve {
        self.curve.clone().unwrap_or_else(|| self.preset.curve())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.effective_curve().check().map_err(ConfigError::Invalid)?;
        if !(self.impulse_cooldown_ms >= 0.0) {
            return Err(ConfigError::Invalid(
                "impulse_cooldown_ms must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "nibble_rush_settings";

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
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }
}
